use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::io::{self, Write};
use vows_support::cli::{self, Command, OutputFormat};
use vows_support::discovery::Locator;
use vows_support::logging::{self, Verbosity};
use vows_support::template;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet))
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")?;

    match args.command {
        Command::Locate(locate) => run_locate(&locate),
        Command::Template(tpl) => {
            let version = tpl
                .version_string
                .as_deref()
                .unwrap_or(vows_support::VERSION);
            template::render_template(version).context("Failed to write template")
        }
    }
}

fn run_locate(args: &cli::LocateArgs) -> Result<()> {
    let options = args.to_options().context("Invalid arguments")?;
    let locator = Locator::new(&options)
        .with_context(|| format!("Cannot search for '{}'", options.pattern))?;

    let started = std::time::SystemTime::now();
    let files = locator
        .locate()
        .with_context(|| format!("Failed to search {}", locator.root().display()))?;
    tracing::info!(
        count = files.len(),
        seconds = vows_support::timing::elapsed(started),
        format = args.format.as_str(),
        "located files"
    );

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            for file in &files {
                writeln!(out, "{}", file.display())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &files)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
