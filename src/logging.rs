use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity chosen on the command line. Ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("vows_support={level},vows={level}")
    }
}

/// Crate-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "VOWS_LOG";

/// Picks the filter directives: `VOWS_LOG`, then `RUST_LOG`, then the
/// default for `verbosity`. Blank variables count as unset.
fn filter_directives(vows_log: Option<&str>, rust_log: Option<&str>, verbosity: Verbosity) -> String {
    [vows_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directives| !directives.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| verbosity.to_filter())
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    let vows_log = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(vows_log.as_deref(), rust_log.as_deref(), verbosity);

    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()))
}

/// Installs the global subscriber. Everything goes to stderr: stdout carries
/// located paths and rendered templates and must stay clean for redirection.
///
/// Fails if a global subscriber is already installed, e.g. when a host
/// runner embedding this crate set up its own.
pub fn init(verbosity: Verbosity) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    match verbosity {
        Verbosity::Quiet => subscriber.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => subscriber
            .with_writer(std::io::stderr)
            .without_time()
            .try_init(),
        _ => subscriber.with_writer(std::io::stderr).try_init(),
    }
}
