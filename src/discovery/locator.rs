use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::discovery::options::LocateOptions;
use crate::error::LocateError;

/// Finds files whose basename matches a shell-glob pattern.
///
/// The root is made absolute once, when the locator is built. Every call to
/// [`Locator::matches`] starts an independent traversal.
#[derive(Debug, Clone)]
pub struct Locator {
    pattern: Pattern,
    root: PathBuf,
    recursive: bool,
    follow_links: bool,
}

impl Locator {
    pub fn new(options: &LocateOptions) -> Result<Self, LocateError> {
        let pattern = compile_pattern(&options.pattern);

        let root = match &options.root {
            Some(root) => std::path::absolute(root)?,
            None => std::env::current_dir()?,
        };

        Ok(Self {
            pattern,
            root,
            recursive: options.recursive,
            follow_links: false,
        })
    }

    /// Follow symbolic links while walking. Off by default; a link cycle is
    /// then reported by walkdir as an error for that entry.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Starts a fresh, lazy traversal.
    pub fn matches(&self) -> Result<Matches, LocateError> {
        // Surface a missing or unreadable root before yielding anything.
        fs::read_dir(&self.root)?;

        debug!(
            root = %self.root.display(),
            pattern = self.pattern.as_str(),
            recursive = self.recursive,
            "locating files"
        );

        let inner = if self.recursive {
            Inner::Walk {
                walker: WalkDir::new(&self.root)
                    .follow_links(self.follow_links)
                    .into_iter(),
                pattern: self.pattern.clone(),
            }
        } else {
            let escaped = PathBuf::from(Pattern::escape(&self.root.to_string_lossy()));
            let expr = escaped.join(self.pattern.as_str());
            let options = MatchOptions {
                require_literal_leading_dot: true,
                ..MatchOptions::new()
            };
            let paths = glob::glob_with(&expr.to_string_lossy(), options)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            Inner::Glob {
                paths,
                root: self.root.clone(),
            }
        };

        Ok(Matches { inner })
    }

    pub fn locate(&self) -> Result<Vec<PathBuf>, LocateError> {
        self.matches()?.collect()
    }
}

/// Compiles `pattern` with fnmatch leniency: a `[` with no closing `]` is a
/// literal bracket and runs of `*` collapse into one.
fn compile_pattern(pattern: &str) -> Pattern {
    let normalized = fnmatch_syntax(pattern);
    Pattern::new(&normalized).unwrap_or_else(|_| {
        debug!(pattern, "pattern not expressible as a glob, matching literally");
        // Escaping leaves no metacharacters, so this cannot fail.
        Pattern::new(&Pattern::escape(pattern)).unwrap_or_default()
    })
}

fn fnmatch_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// `[` or `[!` belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

/// Lazy sequence of matched paths. Not restartable; ask the [`Locator`]
/// for a new one instead.
pub struct Matches {
    inner: Inner,
}

enum Inner {
    Walk {
        walker: walkdir::IntoIter,
        pattern: Pattern,
    },
    Glob {
        paths: glob::Paths,
        root: PathBuf,
    },
}

impl Iterator for Matches {
    type Item = Result<PathBuf, LocateError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Walk { walker, pattern } => loop {
                let entry = match walker.next()? {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(e.into())),
                };

                if entry.file_type().is_dir() {
                    continue;
                }
                // A link to a directory counts as a directory even when it is not followed.
                if entry.path_is_symlink() && entry.path().is_dir() {
                    continue;
                }

                let matched = pattern.matches(&entry.file_name().to_string_lossy());
                if matched {
                    trace!(path = %entry.path().display(), "matched");
                    return Some(Ok(entry.into_path()));
                }
            },
            Inner::Glob { paths, root } => loop {
                let path = match paths.next()? {
                    Ok(path) => path,
                    Err(e) => return Some(Err(e.into())),
                };

                // A separator in the pattern would reach below the root.
                if path.parent() != Some(root.as_path()) {
                    continue;
                }

                trace!(path = %path.display(), "matched");
                return Some(Ok(path));
            },
        }
    }
}

/// Locates files matching `pattern` under `root`.
///
/// With `recursive` the whole subtree is searched, otherwise only `root`
/// itself. Returned paths are absolute; their order is unspecified.
///
/// The non-recursive form is plain glob expansion: a directory whose name
/// matches is returned too, and hidden entries only match a pattern that
/// starts with `.`.
pub fn locate(
    pattern: &str,
    root: impl AsRef<Path>,
    recursive: bool,
) -> Result<Vec<PathBuf>, LocateError> {
    let options = LocateOptions::new(pattern)
        .root(root.as_ref())
        .recursive(recursive);
    locate_with(&options)
}

pub fn locate_with(options: &LocateOptions) -> Result<Vec<PathBuf>, LocateError> {
    Locator::new(options)?.locate()
}
