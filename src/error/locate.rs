use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    /// Filesystem failure, passed through as the OS reported it.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LocateError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Io(err) => err,
        }
    }

    pub fn into_io_error(self) -> io::Error {
        match self {
            Self::Io(err) => err,
        }
    }
}

impl From<walkdir::Error> for LocateError {
    fn from(err: walkdir::Error) -> Self {
        // Only a symlink loop carries no OS error; walkdir describes it itself.
        if err.io_error().is_none() {
            return Self::Io(err.into());
        }
        Self::Io(
            err.into_io_error()
                .unwrap_or_else(|| io::Error::other("walkdir error without cause")),
        )
    }
}

impl From<glob::GlobError> for LocateError {
    fn from(err: glob::GlobError) -> Self {
        Self::Io(err.into())
    }
}
