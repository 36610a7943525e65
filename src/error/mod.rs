mod assertion;
mod config;
mod locate;

pub use assertion::{AssertionError, AssertionNotFoundError};
pub use config::ConfigError;
pub use locate::LocateError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<AssertionNotFoundError> for Error {
    fn from(err: AssertionNotFoundError) -> Self {
        Self::Assertion(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lifts_through_assertion_error() {
        let err: Error = AssertionNotFoundError::new("to_be_shiny").into();
        assert!(matches!(
            err,
            Error::Assertion(AssertionError::NotFound(ref inner)) if inner.name() == "to_be_shiny"
        ));
        assert_eq!(err.to_string(), "assertion not found: to_be_shiny");
    }
}
