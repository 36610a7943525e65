use thiserror::Error;

/// Raised when a named assertion has no handler bound on the resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("assertion not found: {name}")]
pub struct AssertionNotFoundError {
    name: String,
}

impl AssertionNotFoundError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that was requested.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Base kind for everything an assertion can fail with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssertionError {
    #[error(transparent)]
    NotFound(#[from] AssertionNotFoundError),

    #[error("{assertion}: {message}")]
    Failed { assertion: String, message: String },

    #[error("{assertion} expects {expected} argument(s), got {found}")]
    Arity {
        assertion: String,
        expected: usize,
        found: usize,
    },
}

impl AssertionError {
    pub fn failed(assertion: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            assertion: assertion.into(),
            message: message.into(),
        }
    }

    pub fn arity(assertion: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::Arity {
            assertion: assertion.into(),
            expected,
            found,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
