//! Shell error model.

use thiserror::Error;

/// Result type used across the shell.
pub type ShellResult<T> = Result<T, ShellError>;

/// Shell-level error.
///
/// None of these reach the user: the shell degrades to placeholder state
/// instead. They exist so adapters and constructors can say what went wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A route path failed validation.
    #[error("invalid route path: {0}")]
    InvalidRoute(String),

    /// Two navigation entries share the same path.
    #[error("duplicate route path: {0}")]
    DuplicateRoute(String),

    /// A value could not be interpreted as a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The persisted session store rejected an operation.
    #[error("session storage failure: {0}")]
    Storage(String),
}

impl ShellError {
    pub fn invalid_route(msg: impl Into<String>) -> Self {
        Self::InvalidRoute(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
