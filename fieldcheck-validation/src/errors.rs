// Configuration errors

use thiserror::Error;

/// Errors raised for programmer-level misuse of a [`Validator`](crate::Validator).
///
/// These are never accumulated: validation failures are data, reported through
/// [`Validator::get_errors`](crate::Validator::get_errors). A `ConfigurationError`
/// means the validator was set up or driven incorrectly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A replacement template set did not cover every recognized error kind.
    #[error("New rule set has missing keys: '{}'", .0.join("', '"))]
    MissingTemplates(Vec<String>),

    /// `match_pattern` was called with a name that is not registered.
    #[error("Unknown pattern \"{0}\"")]
    UnknownPattern(String),

    /// A pattern registered through `add_pattern` does not compile.
    #[error("Pattern \"{name}\" is invalid: {reason}")]
    InvalidPattern { name: String, reason: String },

    /// A custom pattern rejected a value while diagnostics were enabled.
    #[error("Custom pattern \"{0}\" is invalid.")]
    InvalidCustomPattern(String),
}

impl ConfigurationError {
    /// Keys reported missing by [`ConfigurationError::MissingTemplates`].
    pub fn missing_keys(&self) -> &[String] {
        match self {
            ConfigurationError::MissingTemplates(keys) => keys,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
