/*!
 * Error types for the fanyi crate.
 *
 * The prompt builders themselves cannot fail. These types cover the parts
 * around them that can: strict language-tag parsing, prompt kind lookup,
 * and the configuration/IO work done by the command line tool.
 */

use thiserror::Error;

/// Errors raised while resolving prompt inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The tag is not a recognizable ISO 639 language code
    #[error("Invalid language code: {0}")]
    InvalidLanguageCode(String),

    /// The tag names a real language that cannot be polished
    #[error("Unsupported polish language: {code} ({name}), expected Chinese or English")]
    UnsupportedLanguage {
        /// Tag as given by the caller
        code: String,
        /// English name of the language the tag resolved to
        name: String,
    },

    /// No prompt kind matches the identifier
    #[error("Unknown prompt kind: {0}")]
    UnknownPromptKind(String),
}

/// Application error type for the command line tool
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error resolving prompt inputs
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
