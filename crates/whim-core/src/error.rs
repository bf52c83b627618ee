//! Error types for the responder.
//!
//! Responding itself never fails; these cover the ambient operations around
//! it (reading configuration, serializing responses).

use thiserror::Error;

/// Result type for responder operations.
pub type WhimResult<T> = Result<T, WhimError>;

/// Errors that can occur outside of response generation.
#[derive(Debug, Error)]
pub enum WhimError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// The variable name.
        var: &'static str,
        /// The raw value found.
        value: String,
    },

    /// A response could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
