//! Error types for emergence.
//!
//! All fallible library functions return `Result<T, SimError>` instead of
//! panicking; the binaries fail fast with a descriptive message.

use thiserror::Error;

/// Result type alias for emergence operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type for all emergence operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid argument to a simulation primitive.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Rendering backend failure (drawing or encoding).
    #[error("Render error: {message}")]
    Render {
        /// Description of the backend failure.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SimError {
    /// Create an invalid-argument error with a message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a render error with a message.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error rejects caller input (as opposed to backend failure).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::Config { .. } | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SimError::invalid_argument("probability 1.5 outside [0, 1]");
        assert!(err.is_invalid_input());
        let msg = err.to_string();
        assert!(msg.contains("Invalid argument"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_config_display() {
        let err = SimError::config("fps must be positive");
        assert!(err.is_invalid_input());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("fps"));
    }

    #[test]
    fn test_render_display() {
        let err = SimError::render("backend refused frame");
        assert!(!err.is_invalid_input());
        let msg = err.to_string();
        assert!(msg.contains("Render error"));
        assert!(msg.contains("backend refused frame"));
    }

    #[test]
    fn test_serialization_display() {
        let err = SimError::serialization("bad frame record");
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::other("disk full");
        let err = SimError::from(io);
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = SimError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
