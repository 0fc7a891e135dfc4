//! Error handling for name-forge

use thiserror::Error;

/// Main error type for name-forge
#[derive(Error, Debug, Clone)]
pub enum NameForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("LLM provider error ({provider}): {message}")]
    LlmProvider {
        provider: String,
        message: String,
        code: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl NameForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an LLM provider error
    pub fn llm_provider(
        provider: impl Into<String>,
        message: impl Into<String>,
        code: Option<String>,
    ) -> Self {
        Self::LlmProvider {
            provider: provider.into(),
            message: message.into(),
            code,
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether another provider (or a later attempt) might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { status_code, .. } => match status_code {
                None => true,
                Some(code) => *code == 429 || *code >= 500,
            },
            Self::Timeout { .. } | Self::LlmProvider { .. } => true,
            _ => false,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or configuration", message)
            }
            Self::LlmProvider { provider, message, .. } => {
                format!("❌ LLM provider ({}) error: {}\n💡 Check your API key and rate limits", provider, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 Try increasing NAME_FORGE_TIMEOUT_SECS", operation, timeout_secs)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 This might be a temporary issue, try again", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<serde_json::Error> for NameForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for NameForgeError {
    fn from(err: inquire::InquireError) -> Self {
        Self::cli(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NameForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(NameForgeError::network("reset", None, None).is_retryable());
        assert!(NameForgeError::network("busy", Some(503), None).is_retryable());
        assert!(NameForgeError::network("slow down", Some(429), None).is_retryable());
        assert!(!NameForgeError::network("bad key", Some(401), None).is_retryable());
        assert!(NameForgeError::timeout("generate", 30).is_retryable());
        assert!(!NameForgeError::validation("empty").is_retryable());
    }

    #[test]
    fn test_user_message_has_hint() {
        let msg = NameForgeError::timeout("Gemini generation", 12).user_message();
        assert!(msg.contains("12s"));
        assert!(msg.contains("NAME_FORGE_TIMEOUT_SECS"));
    }

    #[test]
    fn test_conversions_through_question_mark() {
        fn names(json: &str) -> Result<Vec<String>> {
            Ok(serde_json::from_str(json)?)
        }
        assert!(matches!(names("[\"ADNOC\""), Err(NameForgeError::Parse { .. })));

        fn prompt() -> Result<String> {
            let reply: std::result::Result<String, inquire::InquireError> =
                Err(inquire::InquireError::OperationCanceled);
            Ok(reply?)
        }
        assert!(matches!(prompt(), Err(NameForgeError::Cli { .. })));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("threshold {} out of range", 1.5);
        assert!(err.to_string().contains("threshold 1.5 out of range"));

        let err = validation_error!("empty name");
        assert!(matches!(err, NameForgeError::Validation { .. }));
    }
}
