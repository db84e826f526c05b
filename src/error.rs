//! Error handling for domain-hunt

use thiserror::Error;

/// Main error type for domain-hunt
#[derive(Error, Debug, Clone)]
pub enum DomainHuntError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("WHOIS error for '{domain}': {message}")]
    Whois {
        domain: String,
        message: String,
        server: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        address: Option<String>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        server: Option<String>,
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

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl DomainHuntError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a WHOIS lookup error
    pub fn whois(
        domain: impl Into<String>,
        message: impl Into<String>,
        server: Option<String>,
    ) -> Self {
        Self::Whois {
            domain: domain.into(),
            message: message.into(),
            server,
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>, address: Option<String>) -> Self {
        Self::Network {
            message: message.into(),
            address,
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(message: impl Into<String>, server: Option<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
            server,
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

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the error came from talking to a remote server
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::RateLimit { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your flags or .env file", message)
            }
            Self::Whois { domain, message, .. } => {
                format!("⚠️  Could not look up '{}': {}", domain, message)
            }
            Self::Network { message, address } => {
                let target = address.as_ref().map_or(String::new(), |a| format!(" ({})", a));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", target, message)
            }
            Self::RateLimit { message, .. } => {
                format!("⏱️  Rate limit exceeded: {}\n💡 Wait a while before searching again", message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 Try a larger --whois-timeout", operation, timeout_secs)
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
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<serde_json::Error> for DomainHuntError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for DomainHuntError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainHuntError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DomainHuntError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainHuntError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::DomainHuntError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainHuntError::validation(format!($fmt, $($arg)*))
    };
}
