//! Error types for versebook.
//!
//! Errors use `thiserror` and compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`SessionError`] - Browse session could not be opened
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failed
//!   - `std::io::Error` - Terminal or stdout failures
//!
//! # Recovery Strategy
//!
//! [`SessionError`] is **non-fatal**: the list screen logs it and stays up.
//! Boundary conditions (first/last entry, font at its floor) are not errors
//! at all; the corresponding operations are no-ops.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// A detail session could not be opened.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// JSON listing could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or stdout I/O failure. Fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised when opening a browse session.
///
/// **Recovery**: abort opening the detail view and keep showing the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The entry sequence was empty, so no position can be valid.
    #[error("cannot open a browse session over an empty entry list")]
    InvalidState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_message() {
        assert_eq!(
            SessionError::InvalidState.to_string(),
            "cannot open a browse session over an empty entry list"
        );
    }

    #[test]
    fn session_error_converts_into_app_error() {
        let err: AppError = SessionError::InvalidState.into();
        assert!(matches!(err, AppError::Session(SessionError::InvalidState)));
        assert!(err.to_string().starts_with("Session error:"));
    }

    #[test]
    fn io_error_converts_into_terminal_variant() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(err.to_string(), "Terminal error: broken pipe");
    }
}
