//! Custom error types for folio-rs
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

use crate::api::resource::Resource;

/// Main error type for the folio-rs application
#[derive(Error, Debug)]
pub enum FolioError {
    /// A resource request failed (non-2xx status or transport failure)
    ///
    /// The message is the resource's fixed text; `detail` is kept for logs.
    #[error("{}", resource.failure_message())]
    Fetch {
        /// Resource that was requested
        resource: Resource,
        /// Status code or transport cause
        detail: String,
    },

    /// The request was cancelled before a response arrived
    #[error("Request cancelled.")]
    Cancelled,

    /// A form submission was rejected by the backend
    #[error("Could not submit the {form}: {message}")]
    Submit {
        /// Form name ("contact message", "newsletter subscription")
        form: &'static str,
        /// Message returned by the backend, or the status
        message: String,
    },

    /// The configured API base address is not a valid URL
    #[error("Invalid API address '{url}': {reason}\n\n  → Expected something like http://localhost:8000/api\n  → Run 'folio config set api-url <URL>' to change it.")]
    InvalidBaseUrl { url: String, reason: String },

    /// Strict theme lookup failed (CLI only; the registry itself never fails)
    #[error("Unknown theme '{0}'.\n\n  → Run 'folio themes list' to see available themes.")]
    UnknownTheme(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl FolioError {
    /// Build the generic fetch failure for a resource
    pub fn fetch(resource: Resource, detail: impl Into<String>) -> Self {
        FolioError::Fetch {
            resource,
            detail: detail.into(),
        }
    }

    /// Whether this error is a cancellation rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FolioError::Cancelled)
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for FolioError {
    fn from(err: toml::ser::Error) -> Self {
        FolioError::Toml(err.to_string())
    }
}

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
