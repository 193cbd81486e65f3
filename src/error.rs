//! Error types for the Speaker Tracker MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every error can be classified with an [`ErrorKind`] so callers can branch on the
//! failure category without matching on rendered messages.

use crate::domain::ValidationError;
use thiserror::Error;

/// Broad failure categories shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input rejected before any remote call
    Validation,
    /// Missing or malformed startup configuration
    Configuration,
    /// Unknown or archived page
    NotFound,
    /// Any other non-2xx or unparseable upstream response
    Remote,
    /// Network failure or timeout
    Transport,
}

/// Errors that can occur when interacting with the Notion API.
#[derive(Error, Debug)]
pub enum NotionApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Resource not found or archived
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl NotionApiError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HttpError(_) | Self::Timeout => ErrorKind::Transport,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ApiError { .. } | Self::JsonError(_) => ErrorKind::Remote,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

impl ConfigError {
    /// Configuration errors are always fatal.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

/// Errors surfaced by the tool dispatch layer.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Input rejected before contacting Notion
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Notion call failed
    #[error(transparent)]
    Api(#[from] NotionApiError),
}

impl ToolError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Api(e) => e.kind(),
        }
    }
}

/// Convenience type alias for Results with NotionApiError
pub type NotionApiResult<T> = Result<T, NotionApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ToolError
pub type ToolResult<T> = Result<T, ToolError>;
