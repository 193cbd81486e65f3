//! Configuration management for the Speaker Tracker MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file silently if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Notion API base URL.
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

/// Configuration for the Speaker Tracker MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Notion API base URL
    pub notion_api_url: String,

    /// Notion integration token
    pub notion_api_key: String,

    /// ID of the speakers database
    pub notion_database_id: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Number of speakers `list_speakers` returns when no limit is given (default: 50)
    pub list_default_limit: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NOTION_API_KEY`: Notion integration token
    /// - `NOTION_DATABASE_ID`: ID of the speakers database
    ///
    /// Optional environment variables:
    /// - `NOTION_API_BASE_URL`: API base URL (default: https://api.notion.com/v1)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `LIST_DEFAULT_LIMIT`: Default `list_speakers` limit (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let notion_api_key = Self::required_var("NOTION_API_KEY")?;
        let notion_database_id = Self::required_var("NOTION_DATABASE_ID")?;

        let notion_api_url = env::var("NOTION_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_NOTION_API_URL.to_string());
        if !notion_api_url.starts_with("http://") && !notion_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "NOTION_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let list_default_limit = Self::parse_env_usize("LIST_DEFAULT_LIMIT", 50)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            notion_api_url,
            notion_api_key,
            notion_database_id,
            request_timeout,
            list_default_limit,
            log_level,
        })
    }

    /// Read a required variable, rejecting missing or blank values.
    fn required_var(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        Ok(value)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notion_api_url: DEFAULT_NOTION_API_URL.to_string(),
            notion_api_key: String::new(),
            notion_database_id: String::new(),
            request_timeout: 30,
            list_default_limit: 50,
            log_level: "error".to_string(),
        }
    }
}
