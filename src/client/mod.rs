//! HTTP client for the Notion API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, the API
//! version header, and error mapping. It speaks in raw pages and property bags;
//! translating those into speakers is the mapper's job.

mod async_wrapper;
pub use async_wrapper::{AsyncNotionClient, AsyncNotionClientImpl};

use crate::config::Config;
use crate::error::{NotionApiError, NotionApiResult};
use crate::mapper::{self, PropertyBag};
use crate::metrics::{HttpTimer, Metrics};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Notion API version sent with every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Largest page size the query endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// A database row as returned by the pages and query endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Page {
    /// Page ID
    pub id: String,

    /// Canonical page URL
    #[serde(default)]
    pub url: Option<String>,

    /// Whether the page has been archived
    #[serde(default)]
    pub archived: bool,

    /// Whether the page is in the trash
    #[serde(default)]
    pub in_trash: bool,

    /// Property bag keyed by property name
    #[serde(default)]
    pub properties: PropertyBag,
}

/// One page of database query results.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QueryResponse {
    /// Rows on this page
    #[serde(default)]
    pub results: Vec<Page>,

    /// Whether another page follows
    #[serde(default)]
    pub has_more: bool,

    /// Opaque cursor for the next page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Database metadata returned by the retrieve-database endpoint.
#[derive(Debug, Clone, Deserialize)]
struct DatabaseResponse {
    id: String,
    #[serde(default)]
    title: Vec<Value>,
}

/// Summary of the configured database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseInfo {
    /// Database ID
    pub id: String,

    /// Database title, empty when untitled
    pub title: String,
}

/// Error payload returned by Notion for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the Notion API, scoped to one database.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct NotionClient {
    /// Base URL for the Notion API
    base_url: String,

    /// Integration token
    api_key: String,

    /// Database all pages are created in and queried from
    database_id: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl NotionClient {
    /// Create a new NotionClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.notion_api_url.clone(),
            api_key: config.notion_api_key.clone(),
            database_id: config.notion_database_id.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a NotionClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, database_id: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            database_id,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The database this client is scoped to.
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Attach authentication and version headers.
    fn authorize(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Notion-Version", NOTION_API_VERSION)
            .set("Content-Type", "application/json")
    }

    /// Execute a request, recording metrics and logging failures.
    fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> NotionApiResult<ureq::Response> {
        let timer = HttpTimer::start(&self.metrics);
        let url = self.build_url(path);

        tracing::debug!("{} {}", method, url);
        if let Some(body) = body {
            tracing::debug!(
                "Request body: {}",
                serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
            );
        }

        let request = self.authorize(self.agent.request(method, &url));
        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        }
        .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status());
                timer.finish(true);
            }
            Err(e) => {
                tracing::error!("{} {} - Error: {:?}", method, url, e);
                timer.finish(false);
            }
        }
        tracing::debug!("Notion API metrics: {:?}", self.metrics.summary());

        result
    }

    /// Read a response body and deserialize it.
    fn parse<T: serde::de::DeserializeOwned>(response: ureq::Response) -> NotionApiResult<T> {
        let body = response
            .into_string()
            .map_err(|e| NotionApiError::HttpError(e.to_string()))?;
        serde_json::from_str(&body).map_err(NotionApiError::JsonError)
    }

    /// Map a ureq error to a NotionApiError.
    fn map_error(&self, error: ureq::Error) -> NotionApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let raw = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = Self::error_message(&raw);

                match code {
                    404 => NotionApiError::NotFound(message),
                    _ => NotionApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                let io_kind = std::error::Error::source(&transport)
                    .and_then(|source| source.downcast_ref::<std::io::Error>())
                    .map(std::io::Error::kind);
                Self::transport_error(transport.kind(), io_kind, transport.to_string())
            }
        }
    }

    /// Only an I/O timeout becomes `Timeout`; other I/O failures keep their message.
    fn transport_error(
        kind: ureq::ErrorKind,
        io_kind: Option<std::io::ErrorKind>,
        message: String,
    ) -> NotionApiError {
        match (kind, io_kind) {
            (ureq::ErrorKind::ConnectionFailed, _) => {
                NotionApiError::HttpError("Connection failed".to_string())
            }
            (
                ureq::ErrorKind::Io,
                Some(std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock),
            ) => NotionApiError::Timeout,
            _ => NotionApiError::HttpError(message),
        }
    }

    /// Pull the human-readable message out of a Notion error body.
    fn error_message(raw: &str) -> String {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(ErrorBody {
                code: Some(code),
                message: Some(message),
            }) => format!("{} ({})", message, code),
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) => message,
            _ => raw.to_string(),
        }
    }

    fn page_path(page_id: &str) -> String {
        format!("/pages/{}", urlencoding::encode(page_id))
    }

    // ========================= Page Operations =========================

    /// Create a page in the configured database.
    pub fn create_page(&self, properties: &PropertyBag) -> NotionApiResult<Page> {
        tracing::info!("Creating page in database: {}", self.database_id);

        let body = json!({
            "parent": { "database_id": self.database_id },
            "properties": properties,
        });
        let response = self.execute("POST", "/pages", Some(&body))?;
        let page: Page = Self::parse(response)?;

        tracing::info!("Page created successfully with id: {}", page.id);
        Ok(page)
    }

    /// Retrieve a single page by ID.
    pub fn retrieve_page(&self, page_id: &str) -> NotionApiResult<Page> {
        let response = self.execute("GET", &Self::page_path(page_id), None)?;
        let page: Page = Self::parse(response)?;
        self.metrics.record_speakers_fetched(1);
        Ok(page)
    }

    /// Update some properties of a page. Properties not in the bag are untouched.
    pub fn update_page(&self, page_id: &str, properties: &PropertyBag) -> NotionApiResult<Page> {
        let body = json!({ "properties": properties });
        let response = self.execute("PATCH", &Self::page_path(page_id), Some(&body))?;
        Self::parse(response)
    }

    /// Archive (soft delete) a page.
    pub fn archive_page(&self, page_id: &str) -> NotionApiResult<Page> {
        tracing::info!("Archiving page: {}", page_id);

        let body = json!({ "archived": true });
        let response = self.execute("PATCH", &Self::page_path(page_id), Some(&body))?;
        Self::parse(response)
    }

    // ========================= Database Operations =========================

    /// Query one page of rows from the configured database.
    ///
    /// # Arguments
    /// * `filter` - Notion filter object, `None` to match every row
    /// * `page_size` - Rows to request, capped at [`MAX_PAGE_SIZE`]
    /// * `start_cursor` - Cursor from a previous response's `next_cursor`
    pub fn query_database(
        &self,
        filter: Option<&Value>,
        page_size: usize,
        start_cursor: Option<&str>,
    ) -> NotionApiResult<QueryResponse> {
        let mut body = serde_json::Map::new();
        if let Some(filter) = filter {
            body.insert("filter".into(), filter.clone());
        }
        if page_size > 0 {
            body.insert("page_size".into(), json!(page_size.min(MAX_PAGE_SIZE)));
        }
        if let Some(cursor) = start_cursor {
            body.insert("start_cursor".into(), json!(cursor));
        }

        let path = format!("/databases/{}/query", urlencoding::encode(&self.database_id));
        let response = self.execute("POST", &path, Some(&Value::Object(body)))?;
        let page: QueryResponse = Self::parse(response)?;

        self.metrics.record_speakers_fetched(page.results.len());
        Ok(page)
    }

    /// Retrieve metadata for the configured database.
    pub fn retrieve_database(&self) -> NotionApiResult<DatabaseInfo> {
        let path = format!("/databases/{}", urlencoding::encode(&self.database_id));
        let response = self.execute("GET", &path, None)?;
        let database: DatabaseResponse = Self::parse(response)?;

        Ok(DatabaseInfo {
            id: database.id,
            title: mapper::plain_text(&database.title),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_timeout_only_for_timed_out_io() {
        let err = NotionClient::transport_error(
            ureq::ErrorKind::Io,
            Some(std::io::ErrorKind::TimedOut),
            "timed out reading response".to_string(),
        );
        assert!(matches!(err, NotionApiError::Timeout));

        let err = NotionClient::transport_error(
            ureq::ErrorKind::Io,
            Some(std::io::ErrorKind::ConnectionReset),
            "Network Error: connection reset by peer".to_string(),
        );
        match err {
            NotionApiError::HttpError(message) => {
                assert_eq!(message, "Network Error: connection reset by peer")
            }
            other => panic!("Expected HttpError, got {:?}", other),
        }

        let err = NotionClient::transport_error(ureq::ErrorKind::Io, None, "io".to_string());
        assert!(matches!(err, NotionApiError::HttpError(_)));
    }

    #[test]
    fn test_transport_error_connection_failed() {
        let err = NotionClient::transport_error(
            ureq::ErrorKind::ConnectionFailed,
            None,
            "Connection Failed: refused".to_string(),
        );
        match err {
            NotionApiError::HttpError(message) => assert_eq!(message, "Connection failed"),
            other => panic!("Expected HttpError, got {:?}", other),
        }
    }

    #[test]
    fn test_build_url() {
        let client = NotionClient::with_base_url(
            "https://api.example.com/v1".to_string(),
            "secret".to_string(),
            "db1".to_string(),
        );

        assert_eq!(
            client.build_url("/pages"),
            "https://api.example.com/v1/pages"
        );
        assert_eq!(
            client.build_url("pages"),
            "https://api.example.com/v1/pages"
        );

        let client_with_slash = NotionClient::with_base_url(
            "https://api.example.com/v1/".to_string(),
            "secret".to_string(),
            "db1".to_string(),
        );
        assert_eq!(
            client_with_slash.build_url("/pages"),
            "https://api.example.com/v1/pages"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            notion_api_key: "secret_123".to_string(),
            notion_database_id: "db-abc".to_string(),
            ..Default::default()
        };

        let client = NotionClient::new(&config);
        assert_eq!(client.base_url, "https://api.notion.com/v1");
        assert_eq!(client.api_key, "secret_123");
        assert_eq!(client.database_id(), "db-abc");
    }

    #[test]
    fn test_page_path_encodes_id() {
        assert_eq!(NotionClient::page_path("abc"), "/pages/abc");
        assert_eq!(NotionClient::page_path("a/b"), "/pages/a%2Fb");
    }

    #[test]
    fn test_error_message_extraction() {
        let raw = r#"{"object":"error","status":400,"code":"validation_error","message":"body failed validation"}"#;
        assert_eq!(
            NotionClient::error_message(raw),
            "body failed validation (validation_error)"
        );
        assert_eq!(NotionClient::error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_page_deserialization_defaults() {
        let page: Page = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        assert_eq!(page.id, "p1");
        assert!(page.url.is_none());
        assert!(!page.archived);
        assert!(page.properties.is_empty());
    }
}
