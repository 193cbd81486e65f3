//! Async wrapper around synchronous NotionClient.
//!
//! This module provides an async interface to the synchronous NotionClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{DatabaseInfo, NotionClient, Page, QueryResponse};
use crate::error::{NotionApiError, NotionApiResult};
use crate::mapper::PropertyBag;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async wrapper trait for Notion client operations.
///
/// This trait provides async versions of all NotionClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid
/// blocking the async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncNotionClient: Send + Sync {
    async fn create_page(&self, properties: &PropertyBag) -> NotionApiResult<Page>;
    async fn retrieve_page(&self, page_id: &str) -> NotionApiResult<Page>;
    async fn update_page(&self, page_id: &str, properties: &PropertyBag)
        -> NotionApiResult<Page>;
    async fn archive_page(&self, page_id: &str) -> NotionApiResult<Page>;

    async fn query_database(
        &self,
        filter: Option<&Value>,
        page_size: usize,
        start_cursor: Option<&str>,
    ) -> NotionApiResult<QueryResponse>;
    async fn retrieve_database(&self) -> NotionApiResult<DatabaseInfo>;

    /// ID of the database every call is scoped to.
    fn database_id(&self) -> &str;
}

/// Async wrapper around synchronous NotionClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncNotionClientImpl {
    client: Arc<NotionClient>,
}

impl AsyncNotionClientImpl {
    pub fn new(client: NotionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> NotionApiError {
    NotionApiError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncNotionClient for AsyncNotionClientImpl {
    async fn create_page(&self, properties: &PropertyBag) -> NotionApiResult<Page> {
        let client = self.client.clone();
        let properties = properties.clone();

        tokio::task::spawn_blocking(move || client.create_page(&properties))
            .await
            .map_err(join_error)?
    }

    async fn retrieve_page(&self, page_id: &str) -> NotionApiResult<Page> {
        let client = self.client.clone();
        let page_id = page_id.to_string();

        tokio::task::spawn_blocking(move || client.retrieve_page(&page_id))
            .await
            .map_err(join_error)?
    }

    async fn update_page(
        &self,
        page_id: &str,
        properties: &PropertyBag,
    ) -> NotionApiResult<Page> {
        let client = self.client.clone();
        let page_id = page_id.to_string();
        let properties = properties.clone();

        tokio::task::spawn_blocking(move || client.update_page(&page_id, &properties))
            .await
            .map_err(join_error)?
    }

    async fn archive_page(&self, page_id: &str) -> NotionApiResult<Page> {
        let client = self.client.clone();
        let page_id = page_id.to_string();

        tokio::task::spawn_blocking(move || client.archive_page(&page_id))
            .await
            .map_err(join_error)?
    }

    async fn query_database(
        &self,
        filter: Option<&Value>,
        page_size: usize,
        start_cursor: Option<&str>,
    ) -> NotionApiResult<QueryResponse> {
        let client = self.client.clone();
        let filter = filter.cloned();
        let start_cursor = start_cursor.map(String::from);

        tokio::task::spawn_blocking(move || {
            client.query_database(filter.as_ref(), page_size, start_cursor.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    async fn retrieve_database(&self) -> NotionApiResult<DatabaseInfo> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.retrieve_database())
            .await
            .map_err(join_error)?
    }

    fn database_id(&self) -> &str {
        self.client.database_id()
    }
}
