use async_trait::async_trait;
use serde_json::{json, Value};
use speaker_tracker_mcp::client::{AsyncNotionClient, DatabaseInfo, Page, QueryResponse};
use speaker_tracker_mcp::error::{NotionApiError, NotionApiResult};
use speaker_tracker_mcp::mapper::PropertyBag;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Arguments of one recorded `query_database` call.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub filter: Option<Value>,
    pub page_size: usize,
    pub start_cursor: Option<String>,
}

/// Mock Notion client for testing.
///
/// Pages live in memory; query responses are scripted and served in order.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockNotionClient {
    pages: Arc<Mutex<HashMap<String, Page>>>,
    query_responses: Arc<Mutex<VecDeque<QueryResponse>>>,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
    updates: Arc<Mutex<Vec<(String, PropertyBag)>>>,
    created: Arc<Mutex<Vec<PropertyBag>>>,
    database_title: Arc<Mutex<String>>,
    failure: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockNotionClient {
    pub fn new() -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            query_responses: Arc::new(Mutex::new(VecDeque::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
            updates: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(Mutex::new(Vec::new())),
            database_title: Arc::new(Mutex::new("SAPA Speakers".to_string())),
            failure: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_page(&self, page: Page) {
        let mut pages = self.pages.lock().unwrap();
        pages.insert(page.id.clone(), page);
    }

    pub fn push_query_response(&self, response: QueryResponse) {
        self.query_responses.lock().unwrap().push_back(response);
    }

    pub fn set_database_title(&self, title: &str) {
        *self.database_title.lock().unwrap() = title.to_string();
    }

    /// Make every subsequent call fail with an upstream error.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, PropertyBag)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<PropertyBag> {
        self.created.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, method: &str) -> NotionApiResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(NotionApiError::ApiError {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockNotionClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a page holding the given properties.
#[allow(dead_code)]
pub fn page(id: &str, properties: Value) -> Page {
    serde_json::from_value(json!({
        "id": id,
        "url": format!("https://www.notion.so/{}", id),
        "properties": properties,
    }))
    .unwrap()
}

/// Build a page with only a name set.
#[allow(dead_code)]
pub fn named_page(id: &str, name: &str) -> Page {
    page(
        id,
        json!({ "Name": { "title": [{ "plain_text": name }] } }),
    )
}

#[async_trait]
impl AsyncNotionClient for MockNotionClient {
    async fn create_page(&self, properties: &PropertyBag) -> NotionApiResult<Page> {
        self.track_call("create_page")?;
        self.created.lock().unwrap().push(properties.clone());

        let mut pages = self.pages.lock().unwrap();
        let id = format!("page-{}", pages.len() + 1);
        let created = page(&id, Value::Object(properties.clone()));
        pages.insert(id, created.clone());
        Ok(created)
    }

    async fn retrieve_page(&self, page_id: &str) -> NotionApiResult<Page> {
        self.track_call("retrieve_page")?;

        let pages = self.pages.lock().unwrap();
        pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| NotionApiError::NotFound(format!("Page {} not found", page_id)))
    }

    async fn update_page(
        &self,
        page_id: &str,
        properties: &PropertyBag,
    ) -> NotionApiResult<Page> {
        self.track_call("update_page")?;
        self.updates
            .lock()
            .unwrap()
            .push((page_id.to_string(), properties.clone()));

        let mut pages = self.pages.lock().unwrap();
        let existing = pages
            .get_mut(page_id)
            .ok_or_else(|| NotionApiError::NotFound(format!("Page {} not found", page_id)))?;
        for (key, value) in properties {
            existing.properties.insert(key.clone(), value.clone());
        }
        Ok(existing.clone())
    }

    async fn archive_page(&self, page_id: &str) -> NotionApiResult<Page> {
        self.track_call("archive_page")?;

        let mut pages = self.pages.lock().unwrap();
        let existing = pages
            .get_mut(page_id)
            .ok_or_else(|| NotionApiError::NotFound(format!("Page {} not found", page_id)))?;
        existing.archived = true;
        Ok(existing.clone())
    }

    async fn query_database(
        &self,
        filter: Option<&Value>,
        page_size: usize,
        start_cursor: Option<&str>,
    ) -> NotionApiResult<QueryResponse> {
        self.track_call("query_database")?;
        self.queries.lock().unwrap().push(RecordedQuery {
            filter: filter.cloned(),
            page_size,
            start_cursor: start_cursor.map(String::from),
        });

        Ok(self
            .query_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn retrieve_database(&self) -> NotionApiResult<DatabaseInfo> {
        self.track_call("retrieve_database")?;

        Ok(DatabaseInfo {
            id: "db-mock".to_string(),
            title: self.database_title.lock().unwrap().clone(),
        })
    }

    fn database_id(&self) -> &str {
        "db-mock"
    }
}
