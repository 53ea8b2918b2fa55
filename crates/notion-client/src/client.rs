//! reqwest-backed implementation of [`NotionApi`].

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::api::NotionApi;
use crate::config::NotionConfig;
use crate::{Error, Result};

const NOTION_VERSION_HEADER: HeaderName = HeaderName::from_static("notion-version");

/// HTTP client for the Notion REST API.
///
/// Authentication and version headers are attached to every request.
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl NotionClient {
    /// Build a client from a configuration.
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            NOTION_VERSION_HEADER,
            HeaderValue::from_str(&config.notion_version)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout.as_secs(),
        })
    }

    /// Build a client from `NOTION_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&NotionConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending Notion request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    url: url.clone(),
                    secs: self.timeout_secs,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %url, "Notion API returned an error status");
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn search(&self, body: &Value) -> Result<Value> {
        self.send(Method::POST, "/search", Some(body)).await
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Value> {
        self.send(Method::GET, &format!("/pages/{}", page_id), None)
            .await
    }

    async fn list_block_children(&self, block_id: &str) -> Result<Value> {
        self.send(Method::GET, &format!("/blocks/{}/children", block_id), None)
            .await
    }

    async fn append_block_children(&self, block_id: &str, children: &[Value]) -> Result<Value> {
        let body = json!({ "children": children });
        self.send(
            Method::PATCH,
            &format!("/blocks/{}/children", block_id),
            Some(&body),
        )
        .await
    }

    async fn create_page(&self, body: &Value) -> Result<Value> {
        self.send(Method::POST, "/pages", Some(body)).await
    }

    async fn query_database(&self, database_id: &str, body: &Value) -> Result<Value> {
        self.send(
            Method::POST,
            &format!("/databases/{}/query", database_id),
            Some(body),
        )
        .await
    }
}
