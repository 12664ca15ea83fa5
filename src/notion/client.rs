use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client, Url};
use serde::Deserialize;

use crate::config::Config;

use super::{error::NotionError, types::BlockChildren};

/// Arguments for one call to the "list block children" endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChildrenRequest {
    pub block_id: String,
    pub start_cursor: Option<String>,
    pub page_size: u32,
}

/// The slice of the Notion API the fetcher depends on.
#[async_trait]
pub trait NotionClient: Send + Sync {
    async fn list_children(&self, request: ListChildrenRequest)
        -> Result<BlockChildren, NotionError>;
}

pub struct HttpNotionClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    notion_version: String,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl HttpNotionClient {
    pub fn new(config: &Config) -> Result<Self, NotionError> {
        let base_url = Url::parse(&config.notion_api_base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| NotionError::InvalidBaseUrl(config.notion_api_base_url.clone()))?;

        let http = Client::builder().build()?;

        Ok(HttpNotionClient {
            http,
            base_url,
            token: config.notion_token.clone(),
            notion_version: config.notion_version.clone(),
        })
    }

    /// The block id always lands in a single escaped path segment.
    fn children_url(&self, block_id: &str) -> Result<Url, NotionError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| NotionError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v1", "blocks", block_id, "children"]);

        Ok(url)
    }
}

#[async_trait]
impl NotionClient for HttpNotionClient {
    async fn list_children(
        &self,
        request: ListChildrenRequest,
    ) -> Result<BlockChildren, NotionError> {
        let url = self.children_url(&request.block_id)?;

        let mut query = vec![("page_size", request.page_size.to_string())];
        if let Some(cursor) = request.start_cursor {
            query.push(("start_cursor", cursor));
        }

        debug!("GET {} {:?}", url, query);

        let mut builder = self
            .http
            .get(url)
            .query(&query)
            .header("Notion-Version", &self.notion_version);

        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error: ErrorBody = serde_json::from_slice(&body).unwrap_or_else(|_| ErrorBody {
                message: String::from_utf8_lossy(&body).into_owned(),
                ..ErrorBody::default()
            });

            return Err(NotionError::Api {
                status: status.as_u16(),
                code: error.code,
                message: error.message,
            });
        }

        serde_json::from_slice(&body).map_err(NotionError::Decode)
    }
}
