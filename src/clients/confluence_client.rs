/// Confluence REST API 客户端
///
/// 封装空间列表、页面分页和正文获取三个接口
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::clients::platform::ContentPlatform;
use crate::config::Config;
use crate::error::TransportError;
use crate::models::{ContentListing, PageDescriptor, Workspace};

/// 空间列表每页数量
const SPACE_PAGE_SIZE: usize = 25;

/// Confluence 客户端
pub struct ConfluenceClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl ConfluenceClient {
    /// 创建新的 Confluence 客户端
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            http,
            base_url: config.confluence_base_url.trim_end_matches('/').to_string(),
            username: config.confluence_username.clone(),
            api_token: config.confluence_api_token.clone(),
        })
    }

    /// 发送 GET 请求并解析 JSON
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| TransportError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

#[async_trait]
impl ContentPlatform for ConfluenceClient {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, TransportError> {
        let mut workspaces = Vec::new();
        let mut start = 0;

        loop {
            let listing: Listing<SpaceItem> = self
                .get_json(
                    "/wiki/rest/api/space",
                    &[
                        ("start", start.to_string()),
                        ("limit", SPACE_PAGE_SIZE.to_string()),
                    ],
                )
                .await?;

            workspaces.extend(listing.results.into_iter().map(|space| Workspace {
                key: space.key,
                name: space.name,
            }));

            if listing.links.next.is_none() {
                break;
            }
            start += SPACE_PAGE_SIZE;
        }

        Ok(workspaces)
    }

    async fn list_pages(
        &self,
        workspace_key: &str,
        start: usize,
        limit: usize,
    ) -> Result<ContentListing, TransportError> {
        let listing: Listing<ContentItem> = self
            .get_json(
                "/wiki/rest/api/content",
                &[
                    ("spaceKey", workspace_key.to_string()),
                    ("start", start.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(ContentListing {
            has_next: listing.links.next.is_some(),
            pages: listing
                .results
                .into_iter()
                .map(|item| PageDescriptor {
                    id: item.id,
                    title: item.title,
                    web_url: item.links.webui,
                })
                .collect(),
        })
    }

    async fn fetch_body(&self, page_id: &str) -> Result<String, TransportError> {
        let endpoint = format!("/wiki/rest/api/content/{}", page_id);
        let content: ContentWithBody = self
            .get_json(&endpoint, &[("expand", "body.storage".to_string())])
            .await?;
        Ok(content.body.storage.value)
    }
}

// ========== 响应结构 ==========

#[derive(Debug, Deserialize)]
struct Listing<T> {
    results: Vec<T>,
    #[serde(rename = "_links", default)]
    links: ListingLinks,
}

#[derive(Debug, Default, Deserialize)]
struct ListingLinks {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpaceItem {
    key: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "_links", default)]
    links: ContentLinks,
}

#[derive(Debug, Default, Deserialize)]
struct ContentLinks {
    #[serde(default)]
    webui: String,
}

#[derive(Debug, Deserialize)]
struct ContentWithBody {
    body: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    storage: Storage,
}

#[derive(Debug, Deserialize)]
struct Storage {
    value: String,
}
