#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use page_secret_scan::clients::{ContentPlatform, Oracle, OracleRequest};
use page_secret_scan::error::{OracleError, TransportError};
use page_secret_scan::models::{ContentListing, PageDescriptor, Workspace};

pub const BASE_URL: &str = "https://acme.atlassian.net";

pub fn page_url(workspace_key: &str, page_id: &str) -> String {
    format!("{}/wiki/spaces/{}/pages/{}", BASE_URL, workspace_key, page_id)
}

/// 内存中的文档平台，分页行为与 Confluence 一致
#[derive(Default)]
pub struct FakePlatform {
    workspaces: Vec<Workspace>,
    pages: HashMap<String, Vec<PageDescriptor>>,
    bodies: HashMap<String, String>,
    failing_fetches: HashSet<String>,
    pub fetched: Mutex<Vec<String>>,
    pub listing_requests: Mutex<Vec<(String, usize)>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个空间，`pages` 为 `(页面ID, 正文)`
    pub fn workspace(mut self, key: &str, pages: &[(&str, &str)]) -> Self {
        self.workspaces.push(Workspace {
            key: key.to_string(),
            name: format!("{} space", key),
        });
        let descriptors = pages
            .iter()
            .map(|(id, body)| {
                self.bodies.insert(id.to_string(), body.to_string());
                PageDescriptor {
                    id: id.to_string(),
                    title: format!("Title {}", id),
                    web_url: format!("/spaces/{}/pages/{}", key, id),
                }
            })
            .collect();
        self.pages.insert(key.to_string(), descriptors);
        self
    }

    pub fn failing_fetch(mut self, page_id: &str) -> Self {
        self.failing_fetches.insert(page_id.to_string());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentPlatform for FakePlatform {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, TransportError> {
        Ok(self.workspaces.clone())
    }

    async fn list_pages(
        &self,
        workspace_key: &str,
        start: usize,
        limit: usize,
    ) -> Result<ContentListing, TransportError> {
        self.listing_requests
            .lock()
            .unwrap()
            .push((workspace_key.to_string(), start));

        let all = self
            .pages
            .get(workspace_key)
            .cloned()
            .unwrap_or_default();
        let end = (start + limit).min(all.len());
        let pages = all[start.min(end)..end].to_vec();

        Ok(ContentListing {
            pages,
            has_next: start + limit < all.len(),
        })
    }

    async fn fetch_body(&self, page_id: &str) -> Result<String, TransportError> {
        self.fetched.lock().unwrap().push(page_id.to_string());
        if self.failing_fetches.contains(page_id) {
            return Err(TransportError::Status {
                endpoint: format!("/wiki/rest/api/content/{}", page_id),
                status: 500,
            });
        }
        Ok(self.bodies.get(page_id).cloned().unwrap_or_default())
    }
}

/// 按正文中的标记返回预设回答的分类服务
///
/// 没有匹配到标记时回答 "No passwords found."
#[derive(Default)]
pub struct FakeOracle {
    answers: Vec<(String, Option<String>)>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, marker: &str, answer: &str) -> Self {
        self.answers.push((marker.to_string(), Some(answer.to_string())));
        self
    }

    pub fn fail(mut self, marker: &str) -> Self {
        self.answers.push((marker.to_string(), None));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Oracle for FakeOracle {
    async fn complete(&self, request: &OracleRequest) -> Result<String, OracleError> {
        let text = request
            .messages
            .last()
            .map(|turn| turn.content.clone())
            .unwrap_or_default();
        self.calls.lock().unwrap().push(text.clone());

        match self.answers.iter().find(|(marker, _)| text.contains(marker.as_str())) {
            Some((_, Some(answer))) => Ok(answer.clone()),
            Some((_, None)) => Err(OracleError::Request {
                model: "fake".to_string(),
                message: "connection reset".to_string(),
            }),
            None => Ok("No passwords found.".to_string()),
        }
    }
}
