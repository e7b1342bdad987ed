use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{ContentListing, Workspace};

/// 文档平台
///
/// 所有方法的失败都是致命错误，调用方直接向上传递
#[async_trait]
pub trait ContentPlatform: Send + Sync {
    /// 列出全部空间，保持平台返回顺序
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, TransportError>;

    /// 获取某个空间从 `start` 开始的一页内容
    async fn list_pages(
        &self,
        workspace_key: &str,
        start: usize,
        limit: usize,
    ) -> Result<ContentListing, TransportError>;

    /// 获取页面正文（storage 格式）
    async fn fetch_body(&self, page_id: &str) -> Result<String, TransportError>;
}
