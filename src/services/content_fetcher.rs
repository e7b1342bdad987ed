//! 正文获取 - 业务能力层

use tracing::debug;

use crate::clients::ContentPlatform;
use crate::error::TransportError;

/// 正文获取
///
/// 每次调用只发一次请求；失败原样返回，不会退化为空正文
pub struct ContentFetcher<'a, P: ?Sized> {
    platform: &'a P,
}

impl<'a, P: ContentPlatform + ?Sized> ContentFetcher<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    pub async fn fetch(&self, page_id: &str) -> Result<String, TransportError> {
        let body = self.platform.fetch_body(page_id).await?;
        debug!("页面 {} 正文长度: {} 字符", page_id, body.chars().count());
        Ok(body)
    }
}
