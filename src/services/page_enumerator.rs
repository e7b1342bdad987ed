//! 页面枚举 - 业务能力层
//!
//! 按 `start`/`limit` 分页拉取一个空间的全部页面，以惰性 `Stream` 形式返回：
//! 只有消费到下一页时才会发出下一次请求

use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

use crate::clients::ContentPlatform;
use crate::error::TransportError;
use crate::models::PageDescriptor;

/// 每次分页请求的页面数量
pub const PAGE_SIZE: usize = 25;

/// 页面枚举器
pub struct PageEnumerator<'a, P: ?Sized> {
    platform: &'a P,
    page_size: usize,
}

impl<'a, P: ContentPlatform + ?Sized> PageEnumerator<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self {
            platform,
            page_size: PAGE_SIZE,
        }
    }

    /// 枚举空间内的全部页面
    ///
    /// 顺序与平台返回顺序一致；任意一次请求失败都会产出一个 `Err` 并结束
    pub fn enumerate<'k>(
        &self,
        workspace_key: &'k str,
    ) -> impl Stream<Item = Result<PageDescriptor, TransportError>> + 'k
    where
        'a: 'k,
    {
        let platform: &'k P = self.platform;
        let page_size = self.page_size;

        stream::try_unfold(Some(0usize), move |cursor| async move {
            let Some(start) = cursor else {
                return Ok(None);
            };

            debug!(
                "请求空间 {} 的页面列表: start={}, limit={}",
                workspace_key, start, page_size
            );
            let listing = platform.list_pages(workspace_key, start, page_size).await?;
            let next = listing.has_next.then_some(start + page_size);

            Ok::<_, TransportError>(Some((listing.pages, next)))
        })
        .map_ok(|pages| stream::iter(pages.into_iter().map(Ok::<_, TransportError>)))
        .try_flatten()
    }
}
