//! 页面处理流程 - 流程层
//!
//! 核心职责：定义"一个页面"的完整处理流程
//!
//! ```text
//! PENDING ─┬─ 已在检查点 ─────────────────────────────→ Skipped
//!          └─ 获取正文 → 分类 ─┬─ 无回答 ────────────────→ NoResponse
//!                              └─ 解析数量 ─┬─ > 0 → 写记录 → Recorded
//!                                           └─ = 0 ─────────→ Discarded
//! ```
//!
//! 错误按 `FaultKind` 分派：可恢复的分类失败记为无回答并继续，
//! 其余错误（正文获取、写记录）向上返回，由编排层中止整个扫描。

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::clients::{ContentPlatform, Oracle};
use crate::error::{ScanError, ScanResult};
use crate::models::{PageDescriptor, PageOutcome, ScanRecord, Verdict};
use crate::services::{verdict_parser, CheckpointStore, Classifier, ContentFetcher};
use crate::utils::logging::truncate_text;
use crate::workflow::page_ctx::PageCtx;

/// 页面处理流程
///
/// - 不持有任何资源，只借用编排层准备好的能力
/// - 检查点集合在启动时加载一次，运行过程中不刷新
pub struct PageFlow<'a, P: ?Sized, O> {
    fetcher: ContentFetcher<'a, P>,
    classifier: &'a Classifier<O>,
    store: &'a CheckpointStore,
    checkpoints: &'a HashSet<String>,
    base_url: &'a str,
}

impl<'a, P, O> PageFlow<'a, P, O>
where
    P: ContentPlatform + ?Sized,
    O: Oracle,
{
    pub fn new(
        platform: &'a P,
        classifier: &'a Classifier<O>,
        store: &'a CheckpointStore,
        checkpoints: &'a HashSet<String>,
        base_url: &'a str,
    ) -> Self {
        Self {
            fetcher: ContentFetcher::new(platform),
            classifier,
            store,
            checkpoints,
            base_url,
        }
    }

    pub async fn run(&self, page: &PageDescriptor, ctx: &PageCtx<'_>) -> ScanResult<PageOutcome> {
        if self.checkpoints.contains(&page.id) {
            info!("{} 已处理过，跳过", ctx);
            return Ok(PageOutcome::Skipped);
        }

        let body = self.fetcher.fetch(&page.id).await?;
        debug!("{} 正文: {}", ctx, truncate_text(&body, 80));

        let verdict = match self.classifier.classify(&body).await.map_err(ScanError::from) {
            Ok(verdict) => verdict,
            Err(e) if e.kind().is_recoverable() => {
                warn!("{} 分类服务调用失败，跳过: {}", ctx, e);
                Verdict::NoResponse
            }
            Err(e) => return Err(e),
        };
        let Some(threat_count) = verdict_parser::parse(&verdict) else {
            info!("{} 分类服务无回答", ctx);
            return Ok(PageOutcome::NoResponse);
        };

        if threat_count == 0 {
            info!("{} 未发现敏感信息", ctx);
            return Ok(PageOutcome::Discarded);
        }

        let page_url = page.absolute_url(self.base_url);
        if let Verdict::Answer(answer) = &verdict {
            warn!("{} URL: {} 分类结果: {}", ctx, page_url, answer);
        }

        self.store
            .append(&ScanRecord::new(page.id.as_str(), page_url, threat_count))
            .await?;

        Ok(PageOutcome::Recorded { threat_count })
    }
}
