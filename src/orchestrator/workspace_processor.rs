//! 单个空间处理器 - 编排层
//!
//! 遍历一个空间内的全部页面，对每个页面执行 `PageFlow`，并汇总结果

use futures::TryStreamExt;
use tracing::error;

use crate::clients::{ContentPlatform, Oracle};
use crate::error::ScanResult;
use crate::models::{PageOutcome, Workspace};
use crate::services::PageEnumerator;
use crate::utils::logging::log_workspace_complete;
use crate::workflow::{PageCtx, PageFlow};

/// 单个空间的处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceStats {
    /// 枚举到的页面数
    pub retrieved: usize,
    pub skipped: usize,
    pub no_response: usize,
    pub recorded: usize,
    pub discarded: usize,
}

impl WorkspaceStats {
    fn record(&mut self, outcome: PageOutcome) {
        match outcome {
            PageOutcome::Skipped => self.skipped += 1,
            PageOutcome::NoResponse => self.no_response += 1,
            PageOutcome::Recorded { .. } => self.recorded += 1,
            PageOutcome::Discarded => self.discarded += 1,
        }
    }
}

/// 处理单个空间
///
/// # 参数
/// - `enumerator`: 页面枚举器
/// - `flow`: 页面处理流程
/// - `workspace`: 空间
///
/// # 返回
/// 返回本空间的统计；列表或正文请求失败时返回错误
pub async fn process_workspace<P, O>(
    enumerator: &PageEnumerator<'_, P>,
    flow: &PageFlow<'_, P, O>,
    workspace: &Workspace,
) -> ScanResult<WorkspaceStats>
where
    P: ContentPlatform + ?Sized,
    O: Oracle,
{
    let mut stats = WorkspaceStats::default();
    let pages = enumerator.enumerate(&workspace.key);
    futures::pin_mut!(pages);

    while let Some(page) = pages.try_next().await.map_err(|e| {
        error!("[空间 {}] ❌ 页面列表获取失败: {}", workspace.key, e);
        e
    })? {
        stats.retrieved += 1;
        let ctx = PageCtx::new(&workspace.key, stats.retrieved, &page.title);

        let outcome = flow.run(&page, &ctx).await.map_err(|e| {
            error!("{} ❌ 处理过程中发生错误: {}", ctx, e);
            e
        })?;
        stats.record(outcome);
    }

    log_workspace_complete(
        &workspace.key,
        stats.retrieved,
        stats.recorded,
        stats.skipped,
    );

    Ok(stats)
}
