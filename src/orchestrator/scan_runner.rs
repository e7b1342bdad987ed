//! 整体扫描 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建 Confluence 客户端、分类服务、记录文件
//! 2. **检查点加载**：每个进程只加载一次，运行中不刷新
//! 3. **空间遍历**：按平台返回顺序逐个处理空间
//! 4. **全局统计**：汇总所有空间的处理结果

use std::collections::HashSet;

use tracing::info;

use crate::clients::{ConfluenceClient, ContentPlatform, OpenAiOracle, Oracle};
use crate::config::Config;
use crate::error::ScanResult;
use crate::orchestrator::workspace_processor::{process_workspace, WorkspaceStats};
use crate::services::{CheckpointStore, Classifier, PageEnumerator};
use crate::utils::logging::{
    log_checkpoints_loaded, log_startup, log_workspace_start, print_final_stats,
};
use crate::workflow::PageFlow;

/// 应用主结构
pub struct App<P = ConfluenceClient, O = OpenAiOracle> {
    platform: P,
    classifier: Classifier<O>,
    store: CheckpointStore,
    checkpoints: HashSet<String>,
    base_url: String,
}

/// 扫描统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub workspaces: usize,
    pub pages: usize,
    pub skipped: usize,
    pub no_response: usize,
    pub recorded: usize,
    pub discarded: usize,
}

impl ScanStats {
    fn absorb(&mut self, workspace: WorkspaceStats) {
        self.workspaces += 1;
        self.pages += workspace.retrieved;
        self.skipped += workspace.skipped;
        self.no_response += workspace.no_response;
        self.recorded += workspace.recorded;
        self.discarded += workspace.discarded;
    }
}

impl App {
    /// 按配置初始化应用
    pub fn initialize(config: &Config) -> ScanResult<Self> {
        log_startup(
            &config.confluence_base_url,
            &config.llm_model_name,
            &config.processed_pages_file,
        );

        let platform = ConfluenceClient::new(config)?;
        let oracle = OpenAiOracle::new(config);
        let store = CheckpointStore::new(&config.processed_pages_file);

        Self::with_parts(platform, oracle, store, &config.confluence_base_url)
    }
}

impl<P: ContentPlatform, O: Oracle> App<P, O> {
    /// 用现成的组件组装应用，并加载检查点
    pub fn with_parts(
        platform: P,
        oracle: O,
        store: CheckpointStore,
        base_url: impl Into<String>,
    ) -> ScanResult<Self> {
        let checkpoints = store.load()?;
        log_checkpoints_loaded(checkpoints.len());

        Ok(Self {
            platform,
            classifier: Classifier::new(oracle),
            store,
            checkpoints,
            base_url: base_url.into(),
        })
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn oracle(&self) -> &O {
        self.classifier.oracle()
    }

    /// 启动时加载的检查点
    pub fn checkpoints(&self) -> &HashSet<String> {
        &self.checkpoints
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> ScanResult<ScanStats> {
        let workspaces = self.platform.list_workspaces().await?;
        info!("✓ 找到 {} 个空间", workspaces.len());

        let enumerator = PageEnumerator::new(&self.platform);
        let flow = PageFlow::new(
            &self.platform,
            &self.classifier,
            &self.store,
            &self.checkpoints,
            &self.base_url,
        );

        let mut stats = ScanStats::default();
        for (index, workspace) in workspaces.iter().enumerate() {
            log_workspace_start(index + 1, workspaces.len(), &workspace.key, &workspace.name);

            let workspace_stats = process_workspace(&enumerator, &flow, workspace).await?;
            stats.absorb(workspace_stats);
        }

        print_final_stats(
            stats.workspaces,
            stats.pages,
            stats.skipped,
            stats.no_response,
            stats.recorded,
            stats.discarded,
        );

        Ok(stats)
    }
}
