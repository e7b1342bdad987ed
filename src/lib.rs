//! # Page Secret Scan
//!
//! 增量扫描 Confluence 页面中的密码/密钥，并记录已发现风险的页面
//!
//! ## 架构设计
//!
//! ### ① 外部服务层（Clients）
//! - `clients/` - 与外部系统交互，只暴露能力
//! - `ContentPlatform` / `ConfluenceClient` - 空间列表、页面分页、正文获取
//! - `Oracle` / `OpenAiOracle` - 多轮对话补全
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个页面
//! - `PageEnumerator` - 惰性分页枚举
//! - `ContentFetcher` - 正文获取
//! - `Classifier` - 敏感信息判断
//! - `verdict_parser` - 从回答中提取数量
//! - `CheckpointStore` - 读/追加记录文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个页面"的完整处理流程
//! - `PageFlow` - 检查点 → 获取 → 分类 → 解析 → 记录
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/scan_runner` - 遍历所有空间
//! - `orchestrator/workspace_processor` - 遍历单个空间内的页面

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ConfluenceClient, ContentPlatform, OpenAiOracle, Oracle};
pub use config::Config;
pub use error::{FaultKind, ScanError, ScanResult};
pub use models::{PageDescriptor, PageOutcome, ScanRecord, Verdict, Workspace};
pub use orchestrator::{App, ScanStats};
pub use services::CheckpointStore;
pub use workflow::{PageCtx, PageFlow};
