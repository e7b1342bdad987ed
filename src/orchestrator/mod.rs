//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `scan_runner` - 整体扫描
//! - 持有平台客户端、分类服务、记录文件和检查点集合
//! - 启动时加载一次检查点
//! - 按平台返回顺序遍历所有空间
//! - 输出全局统计信息
//!
//! ### `workspace_processor` - 单个空间
//! - 惰性枚举空间内的页面
//! - 逐个驱动 `PageFlow`
//! - 输出单个空间的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! scan_runner (处理 Vec<Workspace>)
//!     ↓
//! workspace_processor (处理页面 Stream)
//!     ↓
//! workflow::PageFlow (处理单个页面)
//!     ↓
//! services (能力层：enumerate / fetch / classify / parse / store)
//!     ↓
//! clients (外部服务：Confluence / LLM)
//! ```
//!
//! 全程顺序执行，不并发；平台请求失败中止整个扫描。

pub mod scan_runner;
pub mod workspace_processor;

pub use scan_runner::{App, ScanStats};
pub use workspace_processor::{process_workspace, WorkspaceStats};
