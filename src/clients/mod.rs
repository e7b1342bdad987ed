//! 外部服务客户端
//!
//! - `ContentPlatform` - 文档平台能力（空间列表、页面分页、正文获取）
//! - `Oracle` - 分类服务能力（多轮对话补全）

pub mod confluence_client;
pub mod openai_oracle;
pub mod oracle;
pub mod platform;

pub use confluence_client::ConfluenceClient;
pub use openai_oracle::OpenAiOracle;
pub use oracle::{ChatRole, ChatTurn, Oracle, OracleRequest, SamplingParams};
pub use platform::ContentPlatform;
