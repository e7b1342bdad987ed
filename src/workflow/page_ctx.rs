//! 页面处理上下文
//!
//! 封装"我正在处理哪个空间的第几个页面"这一信息

use std::fmt::Display;

/// 页面处理上下文，仅用于日志
#[derive(Debug, Clone)]
pub struct PageCtx<'a> {
    pub workspace_key: &'a str,
    /// 页面在空间中的序号（从1开始）
    pub page_index: usize,
    pub title: &'a str,
}

impl<'a> PageCtx<'a> {
    pub fn new(workspace_key: &'a str, page_index: usize, title: &'a str) -> Self {
        Self {
            workspace_key,
            page_index,
            title,
        }
    }
}

impl Display for PageCtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[空间 {} 页面#{} {}]",
            self.workspace_key, self.page_index, self.title
        )
    }
}
