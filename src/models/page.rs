/// 空间（workspace）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub key: String,
    pub name: String,
}

/// 页面描述
///
/// 由分页枚举产生，只在一次枚举中有效
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub id: String,
    pub title: String,
    /// 相对路径（`_links.webui`），例如 `/spaces/ENG/pages/123/Runbook`
    pub web_url: String,
}

impl PageDescriptor {
    /// 拼接页面的完整访问地址
    pub fn absolute_url(&self, base_url: &str) -> String {
        format!("{}/wiki{}", base_url, self.web_url)
    }
}

/// 一次分页请求的结果
#[derive(Debug, Clone, Default)]
pub struct ContentListing {
    pub pages: Vec<PageDescriptor>,
    /// 响应中是否带有 `_links.next`
    pub has_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        let page = PageDescriptor {
            id: "42".to_string(),
            title: "Runbook".to_string(),
            web_url: "/spaces/ENG/pages/42/Runbook".to_string(),
        };
        assert_eq!(
            page.absolute_url("https://acme.atlassian.net"),
            "https://acme.atlassian.net/wiki/spaces/ENG/pages/42/Runbook"
        );
    }
}
