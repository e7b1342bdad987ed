/// 扫描记录
///
/// 只有检测到敏感信息的页面才会写入记录文件，写入后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub page_id: String,
    pub page_url: String,
    pub threat_count: u64,
}

impl ScanRecord {
    pub fn new(page_id: impl Into<String>, page_url: impl Into<String>, threat_count: u64) -> Self {
        Self {
            page_id: page_id.into(),
            page_url: page_url.into(),
            threat_count,
        }
    }
}
