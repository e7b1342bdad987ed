/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `base_url`: Confluence 站点地址
/// - `model_name`: 分类模型
/// - `records_file`: 记录文件路径
pub fn log_startup(base_url: &str, model_name: &str, records_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 页面敏感信息扫描");
    info!("🌐 站点: {}", base_url);
    info!("🤖 模型: {}", model_name);
    info!("📝 记录文件: {}", records_file);
    info!("{}", "=".repeat(60));
}

/// 记录检查点加载信息
pub fn log_checkpoints_loaded(count: usize) {
    info!("✓ 已加载 {} 个已处理页面，本次将跳过", count);
}

/// 记录空间开始信息
///
/// # 参数
/// - `index`: 空间序号（从1开始）
/// - `total`: 空间总数
/// - `key`: 空间 key
/// - `name`: 空间名称
pub fn log_workspace_start(index: usize, total: usize, key: &str, name: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始扫描第 {}/{} 个空间: {} ({})", index, total, key, name);
    info!("{}", "=".repeat(60));
}

/// 记录空间完成信息
pub fn log_workspace_complete(key: &str, retrieved: usize, recorded: usize, skipped: usize) {
    info!("\n{}", "─".repeat(60));
    info!("Retrieved {} pages for space {}", retrieved, key);
    info!("✓ 空间 {} 完成: 发现 {} 个风险页面, 跳过 {} 个", key, recorded, skipped);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `workspaces`: 扫描的空间数
/// - `pages`: 枚举到的页面数
/// - `skipped`: 因检查点跳过的页面数
/// - `no_response`: 分类服务无回答的页面数
/// - `recorded`: 写入记录的页面数
/// - `discarded`: 未发现敏感信息的页面数
pub fn print_final_stats(
    workspaces: usize,
    pages: usize,
    skipped: usize,
    no_response: usize,
    recorded: usize,
    discarded: usize,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部扫描完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📦 空间: {}", workspaces);
    info!("📄 页面: {}", pages);
    info!("⏭️ 跳过: {}", skipped);
    info!("🔇 无回答: {}", no_response);
    info!("⚠️ 发现风险: {}", recorded);
    info!("✅ 无风险: {}", discarded);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("密码是hunter2", 3), "密码是...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
