use anyhow::Result;
use page_secret_scan::{logger, App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(&config)?;
    if let Err(e) = app.run().await {
        error!("❌ 扫描中止 ({:?}): {}", e.kind(), e);
        return Err(e.into());
    }

    Ok(())
}
