use anyhow::Result;
use clap::Parser;
use md_question_extract::cli::Cli;
use md_question_extract::utils::logging;
use md_question_extract::{App, Config};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：环境变量 < 命令行参数
    let (env_config, env_issues) = Config::from_env_checked();
    let config = Cli::parse().apply(env_config);

    // 初始化日志
    logging::init(config.verbose_logging);
    for issue in &env_issues {
        warn!("⚠️ {}，使用默认值", issue);
    }

    // 初始化并运行应用
    let stats = App::initialize(config).await?.run().await?;

    if stats.total > 0 && stats.success == 0 {
        anyhow::bail!("所有文档均处理失败");
    }

    Ok(())
}
