use catalog_aggregator::utils::{logger, validation::Validate};
use catalog_aggregator::{handle, CliConfig, HandlerResponse};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting catalog-aggregator CLI");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            println!("{}", HandlerResponse::from_error(&e).body_string(cli.pretty));
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        println!("{}", HandlerResponse::from_error(&e).body_string(cli.pretty));
        std::process::exit(1);
    }

    let response = handle(config).await;

    // stdout 一律輸出 JSON
    println!("{}", response.body_string(cli.pretty));

    if !response.is_success() {
        std::process::exit(1);
    }

    tracing::info!("✅ Aggregation completed");
    Ok(())
}
