use clap::Parser;
use shipment_docgen::utils::{logger, validation::Validate};
use shipment_docgen::{CliConfig, DocumentEngine, HttpRecordLookup, JsonRenderer};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shipment-docgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let lookup = HttpRecordLookup::new(
        &config.api_base,
        Duration::from_secs(config.timeout_seconds),
    )?;
    let renderer = JsonRenderer::new(config.output_path.clone());
    let engine = DocumentEngine::new(lookup, renderer);

    match engine.generate(&config.shipment_id).await {
        Ok(path) => {
            tracing::info!("✅ Document generation completed successfully!");
            println!("✅ Document generation completed successfully!");
            println!("📁 Output saved to: {}", path);
        }
        Err(e) => {
            tracing::error!("❌ Document generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
