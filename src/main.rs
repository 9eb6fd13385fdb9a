use anyhow::Context;
use clap::Parser;
use product_report::utils::{logger, validation::Validate};
use product_report::{CliConfig, LocalStorage, ProductReportPipeline, ReportEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting product-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let input = config.input.clone();
    let pipeline = ProductReportPipeline::new(LocalStorage::current_dir(), config);
    let engine = ReportEngine::new(pipeline);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out).await {
        Ok(count) => {
            tracing::info!("✅ Report complete ({} products)", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Could not load products from {}: {}", input, e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            Err(e).with_context(|| format!("failed to load test products from '{}'", input))
        }
    }
}
