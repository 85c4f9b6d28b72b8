use clap::Parser;
use flight_status::core::ConfigProvider;
use flight_status::utils::error::ErrorSeverity;
use flight_status::utils::{logger, validation::Validate};
use flight_status::{CliConfig, FlightEngine, FlightError, FlightPipeline, HttpFetcher, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: CliConfig) -> Result<(), FlightError> {
    let config = cli.into_run_config()?;
    config.validate()?;

    println!("Processing flights for state: {}", config.state());

    let fetcher = HttpFetcher::with_user_agent(config.request_timeout(), &config.user_agent)?;
    let storage = LocalStorage::new(".");
    let pipeline = FlightPipeline::new(storage, fetcher, config);
    let engine = FlightEngine::new(pipeline);

    let report = engine.run().await?;
    println!("{}", report.outcome);
    for path in &report.written {
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}
