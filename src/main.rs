use clap::Parser;
use mail_probe::core::input::read_first_line;
use mail_probe::utils::logger;
use mail_probe::{CliConfig, EmailCheckEngine, ReportWriter, SystemDnsResolver};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut writer = ReportWriter::new(std::io::stdout());
    writer.write_header()?;

    // 驗證配置
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 只處理第一行輸入
    let email = match read_first_line(BufReader::new(tokio::io::stdin())).await {
        Ok(Some(line)) => line,
        Ok(None) => {
            tracing::debug!("No input on stdin, nothing to check");
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Error: could not read from input: {}", e);
            std::process::exit(1);
        }
    };

    let engine = EmailCheckEngine::new(SystemDnsResolver::new(), settings);
    let report = engine.run(&email, &mut writer).await?;

    tracing::debug!("Check report: {}", serde_json::to_string(&report)?);

    Ok(())
}
