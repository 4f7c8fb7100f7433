use clap::Parser;
use dinosaur_facts::app;
use dinosaur_facts::utils::error::FactsError;
use dinosaur_facts::utils::{logger, validation::Validate};
use dinosaur_facts::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置檔並套用命令列覆蓋設定
    let settings = match app::load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                cli.config.as_deref().unwrap_or_default(),
                e
            );
            fail(&e);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        fail(&e);
    }

    match app::run(&cli.command, &settings).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &FactsError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(app::exit_code(e));
}
