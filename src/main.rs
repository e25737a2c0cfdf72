use clap::Parser;
use security_service::utils::{logger, validation::Validate};
use security_service::{CliConfig, Scenario, ScenarioConfig, SecurityError};

fn run(config: &CliConfig) -> Result<String, SecurityError> {
    // 載入情境
    let scenario_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            ScenarioConfig::from_file(path)?
        }
        None => {
            tracing::info!("No scenario file given, using the built-in demo");
            ScenarioConfig::demo()
        }
    };

    scenario_config.validate()?;

    let mut scenario = Scenario::build(&scenario_config)?;
    if let Some(format) = config.format {
        tracing::info!("🔧 Report format overridden to: {:?}", format);
        scenario.set_format(format, scenario_config.report.pretty.unwrap_or(true));
    }

    if config.lock_all {
        scenario.service.lock_all();
    }

    Ok(scenario.report())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting security-service CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            tracing::error!("❌ Security check failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
