use accounts_demo::utils::{logger, validation::Validate};
use accounts_demo::{
    CliConfig, ConfigProvider, HttpPaymentSource, JsonAccountStore, OpensslVersionCommand,
    SystemRuntimeEnv, TomlConfig, ViewEngine,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting accounts-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // A TOML file replaces the flag-based settings entirely
    let result = match &cli.config {
        Some(path) => {
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => return fail(e),
            };
            run(&config, monitor_enabled).await
        }
        None => run(&cli, monitor_enabled).await,
    };

    match result {
        Ok(rendered) => {
            tracing::info!("✅ Index view assembled successfully");
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

async fn run<C: ConfigProvider + Validate>(
    config: &C,
    monitor_enabled: bool,
) -> accounts_demo::Result<String> {
    config.validate()?;

    let accounts = JsonAccountStore::new(config.accounts_file().map(str::to_owned));
    let payments = HttpPaymentSource::new(config.payments_endpoint().to_owned());
    let env = SystemRuntimeEnv::new(config.server_port());

    let engine = ViewEngine::new_with_monitoring(
        accounts,
        payments,
        env,
        OpensslVersionCommand,
        monitor_enabled,
    );

    let view = engine.render_index().await?;
    Ok(serde_json::to_string_pretty(&view)?)
}

fn fail(e: accounts_demo::AppError) -> Result<(), Box<dyn std::error::Error>> {
    tracing::error!(
        "❌ Assembly failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        accounts_demo::utils::error::ErrorSeverity::Low => 0,
        accounts_demo::utils::error::ErrorSeverity::Medium => 2,
        accounts_demo::utils::error::ErrorSeverity::High => 1,
        accounts_demo::utils::error::ErrorSeverity::Critical => 3,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
