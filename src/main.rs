use clap::Parser;
use counter_demo::utils::{logger, validation::Validate};
use counter_demo::{CliConfig, DemoError, RuntimeSettings, ScriptRunner, StdoutSink};

fn load_settings(config: &CliConfig) -> Result<RuntimeSettings, DemoError> {
    let settings = config.load_settings()?;
    settings.validate()?;
    Ok(settings)
}

fn run_script(settings: &RuntimeSettings) -> Result<(), DemoError> {
    let (report, _) = ScriptRunner::new(StdoutSink::new()).run()?;

    if settings.summary_enabled() {
        tracing::info!("Run report: {}", report.to_summary_json()?);
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // Settings decide how logging is set up, so they load before the logger exists.
    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let level = config.log_level(&settings);
    if config.json_logs(&settings) {
        logger::init_json_logger(&level);
    } else {
        logger::init_cli_logger(&level);
    }

    tracing::info!("Starting counter-demo");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Runtime settings: {:?}", settings);

    if let Err(e) = run_script(&settings) {
        tracing::error!("❌ Demo script failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
