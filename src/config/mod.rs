pub mod toml_config;

pub use toml_config::RuntimeSettings;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "counter-demo")]
#[command(about = "Counter-and-greeting demo script")]
pub struct CliConfig {
    #[arg(long, help = "Runtime settings file (TOML)")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_settings(&self) -> crate::utils::error::Result<RuntimeSettings> {
        match &self.config {
            Some(path) => RuntimeSettings::from_file(path),
            None => Ok(RuntimeSettings::default()),
        }
    }

    /// Flags win over the settings file.
    pub fn log_level(&self, settings: &RuntimeSettings) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            settings.log_level().to_string()
        }
    }

    pub fn json_logs(&self, settings: &RuntimeSettings) -> bool {
        self.json_logs || settings.json_logs()
    }
}
