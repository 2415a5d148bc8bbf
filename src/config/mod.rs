pub mod toml_config;

pub use crate::domain::ports::ConfigProvider;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "accounts-demo")]
#[command(about = "Lists top account balances and recent payments with host diagnostics")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8082/payments")]
    pub payments_endpoint: String,

    #[arg(long, help = "JSON file with an array of accounts; sample data when omitted")]
    pub accounts_file: Option<String>,

    #[arg(long, default_value = "8080")]
    pub server_port: u16,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn payments_endpoint(&self) -> &str {
        &self.payments_endpoint
    }

    fn accounts_file(&self) -> Option<&str> {
        self.accounts_file.as_deref()
    }

    fn server_port(&self) -> u16 {
        self.server_port
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("payments_endpoint", &self.payments_endpoint)?;
        if let Some(path) = &self.accounts_file {
            validate_path("accounts_file", path)?;
        }
        validate_range("server_port", self.server_port, 1, 65535)?;
        Ok(())
    }
}
