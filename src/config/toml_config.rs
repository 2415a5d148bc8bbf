use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_SERVER_PORT: u16 = 8080;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub payments: PaymentsConfig,
    pub accounts: Option<AccountsConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| AppError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn payments_endpoint(&self) -> &str {
        &self.payments.endpoint
    }

    fn accounts_file(&self) -> Option<&str> {
        self.accounts.as_ref().and_then(|a| a.file.as_deref())
    }

    fn server_port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("payments.endpoint", &self.payments.endpoint)?;
        if let Some(file) = self.accounts_file() {
            validate_path("accounts.file", file)?;
        }
        validate_range("server.port", self.server_port(), 1, 65535)?;
        Ok(())
    }
}
