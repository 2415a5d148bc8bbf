pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{toml_config::TomlConfig, ConfigProvider};

pub use crate::adapters::{
    accounts::JsonAccountStore, payments::HttpPaymentSource, runtime::SystemRuntimeEnv,
};
pub use crate::core::ssl_probe::{probe_ssl_version, OpensslVersionCommand};
pub use crate::core::view::{ViewEngine, TOP_ACCOUNTS_LIMIT};
pub use crate::domain::model::{Account, IndexView, Payment};
pub use crate::utils::error::{AppError, Result};
