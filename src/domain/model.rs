use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// The merged record handed to a renderer: diagnostics plus the account and
/// payment listings. Built fresh per invocation, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexView {
    pub os_name: Option<String>,
    pub runtime_name: Option<String>,
    pub runtime_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_version: Option<String>,
    pub host: Option<String>,
    pub ip: Option<String>,
    pub port: Option<String>,
    pub accounts: Vec<Account>,
    pub payments: Vec<Payment>,
}
