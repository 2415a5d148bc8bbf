use crate::domain::model::{Account, Payment};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io;

/// Well-known keys understood by [`RuntimeEnv`] implementations.
pub mod env_keys {
    pub const OS_NAME: &str = "os.name";
    pub const RUNTIME_NAME: &str = "runtime.name";
    pub const RUNTIME_VERSION: &str = "runtime.version";
    pub const HOST_NAME: &str = "host.name";
    pub const HOST_ADDRESS: &str = "host.address";
    pub const SERVER_PORT: &str = "server.port";
}

pub trait ConfigProvider: Send + Sync {
    fn payments_endpoint(&self) -> &str;
    fn accounts_file(&self) -> Option<&str>;
    fn server_port(&self) -> u16;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Accounts ordered by balance descending, at most `limit` of them.
    async fn top_by_balance(&self, limit: usize) -> Result<Vec<Account>>;
}

#[async_trait]
pub trait PaymentSource: Send + Sync {
    async fn current_payments(&self) -> Result<Vec<Payment>>;
}

/// Key-value lookup for host and runtime diagnostics. Missing keys are not an
/// error; the view simply omits the value.
pub trait RuntimeEnv: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Captured result of one external version-command invocation.
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    /// Whether the child exited with status zero.
    pub success: bool,
    /// Captured stdout, split into lines.
    pub lines: Vec<String>,
}

/// Side-effecting boundary for the version probe: spawn the external tool,
/// wait for it, and hand back exit status plus captured stdout. Injectable so
/// tests never spawn a real process.
pub trait VersionCommand: Send + Sync {
    fn invoke(&self) -> io::Result<ProbeOutput>;
}
