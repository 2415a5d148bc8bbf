use crate::core::ssl_probe::probe_ssl_version;
use crate::domain::model::IndexView;
use crate::domain::ports::{env_keys, AccountStore, PaymentSource, RuntimeEnv, VersionCommand};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// How many accounts the index lists at most. Fixed, not configurable.
pub const TOP_ACCOUNTS_LIMIT: usize = 50;

/// Assembles the index view-model from its collaborators: account store,
/// payment source, runtime environment, and the version probe. Each render
/// is computed fresh; nothing is cached between calls.
pub struct ViewEngine<A, P, E, V> {
    accounts: A,
    payments: P,
    env: E,
    probe: V,
    monitor: SystemMonitor,
}

impl<A, P, E, V> ViewEngine<A, P, E, V>
where
    A: AccountStore,
    P: PaymentSource,
    E: RuntimeEnv,
    V: VersionCommand,
{
    pub fn new(accounts: A, payments: P, env: E, probe: V) -> Self {
        Self {
            accounts,
            payments,
            env,
            probe,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(accounts: A, payments: P, env: E, probe: V, enabled: bool) -> Self {
        Self {
            accounts,
            payments,
            env,
            probe,
            monitor: SystemMonitor::new(enabled),
        }
    }

    /// Builds the full view. Account and payment failures propagate; an
    /// absent probe result or missing environment value never fails the
    /// assembly and simply leaves the field unset.
    pub async fn render_index(&self) -> Result<IndexView> {
        tracing::debug!("Loading top {} accounts by balance", TOP_ACCOUNTS_LIMIT);
        let accounts = self.accounts.top_by_balance(TOP_ACCOUNTS_LIMIT).await?;
        tracing::debug!("Loaded {} accounts", accounts.len());
        self.monitor.log_stats("Accounts loaded");

        let payments = self.payments.current_payments().await?;
        tracing::debug!("Loaded {} payments", payments.len());
        self.monitor.log_stats("Payments loaded");

        let ssl_version = probe_ssl_version(&self.probe);

        Ok(IndexView {
            os_name: self.env.lookup(env_keys::OS_NAME),
            runtime_name: self.env.lookup(env_keys::RUNTIME_NAME),
            runtime_version: self.env.lookup(env_keys::RUNTIME_VERSION),
            ssl_version,
            host: self.env.lookup(env_keys::HOST_NAME),
            ip: self.env.lookup(env_keys::HOST_ADDRESS),
            port: self.env.lookup(env_keys::SERVER_PORT),
            accounts,
            payments,
        })
    }
}
