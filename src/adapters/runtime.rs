use crate::domain::ports::{env_keys, RuntimeEnv};
use std::net::UdpSocket;

/// Resolves the well-known diagnostic keys from the host this process runs
/// on, plus the port the demo is configured to serve from.
#[derive(Debug, Clone)]
pub struct SystemRuntimeEnv {
    port: u16,
}

impl SystemRuntimeEnv {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl RuntimeEnv for SystemRuntimeEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            env_keys::OS_NAME => os_name(),
            env_keys::RUNTIME_NAME => Some(env!("CARGO_PKG_NAME").to_string()),
            env_keys::RUNTIME_VERSION => Some(env!("CARGO_PKG_VERSION").to_string()),
            env_keys::HOST_NAME => host_name(),
            env_keys::HOST_ADDRESS => local_ip(),
            env_keys::SERVER_PORT => Some(self.port.to_string()),
            _ => None,
        }
    }
}

#[cfg(feature = "cli")]
fn os_name() -> Option<String> {
    sysinfo::System::long_os_version().or_else(sysinfo::System::name)
}

#[cfg(not(feature = "cli"))]
fn os_name() -> Option<String> {
    Some(std::env::consts::OS.to_string())
}

#[cfg(feature = "cli")]
fn host_name() -> Option<String> {
    sysinfo::System::host_name()
}

#[cfg(not(feature = "cli"))]
fn host_name() -> Option<String> {
    std::env::var("HOSTNAME").ok()
}

/// Outbound address of this host as seen from the default route. The
/// connect() never sends a packet; it only binds the route.
fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip().to_string())
}
