use crate::domain::ports::{ProbeOutput, VersionCommand};
use std::io;
use std::process::Command;

/// Runs `openssl version -a` on the local host, resolving the binary via
/// PATH. The command and arguments are fixed; there is no configuration
/// option to change them.
pub struct OpensslVersionCommand;

impl VersionCommand for OpensslVersionCommand {
    fn invoke(&self) -> io::Result<ProbeOutput> {
        // output() waits for exit and closes the captured pipes on every
        // path, including errors while reading.
        let output = Command::new("openssl").args(["version", "-a"]).output()?;
        Ok(ProbeOutput {
            success: output.status.success(),
            lines: String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::to_owned)
                .collect(),
        })
    }
}

/// Probe the installed SSL library version.
///
/// Total: never returns an error to the caller. Every failure mode resolves
/// to `None` plus at most one warning. On success the result is the first
/// stdout line, with the second line appended after a single space unless
/// that line contains "not available".
///
/// An interrupted wait returns `None` without logging. That asymmetry
/// matches the long-standing behavior of this probe and is kept as-is.
pub fn probe_ssl_version(command: &dyn VersionCommand) -> Option<String> {
    let output = match command.invoke() {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => return None,
        Err(e) => {
            tracing::warn!("Failed to get OpenSSL version: {}", e);
            return None;
        }
    };

    if !output.success {
        tracing::warn!("Cannot find the OpenSSL version");
        return None;
    }

    let first = match output.lines.first() {
        Some(line) => line.trim(),
        None => {
            tracing::warn!("Failed to get OpenSSL version: no output");
            return None;
        }
    };

    let mut version = first.to_string();
    if let Some(second) = output.lines.get(1) {
        if !second.contains("not available") {
            version.push(' ');
            version.push_str(second.trim());
        }
    }

    Some(version)
}
