use std::process::ExitStatus;
use std::string::FromUtf8Error;

use serde::Serialize;
use sysinfo::System;

use crate::runtime::InterpreterProbe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub interpreter_version: String,
    pub hostname: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to execute interpreter `{interpreter}`: {source}")]
    InterpreterSpawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },
    #[error("interpreter `{interpreter}` exited with {status}")]
    InterpreterStatus {
        interpreter: String,
        status: ExitStatus,
    },
    #[error("interpreter output is not valid UTF-8: {0}")]
    InterpreterOutput(#[from] FromUtf8Error),
    #[error("interpreter `{0}` reported an empty version")]
    EmptyVersion(String),
    #[error("host name is not available")]
    HostnameUnavailable,
}

/// Gathers the facts about this node that have no fallback value.
pub struct HostCollector {
    probe: InterpreterProbe,
}

impl HostCollector {
    pub fn new(probe: InterpreterProbe) -> Self {
        Self { probe }
    }

    pub fn collect_info(&self) -> Result<HostInfo, HostError> {
        log::debug!("Querying interpreter `{}`", self.probe.program());
        let interpreter_version = self.probe.version()?;
        let hostname = Self::get_hostname()?;

        Ok(HostInfo {
            interpreter_version,
            hostname,
        })
    }

    fn get_hostname() -> Result<String, HostError> {
        System::host_name()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(HostError::HostnameUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_failure_aborts_collection() {
        let probe = InterpreterProbe::new("jobprobe-no-such-interpreter");
        let collector = HostCollector::new(probe);
        let err = collector.collect_info().unwrap_err();
        assert!(matches!(err, HostError::InterpreterSpawn { .. }));
        assert!(err.to_string().contains("jobprobe-no-such-interpreter"));
    }

    #[test]
    fn hostname_matches_node_name() {
        // Build hosts always carry a node name.
        let hostname = HostCollector::get_hostname().unwrap();
        assert!(!hostname.is_empty());
        assert_eq!(hostname, hostname.trim());
    }

    #[test]
    fn empty_version_error_names_interpreter() {
        let err = HostError::EmptyVersion("python3".to_string());
        assert_eq!(err.to_string(), "interpreter `python3` reported an empty version");
    }
}
