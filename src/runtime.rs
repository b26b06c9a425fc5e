use std::process::Command;

use crate::consts::*;
use crate::host::HostError;

/// Asks the job's interpreter for its version string.
pub struct InterpreterProbe {
    program: String,
}

impl InterpreterProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn version(&self) -> Result<String, HostError> {
        let output = Command::new(&self.program)
            .arg("-c")
            .arg(INTERPRETER_VERSION_SNIPPET)
            .output()
            .map_err(|source| HostError::InterpreterSpawn {
                interpreter: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(HostError::InterpreterStatus {
                interpreter: self.program.clone(),
                status: output.status,
            });
        }

        let raw = String::from_utf8(output.stdout)?;
        let version = normalize_version(&raw);
        if version.is_empty() {
            return Err(HostError::EmptyVersion(self.program.clone()));
        }

        log::debug!("{} reports version {}", self.program, version);
        Ok(version)
    }
}

// Older interpreters put the compiler tag on its own line.
fn normalize_version(raw: &str) -> String {
    raw.trim_end()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}
