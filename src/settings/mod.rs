use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProbeConfig {
    /// Program asked for its `sys.version`.
    pub interpreter: String,
    pub format: OutputFormat,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl ProbeConfig {
    /// Loads settings from `JOBPROBE_*` variables of the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(CONFIG_ENV_PREFIX))
    }

    /// Same as [`ProbeConfig::load`], reading the variables from `source`.
    #[cfg(test)]
    pub fn from_source(source: config::Map<String, String>) -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(CONFIG_ENV_PREFIX).source(Some(source)))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .set_default("interpreter", DEFAULT_INTERPRETER)?
            .set_default("format", DEFAULT_FORMAT)?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        log::debug!("Loaded probe config: {:?}", config);
        Ok(config)
    }
}
