use crate::domain::error::{DocsError, DocsResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config/grafana";
pub const ENV_PREFIX: &str = "GRAFANA";

/// Raw settings as read from the config file and `GRAFANA_*` variables.
#[derive(Debug, Deserialize, Clone)]
pub struct GrafanaSettings {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

/// Validated connection settings, built once at startup.
#[derive(Debug, Clone)]
pub struct GrafanaConfig {
    pub address: String,
    pub token: String,
    pub timeout: Duration,
    pub concurrency: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_concurrency() -> usize {
    4
}

pub fn load_grafana_config(file: Option<&Path>) -> DocsResult<GrafanaConfig> {
    build_grafana_config(file, config::Environment::with_prefix(ENV_PREFIX))
}

fn build_grafana_config(
    file: Option<&Path>,
    env: config::Environment,
) -> DocsResult<GrafanaConfig> {
    let file_source = match file {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = config::Config::builder()
        .add_source(file_source)
        .add_source(env.try_parsing(true))
        .build()
        .and_then(|c| c.try_deserialize::<GrafanaSettings>())
        .map_err(|e| DocsError::Config(e.to_string()))?;

    settings.validate()
}

impl GrafanaSettings {
    pub fn validate(self) -> DocsResult<GrafanaConfig> {
        let address = self.address.trim().trim_end_matches('/').to_string();
        if address.is_empty() {
            return Err(DocsError::Config(format!("{ENV_PREFIX}_ADDRESS is not set")));
        }

        let token = self.token.trim().to_string();
        if token.is_empty() {
            return Err(DocsError::Config(format!("{ENV_PREFIX}_TOKEN is not set")));
        }

        if self.timeout_secs == 0 {
            return Err(DocsError::Config("timeout_secs must be positive".to_string()));
        }

        Ok(GrafanaConfig {
            address,
            token,
            timeout: Duration::from_secs(self.timeout_secs),
            concurrency: self.concurrency.max(1),
        })
    }
}
