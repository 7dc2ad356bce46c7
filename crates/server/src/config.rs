use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Socket address the webhook listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub limits: PayloadLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            limits: PayloadLimits::default(),
        }
    }
}

/// Structural limits applied to inbound event bodies before they are inspected.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PayloadLimits {
    pub max_body_bytes: usize,
    pub max_depth: usize,
    pub max_string_length: usize,
    pub max_array_length: usize,
    pub max_object_keys: usize,
}

impl Default for PayloadLimits {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            max_depth: 32,
            max_string_length: 64 * 1024,
            max_array_length: 10_000,
            max_object_keys: 1_000,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "bind_address must be a socket address, got {:?}",
                self.bind_address
            )));
        }

        let limits = [
            ("limits.max_body_bytes", self.limits.max_body_bytes),
            ("limits.max_depth", self.limits.max_depth),
            ("limits.max_string_length", self.limits.max_string_length),
            ("limits.max_array_length", self.limits.max_array_length),
            ("limits.max_object_keys", self.limits.max_object_keys),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Validation(format!("{name} must be > 0")));
        }

        Ok(())
    }
}

/// Load application configuration from an optional `config.yaml` + environment overrides.
///
/// Any environment variable matching the key path separated by double underscores
/// (e.g. `LIMITS__MAX_BODY_BYTES`) overrides the file value. Every key has a default,
/// so running without a file is valid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::with_name("config.yaml").required(false))
        .add_source(Environment::default().separator("__"))
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;
    app.validate()?;

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_address, "0.0.0.0:8080");
        assert_eq!(cfg.limits.max_body_bytes, 1024 * 1024);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_unparseable_bind_address() {
        let cfg = AppConfig {
            bind_address: "localhost".into(),
            ..AppConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn rejects_zero_limit() {
        let mut cfg = AppConfig::default();
        cfg.limits.max_depth = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("limits.max_depth must be > 0"));
    }
}
