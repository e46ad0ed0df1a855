//! Configuration loading from disk and the environment.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `rpc.url`.
pub const ENV_RPC_URL: &str = "SUI_RPC_URL";

/// Overrides `cors.allowed_origins` (comma separated).
pub const ENV_CORS_ORIGIN: &str = "CORS_ORIGIN";

/// Why a configuration could not be produced.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The file is not valid TOML for [`AppConfig`].
    Parse(toml::de::Error),
    /// Every semantic check that failed.
    Validation(Vec<ValidationError>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config file: {e}"),
            Self::Parse(e) => write!(f, "malformed config file: {e}"),
            Self::Validation(errors) => {
                let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "invalid config: {}", joined.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` to resolve variable names.
///
/// Blank values are ignored so an exported-but-empty variable does not wipe
/// out the file setting.
pub fn apply_overrides_from<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_RPC_URL).filter(|v| !v.trim().is_empty()) {
        config.rpc.url = url.trim().to_string();
    }

    if let Some(origins) = lookup(ENV_CORS_ORIGIN) {
        let origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
        if !origins.is_empty() {
            config.cors.allowed_origins = origins;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_rpc_url_override() {
        let vars = env(&[(ENV_RPC_URL, " http://127.0.0.1:9123 ")]);
        let mut config = AppConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert_eq!(config.rpc.url, "http://127.0.0.1:9123");
    }

    #[test]
    fn test_cors_origin_override_splits_list() {
        let vars = env(&[(ENV_CORS_ORIGIN, "https://a.example, https://b.example,")]);
        let mut config = AppConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        let vars = env(&[(ENV_RPC_URL, "  "), (ENV_CORS_ORIGIN, " , ")]);
        let mut config = AppConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!("fleet-config-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[rpc]\ntimeout_secs = 0").unwrap();

        let result = load_config(&path);
        let _ = fs::remove_file(&path);

        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "rpc.timeout_secs");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_error_lists_every_field() {
        let err = ConfigError::Validation(vec![
            ValidationError {
                field: "rpc.url",
                message: "invalid URL".into(),
            },
            ValidationError {
                field: "rpc.timeout_secs",
                message: "must be between 1 and 30, got 0".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid config: rpc.url: invalid URL; rpc.timeout_secs: must be between 1 and 30, got 0"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/nonexistent/fleet.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
