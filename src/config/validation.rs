//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module checks values. Every
//! violation is reported, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// Upper bound on the per-call ledger RPC timeout.
pub const MAX_RPC_TIMEOUT_SECS: u64 = 30;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    check_http_url(&mut errors, "rpc.url", &config.rpc.url);

    if config.rpc.timeout_secs == 0 || config.rpc.timeout_secs > MAX_RPC_TIMEOUT_SECS {
        errors.push(ValidationError::new(
            "rpc.timeout_secs",
            format!(
                "must be between 1 and {}, got {}",
                MAX_RPC_TIMEOUT_SECS, config.rpc.timeout_secs
            ),
        ));
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::new(
            "cors.allowed_origins",
            "at least one origin (or \"*\") is required",
        ));
    }

    if config.timeouts.request_secs <= config.rpc.timeout_secs {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            format!(
                "must exceed rpc.timeout_secs ({}), got {}",
                config.rpc.timeout_secs, config.timeouts.request_secs
            ),
        ));
    }

    if config.world.enabled {
        check_http_url(&mut errors, "world.base_url", &config.world.base_url);
        if config.world.timeout_secs == 0 {
            errors.push(ValidationError::new("world.timeout_secs", "must be positive"));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    match url::Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(field, format!("invalid URL: {}", e))),
    }
}
