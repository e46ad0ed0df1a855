//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (SUI_RPC_URL / CORS_ORIGIN overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by value into RpcClient, WorldClient and HttpServer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; nothing reads the environment at call time
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use schema::{
    AppConfig, CorsConfig, ListenerConfig, ObservabilityConfig, RpcConfig, TimeoutConfig,
    WorldConfig,
};
pub use validation::{validate_config, ValidationError};
