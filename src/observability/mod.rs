//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters and histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (human or JSON lines)
//!     → Prometheus scrape endpoint (when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID (`x-request-id`) is attached to every request span
//! - Metrics are recorded unconditionally and are no-ops until a recorder
//!   is installed

pub mod logging;
pub mod metrics;
