//! # apm-timing: span and transaction timing
//!
//! Wraps the `span-timer` interval primitive with:
//! - TOML configuration for reporting
//! - Span reports ready for JSON serialization
//! - Slow span detection through `tracing`

pub mod config;
pub mod reporter;
pub mod utils;

pub use span_timer;

pub use config::{ConfigError, TimingConfig};
pub use reporter::{SpanReport, SpanReporter};

pub type Result<T> = anyhow::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
