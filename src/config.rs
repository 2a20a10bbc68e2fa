//! Configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use span_timer::DurationUnit;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Service name must not be empty")]
    EmptyServiceName,

    #[error("Slow span threshold must be finite, got {threshold_ms}")]
    InvalidThreshold { threshold_ms: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub service_name: String,
    /// Spans at or above this many milliseconds are logged as slow. Zero or
    /// negative disables the check.
    pub slow_span_threshold_ms: f64,
    pub report_unit: DurationUnit,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            service_name: "apm-timing".to_string(),
            slow_span_threshold_ms: 500.0,
            report_unit: DurationUnit::Millis,
        }
    }
}

impl TimingConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TimingConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::EmptyServiceName);
        }
        if !self.slow_span_threshold_ms.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                threshold_ms: self.slow_span_threshold_ms,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn slow_threshold_enabled(&self) -> bool {
        self.slow_span_threshold_ms > 0.0
    }
}
