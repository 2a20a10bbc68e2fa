//! Turns stopped timers into span reports

use anyhow::Result;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use span_timer::{Clock, DurationUnit, SpanTiming, Timer};
use tracing::{debug, warn};

use crate::config::TimingConfig;
use crate::utils::format_duration_us;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanReport {
    pub service: String,
    pub name: String,
    /// Start of the span as RFC 3339 UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(flatten)]
    pub timing: SpanTiming,
    /// Duration expressed in `unit`
    pub value: f64,
    pub unit: DurationUnit,
    pub duration_display: String,
    pub slow: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SpanReporter {
    config: TimingConfig,
}

impl SpanReporter {
    pub fn new(config: TimingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Build a report for a stopped timer
    pub fn report<C: Clock>(&self, name: &str, timer: &Timer<C>) -> Result<SpanReport> {
        let timing = timer.timing()?;
        let micros = timer.duration()?;

        let slow = self.config.slow_threshold_enabled()
            && timing.duration >= self.config.slow_span_threshold_ms;

        let report = SpanReport {
            service: self.config.service_name.clone(),
            name: name.to_string(),
            start_time: timer
                .started_at_utc()
                .map(|utc| utc.to_rfc3339_opts(SecondsFormat::Micros, true)),
            timing,
            value: timer.duration_in(self.config.report_unit)?,
            unit: self.config.report_unit,
            duration_display: format_duration_us(micros),
            slow,
        };

        if slow {
            warn!(
                span = name,
                duration_ms = timing.duration,
                threshold_ms = self.config.slow_span_threshold_ms,
                "slow span"
            );
        } else {
            debug!(span = name, duration = %report.duration_display, "span reported");
        }

        Ok(report)
    }

    pub fn to_json<C: Clock>(&self, name: &str, timer: &Timer<C>) -> Result<String> {
        let report = self.report(name, timer)?;
        Ok(serde_json::to_string(&report)?)
    }
}
