use serde::{Deserialize, Serialize};

pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
pub const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Seconds to microseconds
#[inline]
pub fn to_micro(seconds: f64) -> f64 {
    seconds * MICROS_PER_SECOND
}

/// Seconds to milliseconds
#[inline]
pub fn to_milli(seconds: f64) -> f64 {
    seconds * MILLIS_PER_SECOND
}

/// Unit a duration is reported in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Micros,
    #[default]
    Millis,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Micros => "us",
            DurationUnit::Millis => "ms",
        }
    }
}
