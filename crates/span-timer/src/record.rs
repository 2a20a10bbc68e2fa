use serde::{Deserialize, Serialize};

/// Timing fields carried by a span or transaction record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanTiming {
    /// Start of the interval, microseconds since the Unix epoch
    pub timestamp: i64,
    /// Length of the interval in milliseconds
    pub duration: f64,
}
