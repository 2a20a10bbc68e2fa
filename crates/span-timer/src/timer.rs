use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TimerError};
use crate::record::SpanTiming;
use crate::units::{to_micro, to_milli, DurationUnit, MICROS_PER_SECOND};

/// Divisor of the raw interval used by [`Timer::duration_from_micro_in_milliseconds`]
pub const FROM_MICRO_DIVISOR: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerState {
    Unstarted,
    Running,
    Stopped,
}

impl TimerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Unstarted => "unstarted",
            TimerState::Running => "running",
            TimerState::Stopped => "stopped",
        }
    }
}

/// Measures one interval between a start and a stop timestamp.
///
/// Timestamps are seconds with fractional precision as reported by the
/// timer's [`Clock`]. The timer can be started once; stopping is allowed any
/// number of times after that, each call replacing the previous stop time.
/// No locking is done, so share it behind a mutex if several callers need it.
#[derive(Debug, Clone, Default)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    started_on: Option<f64>,
    stopped_on: Option<f64>,
}

impl Timer<SystemClock> {
    /// Unstarted timer on the system clock
    #[inline]
    pub fn new() -> Self {
        Self::with_clock(SystemClock, None)
    }

    /// Timer already running since `start_time` (seconds since the Unix epoch)
    #[inline]
    pub fn with_start_time(start_time: f64) -> Self {
        Self::with_clock(SystemClock, Some(start_time))
    }
}

impl<C: Clock> Timer<C> {
    pub fn with_clock(clock: C, start_time: Option<f64>) -> Self {
        Self {
            clock,
            started_on: start_time,
            stopped_on: None,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.started_on.is_some() {
            return Err(TimerError::AlreadyRunning);
        }

        let now = self.clock.now();
        self.started_on = Some(now);
        trace!(started_on = now, "timer started");
        Ok(())
    }

    /// Start the timer at an externally supplied time instead of now
    pub fn started_at(&mut self, start: f64) -> Result<()> {
        if self.started_on.is_some() {
            return Err(TimerError::AlreadyRunning);
        }

        self.started_on = Some(start);
        debug!(started_on = start, "timer started at explicit time");
        Ok(())
    }

    /// Stop the timer now. Calling this again moves the stop time forward.
    pub fn stop(&mut self) -> Result<()> {
        if self.started_on.is_none() {
            return Err(TimerError::NotStarted);
        }

        let now = self.clock.now();
        if self.stopped_on.is_some() {
            trace!(stopped_on = now, "timer stop time refreshed");
        } else {
            trace!(stopped_on = now, "timer stopped");
        }
        self.stopped_on = Some(now);
        Ok(())
    }

    /// Stop the timer `duration` seconds after its start time
    pub fn stopped_at(&mut self, duration: f64) -> Result<()> {
        let started_on = self.started_on.ok_or(TimerError::NotStarted)?;

        let stopped_on = started_on + duration;
        self.stopped_on = Some(stopped_on);
        debug!(stopped_on, duration, "timer stopped at offset from start");
        Ok(())
    }

    /// Duration of the stopped interval in microseconds
    #[inline]
    pub fn duration(&self) -> Result<f64> {
        self.interval().map(to_micro)
    }

    /// Duration of the stopped interval in milliseconds
    #[inline]
    pub fn duration_in_milliseconds(&self) -> Result<f64> {
        self.interval().map(to_milli)
    }

    /// Raw interval divided by 10 000, with no seconds scaling applied first.
    ///
    /// This is not the same value as [`Timer::duration_in_milliseconds`]; for a
    /// 1.5 second interval it yields `0.00015`. Existing consumers depend on the
    /// exact arithmetic, so it is kept as is.
    #[inline]
    pub fn duration_from_micro_in_milliseconds(&self) -> Result<f64> {
        self.interval().map(|seconds| seconds / FROM_MICRO_DIVISOR)
    }

    /// Duration of the stopped interval in `unit`, through the matching accessor
    pub fn duration_in(&self, unit: DurationUnit) -> Result<f64> {
        match unit {
            DurationUnit::Micros => self.duration(),
            DurationUnit::Millis => self.duration_in_milliseconds(),
        }
    }

    /// Microseconds since start, frozen at [`Timer::duration`] once stopped
    pub fn elapsed(&self) -> Result<f64> {
        let started_on = self.started_on.ok_or(TimerError::NotStarted)?;

        match self.stopped_on {
            None => Ok(to_micro(self.clock.now() - started_on)),
            Some(_) => self.duration(),
        }
    }

    /// Milliseconds since start, frozen at [`Timer::duration_in_milliseconds`] once stopped
    pub fn elapsed_in_milliseconds(&self) -> Result<f64> {
        let started_on = self.started_on.ok_or(TimerError::NotStarted)?;

        match self.stopped_on {
            None => Ok(to_milli(self.clock.now() - started_on)),
            Some(_) => self.duration_in_milliseconds(),
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started_on.is_some()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped_on.is_some()
    }

    #[inline]
    pub fn started_on(&self) -> Option<f64> {
        self.started_on
    }

    #[inline]
    pub fn stopped_on(&self) -> Option<f64> {
        self.stopped_on
    }

    pub fn state(&self) -> TimerState {
        match (self.started_on, self.stopped_on) {
            (None, _) => TimerState::Unstarted,
            (Some(_), None) => TimerState::Running,
            (Some(_), Some(_)) => TimerState::Stopped,
        }
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start time as a UTC timestamp, if started and representable
    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        let started_on = self.started_on?;
        if !started_on.is_finite() {
            return None;
        }

        let secs = started_on.floor();
        let nanos = ((started_on - secs) * 1_000_000_000.0).round().min(999_999_999.0) as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    }

    /// Timing fields for a telemetry record of the stopped interval
    pub fn timing(&self) -> Result<SpanTiming> {
        let duration = self.duration_in_milliseconds()?;
        let started_on = self.started_on.ok_or(TimerError::NotStarted)?;

        Ok(SpanTiming {
            timestamp: (started_on * MICROS_PER_SECOND).round() as i64,
            duration,
        })
    }

    /// Seconds between start and stop
    fn interval(&self) -> Result<f64> {
        match (self.started_on, self.stopped_on) {
            (Some(started_on), Some(stopped_on)) => Ok(stopped_on - started_on),
            _ => Err(TimerError::NotStopped),
        }
    }
}
