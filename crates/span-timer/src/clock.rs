use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" for a [`Timer`](crate::Timer), in seconds with sub-second precision.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from the Unix epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> f64 {
        epoch_seconds(SystemTime::now())
    }
}

/// Signed seconds between the Unix epoch and `time`; negative before the epoch
#[inline]
pub fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}

/// Manually driven clock. Clones share the same reading, so a test can keep
/// one handle and advance time under a timer that owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    seconds_bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(seconds: f64) -> Self {
        Self {
            seconds_bits: Arc::new(AtomicU64::new(seconds.to_bits())),
        }
    }

    #[inline]
    pub fn set(&self, seconds: f64) {
        self.seconds_bits.store(seconds.to_bits(), Ordering::Release);
    }

    /// Move the clock forward by `seconds` and return the new reading
    pub fn advance(&self, seconds: f64) -> f64 {
        let mut current = self.seconds_bits.load(Ordering::Acquire);
        loop {
            let next = f64::from_bits(current) + seconds;
            match self.seconds_bits.compare_exchange_weak(
                current,
                next.to_bits(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> f64 {
        f64::from_bits(self.seconds_bits.load(Ordering::Acquire))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}
