pub mod clock;
pub mod error;
pub mod record;
pub mod timer;
pub mod units;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, TimerError};
pub use record::SpanTiming;
pub use timer::{Timer, TimerState};
pub use units::{to_micro, to_milli, DurationUnit};
