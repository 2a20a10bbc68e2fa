use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerError {
    #[error("Timer is already running")]
    AlreadyRunning,

    #[error("Timer has not been started")]
    NotStarted,

    #[error("Timer has not been stopped")]
    NotStopped,
}

pub type Result<T> = std::result::Result<T, TimerError>;
