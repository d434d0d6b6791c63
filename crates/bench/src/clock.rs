use std::time::{Duration, Instant};

use shared::error::ClockError;

/// Monotonic time source. Readings are offsets from the clock's own origin.
pub trait Clock {
    fn now(&self) -> Result<Duration, ClockError>;
}

#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Result<Duration, ClockError> {
        Ok(self.origin.elapsed())
    }
}
