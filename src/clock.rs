//! Time source for completion stamps and card ids

use chrono::{Local, NaiveDateTime};

/// Local wall-clock time
pub trait Clock {
    /// Current local date/time (no time zone, as displayed to the user)
    fn now(&self) -> NaiveDateTime;

    /// Milliseconds since the Unix epoch
    fn unix_millis(&self) -> i64 {
        self.now().and_utc().timestamp_millis()
    }
}

/// The system clock (browser clock on wasm32)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn unix_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
