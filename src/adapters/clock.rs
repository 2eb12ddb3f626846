//! Time source adapters.
//!
//! The domain stamps audit entries through the [`TimeSource`] port and
//! never reads a global clock. Two adapters cover the two deployments:
//! [`WallClock`] for the live simulator, [`ManualClock`] for tests and
//! scripted runs where time must be deterministic.

use chrono::{Local, Timelike};

use crate::app::ports::TimeSource;

/// Local wall-clock time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl WallClock {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for WallClock {
    fn seconds_of_day(&self) -> u32 {
        Local::now().num_seconds_from_midnight()
    }
}

/// Manually-advanced time source for deterministic runs.
///
/// Interior mutability so the clock can be advanced while the service
/// holds it behind a shared reference.
#[derive(Debug, Default)]
pub struct ManualClock {
    seconds: core::cell::Cell<u32>,
}

impl ManualClock {
    /// A clock reading `seconds` past local midnight.
    pub fn at(seconds: u32) -> Self {
        Self {
            seconds: core::cell::Cell::new(seconds),
        }
    }

    /// Advance the clock, wrapping at midnight like the real one.
    pub fn advance(&self, secs: u32) {
        self.seconds.set((self.seconds.get() + secs) % 86_400);
    }
}

impl TimeSource for ManualClock {
    fn seconds_of_day(&self) -> u32 {
        self.seconds.get()
    }
}
