//! Wall-clock time collaborator
//!
//! The generator reads time through the [`Clock`] trait so deterministic
//! clocks can be substituted in tests.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time for the generator
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// The system wall clock
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time before Unix epoch!")
            .as_millis() as u64
    }
}
