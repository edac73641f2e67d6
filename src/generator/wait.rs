//! Spin-wait for clock advancement
//!
//! Used when the sequence space for a millisecond is exhausted: the generator
//! must not mint another ID until the clock moves past that millisecond.

use std::thread;

/// Yield to the scheduler after this many consecutive polls
const YIELD_EVERY: u32 = 64;

/// Spin until the clock reports a millisecond strictly after `from_timestamp`
///
/// Blocks indefinitely if the clock never advances; the worst case under a
/// live clock is one tick (typically <= 1ms).
#[inline]
pub fn spin_until_after<F>(from_timestamp: u64, now_millis: F) -> u64
where
    F: Fn() -> u64,
{
    let mut polls: u32 = 0;
    loop {
        let ts = now_millis();
        if ts > from_timestamp {
            return ts;
        }

        std::hint::spin_loop();

        polls = polls.wrapping_add(1);
        if polls % YIELD_EVERY == 0 {
            thread::yield_now();
        }
    }
}
