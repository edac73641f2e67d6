//! ID minting logic
//!
//! The whole read-modify-write of (last timestamp, counter) plus the random
//! fill runs inside one critical section, so no two concurrent calls can
//! observe the same (timestamp, sequence) pair.

use std::sync::PoisonError;

use super::wait::spin_until_after;
use super::{Clock, RandomSource, TimeBasedGenerator};
use crate::id::SandflakeId;

impl<C: Clock, R: RandomSource> TimeBasedGenerator<C, R> {
    /// Mint the next Sandflake ID
    ///
    /// Never fails. Blocks other callers on the same instance for the
    /// duration of the call, and blocks the caller itself only when the
    /// 24-bit sequence space for the current millisecond is exhausted, in
    /// which case it spins until the clock advances. A clock that stalls
    /// forever at that point stalls `next()` with it.
    pub fn next(&self) -> SandflakeId {
        // The critical section cannot panic, so a poisoned lock still holds
        // consistent state.
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let now = self.clock.now_millis();

        state.counter = state.counter.wrapping_add(1);
        let mut seq = (state.counter % u64::from(SandflakeId::MAX_SEQUENCE)) as u32;

        let mut millis = now;
        if now == state.last_timestamp_ms {
            if seq == 0 {
                // Sequence space for this millisecond is exhausted: wait for
                // the clock to move on and restart the sequence there.
                millis = spin_until_after(state.last_timestamp_ms, || self.clock.now_millis());
            }
        } else {
            // New (or moved-back) millisecond: the sequence restarts at 0.
            // A backward clock jump is accepted as-is; see the crate docs.
            seq = 0;
            state.counter = 0;
        }
        state.last_timestamp_ms = millis;

        let mut random = [0u8; SandflakeId::RANDOM_LEN];
        self.random.fill(&mut random);
        drop(state);

        SandflakeId::from_raw_parts(millis, self.worker_id(), seq, random)
    }
}
