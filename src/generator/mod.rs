//! Core time-based generator implementation
//!
//! Split into modules for testability:
//! - `clock` - Wall-clock capability trait and the system clock
//! - `random` - Random byte capability trait and the thread-local source
//! - `wait` - Spin-wait until clock advancement
//! - `next` - ID minting logic

mod clock;
mod next;
mod random;
mod wait;

use std::sync::Mutex;

pub use clock::{Clock, SystemClock};
pub use random::{RandomSource, ThreadRandom};

use crate::id::SandflakeId;

/// Mutable generation state, guarded by the generator's mutex
#[derive(Debug)]
pub(crate) struct GeneratorState {
    /// Millisecond value recorded by the previous `next()` call, 0 before
    /// the first ID is minted
    pub(crate) last_timestamp_ms: u64,
    /// Monotonically incremented counter, reduced modulo
    /// [`SandflakeId::MAX_SEQUENCE`] to produce sequence numbers
    pub(crate) counter: u64,
}

/// Thread-safe generator of time-sorted Sandflake IDs
///
/// Each instance owns a fixed 4-byte worker id (supplied or drawn once from
/// the random source at construction) and serializes concurrent `next()`
/// callers around its sequence state.
#[derive(Debug)]
pub struct TimeBasedGenerator<C = SystemClock, R = ThreadRandom> {
    pub(crate) clock: C,
    pub(crate) random: R,
    worker_id: [u8; SandflakeId::WORKER_ID_LEN],
    pub(crate) state: Mutex<GeneratorState>,
}

impl TimeBasedGenerator {
    /// Create a generator with the system clock, the thread-local random
    /// source, and a randomly drawn worker id
    pub fn new() -> Self {
        Self::from_parts(SystemClock, ThreadRandom)
    }

    /// Create a generator with default collaborators and a pinned worker id
    pub fn with_worker_id(worker_id: [u8; SandflakeId::WORKER_ID_LEN]) -> Self {
        Self::from_parts_with_worker_id(SystemClock, ThreadRandom, worker_id)
    }
}

impl Default for TimeBasedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: RandomSource> TimeBasedGenerator<C, R> {
    /// Create a generator from injected collaborators, drawing the worker id
    /// from `random` once
    pub fn from_parts(clock: C, random: R) -> Self {
        let mut worker_id = [0u8; SandflakeId::WORKER_ID_LEN];
        random.fill(&mut worker_id);
        Self::from_parts_with_worker_id(clock, random, worker_id)
    }

    /// Create a generator from injected collaborators and a pinned worker id
    pub fn from_parts_with_worker_id(
        clock: C,
        random: R,
        worker_id: [u8; SandflakeId::WORKER_ID_LEN],
    ) -> Self {
        Self {
            clock,
            random,
            worker_id,
            state: Mutex::new(GeneratorState {
                last_timestamp_ms: 0,
                counter: 0,
            }),
        }
    }

    /// The fixed worker id minted into every ID from this generator
    pub fn worker_id(&self) -> [u8; SandflakeId::WORKER_ID_LEN] {
        self.worker_id
    }
}
