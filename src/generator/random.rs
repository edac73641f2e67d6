//! Random byte collaborator
//!
//! The generator draws entropy through the [`RandomSource`] trait so seeded
//! or fixed sources can be substituted in tests.

use rand::RngCore;

/// A source of random bytes for the generator
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes
    fn fill(&self, buf: &mut [u8]);
}

/// A `RandomSource` backed by the thread-local RNG
///
/// This type does not store the RNG itself; it reaches for the thread-local
/// generator on each call, so it stays zero-sized and freely shareable across
/// threads even though `ThreadRng` itself is not `Send` or `Sync`.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    #[inline]
    fn fill(&self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }
}
