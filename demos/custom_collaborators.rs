use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sandflake::{Clock, RandomSource, TimeBasedGenerator};

/// A clock frozen at one millisecond - every ID shares the timestamp and the
/// sequence counter does all the disambiguation work.
struct FrozenClock(u64);

impl Clock for FrozenClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// A reproducible random source: same seed, same IDs.
struct SeededRandom(Mutex<StdRng>);

impl RandomSource for SeededRandom {
    fn fill(&self, buf: &mut [u8]) {
        self.0.lock().unwrap().fill_bytes(buf);
    }
}

fn main() {
    let clock = FrozenClock(1_495_843_200_020);
    let random = SeededRandom(Mutex::new(StdRng::seed_from_u64(42)));

    let generator = TimeBasedGenerator::from_parts(clock, random);
    println!("Worker id drawn from the seeded source: {:?}", generator.worker_id());

    println!("\nIDs minted inside a single frozen millisecond:");
    for _ in 0..5 {
        let id = generator.next();
        println!("  {} (sequence {})", id, id.sequence());
    }
}
