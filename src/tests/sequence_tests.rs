use crate::tests::test_utils::{assert_unique_ids, FixedClock, FixedRandom, ScriptedClock, SeededRandom};
use crate::{SandflakeId, TimeBasedGenerator};

#[test]
fn test_generate_10000_within_one_millisecond() {
    let now = 1_700_000_000_000u64;
    let generator = TimeBasedGenerator::from_parts(FixedClock(now), SeededRandom::new(1));

    let count = 10_000;
    let mut ids = Vec::with_capacity(count);

    for i in 0..count {
        let id = generator.next();
        assert_eq!(id.timestamp_ms(), now);
        assert_eq!(id.sequence(), i as u32);
        ids.push(id);
    }

    assert_unique_ids(&ids, count);
}

#[test]
fn test_sequence_resets_on_new_millisecond() {
    let clock = ScriptedClock::new(vec![1_000, 1_000, 1_001]);
    let generator =
        TimeBasedGenerator::from_parts_with_worker_id(clock, FixedRandom(7), [2, 2, 2, 2]);

    let id1 = generator.next();
    let id2 = generator.next();
    let id3 = generator.next();

    assert_eq!((id1.timestamp_ms(), id1.sequence()), (1_000, 0));
    assert_eq!((id2.timestamp_ms(), id2.sequence()), (1_000, 1));
    assert_eq!((id3.timestamp_ms(), id3.sequence()), (1_001, 0));
}

#[test]
fn test_sequence_wrap_waits_for_clock_advance() {
    // Reading 0 seeds the first call; readings 1.. serve the wrapped call:
    // its own `now` plus a few stalled polls before the clock moves on.
    let clock = ScriptedClock::new(vec![1_000, 1_000, 1_000, 1_000, 1_001]);
    let generator =
        TimeBasedGenerator::from_parts_with_worker_id(clock, FixedRandom(0), [3, 3, 3, 3]);

    let id1 = generator.next();
    assert_eq!((id1.timestamp_ms(), id1.sequence()), (1_000, 0));

    // Fast-forward the counter to the end of this millisecond's space
    generator.state.lock().unwrap().counter = u64::from(SandflakeId::MAX_SEQUENCE) - 1;

    // The counter wraps to 0, so this call must sit out the exhausted
    // millisecond and restart the sequence in the next one.
    let id2 = generator.next();
    assert_eq!((id2.timestamp_ms(), id2.sequence()), (1_001, 0));

    // Counting continues normally in the new millisecond
    let id3 = generator.next();
    assert_eq!((id3.timestamp_ms(), id3.sequence()), (1_001, 1));
}

#[test]
fn test_wrapped_sequence_is_distinct_even_with_fixed_entropy() {
    let clock = ScriptedClock::new(vec![1_000, 1_000, 1_000, 1_001]);
    let generator =
        TimeBasedGenerator::from_parts_with_worker_id(clock, FixedRandom(0xAB), [4, 4, 4, 4]);

    // Open the millisecond, then fast-forward to the end of its space
    generator.next();
    generator.state.lock().unwrap().counter = u64::from(SandflakeId::MAX_SEQUENCE) - 2;

    // Sequence MAX-1 at millisecond 1000, then sequence 0 at 1001: the
    // timestamp field alone keeps the IDs apart.
    let id1 = generator.next();
    let id2 = generator.next();

    assert_eq!(id1.sequence(), SandflakeId::MAX_SEQUENCE - 1);
    assert_eq!(id2.sequence(), 0);
    assert_ne!(id1, id2);
    assert!(id1 < id2);
}

#[test]
fn test_sequence_never_reaches_max() {
    // The reduction is modulo MAX_SEQUENCE, so the emitted range is
    // [0, MAX_SEQUENCE - 1]; the value MAX_SEQUENCE itself never appears.
    let now = 42u64;
    let generator = TimeBasedGenerator::from_parts(FixedClock(now), SeededRandom::new(5));

    generator.next();
    generator.state.lock().unwrap().counter = u64::from(SandflakeId::MAX_SEQUENCE) - 2;

    let id = generator.next();
    assert_eq!(id.sequence(), SandflakeId::MAX_SEQUENCE - 1);
    assert!(id.sequence() < SandflakeId::MAX_SEQUENCE);
}
