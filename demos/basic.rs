use sandflake::TimeBasedGenerator;

fn main() {
    // Create a generator with a random worker id
    let generator = TimeBasedGenerator::new();

    // Generate some IDs
    let id1 = generator.next();
    let id2 = generator.next();
    let id3 = generator.next();

    println!("Generated IDs (time-sorted, monotonic within a millisecond):");
    for id in [id1, id2, id3] {
        println!(
            "  ID: {}, Timestamp: {} ({}), Worker: {:?}, Sequence: {}, Random: {:?}",
            id,
            id.timestamp_ms(),
            id.timestamp(),
            id.worker_id(),
            id.sequence(),
            id.random_bytes(),
        );
    }

    // The 26-character string form round-trips exactly
    let encoded = id2.encode();
    let decoded = sandflake::SandflakeId::decode(&encoded).unwrap();
    println!("\nRound trip: {} -> {:?}", encoded, decoded);
    assert_eq!(decoded, id2);
}
