use std::collections::HashSet;
use std::thread;

use sandflake::TimeBasedGenerator;

fn main() {
    // Simulate four independent workers, each with its own generator and
    // pinned worker id. No coordination service is involved: disjoint worker
    // ids plus per-ID entropy carry the uniqueness responsibility.
    let mut handles = vec![];

    for worker in 0u8..4 {
        handles.push(thread::spawn(move || {
            let generator = TimeBasedGenerator::with_worker_id([0, 0, 0, worker]);
            (0..5).map(|_| generator.next()).collect::<Vec<_>>()
        }));
    }

    let mut all = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            println!(
                "worker {:?} -> {} (seq {})",
                id.worker_id(),
                id,
                id.sequence()
            );
            assert!(all.insert(id), "duplicate ID across workers");
        }
    }

    println!("\n{} IDs, all unique", all.len());
}
