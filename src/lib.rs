//! # Sandflake
//!
//! A Rust implementation of Sandflake IDs - compact, time-sortable 128-bit
//! distributed unique identifiers.
//!
//! Generate 16-byte unique identifiers that are:
//! - 📈 Time-sorted (48-bit millisecond timestamp leads the layout)
//! - 🔄 Monotonic within a millisecond (24-bit sequence counter)
//! - 🔒 Thread-safe (concurrent callers are serialized per generator)
//! - 🌐 Distributed-ready (32-bit worker id plus 24 bits of entropy)
//! - 🔤 Textual (fixed 26-character base32 form, lexicographically sortable)
//!
//! No coordination service is required: worker ids default to random bytes,
//! and global uniqueness holds with overwhelming probability rather than by
//! registry assignment.
//!
//! ```
//! use sandflake::TimeBasedGenerator;
//!
//! let generator = TimeBasedGenerator::new();
//! let id = generator.next();
//!
//! let encoded = id.encode();
//! assert_eq!(encoded.len(), 26);
//! assert_eq!(sandflake::SandflakeId::decode(&encoded).unwrap(), id);
//! ```
//!
//! ## Clock regressions
//!
//! A wall clock that jumps backward between calls is not detected: the
//! generator resets its sequence and emits the earlier timestamp as-is, so
//! time-sortedness is only as good as the clock. Inject a monotonic [`Clock`]
//! if that matters for your deployment.

#![forbid(unsafe_code)]

pub mod base32;
mod error;
mod generator;
mod id;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use error::SandflakeError;
pub use generator::{Clock, RandomSource, SystemClock, ThreadRandom, TimeBasedGenerator};
pub use id::SandflakeId;

// Re-export base32 codec at crate root
pub use base32::{decode as base32_decode, encode as base32_encode};
pub use base32::{ENCODED_LEN as BASE32_ENCODED_LEN, RAW_LEN as BASE32_RAW_LEN};
