//! The Sandflake ID value type
//!
//! An immutable 16-byte identifier with four big-endian fields:
//!
//! ```text
//! 48bit: timestamp (milliseconds since Unix epoch)
//! 32bit: worker id (defaults to random)
//! 24bit: sequence number
//! 24bit: random number
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::base32;
use crate::error::SandflakeError;

const TIMESTAMP_OFFSET: usize = 0;
const WORKER_ID_OFFSET: usize = SandflakeId::TIMESTAMP_LEN;
const SEQUENCE_OFFSET: usize = WORKER_ID_OFFSET + SandflakeId::WORKER_ID_LEN;
const RANDOM_OFFSET: usize = SEQUENCE_OFFSET + SandflakeId::SEQUENCE_LEN;

/// An immutable 128-bit Sandflake identifier
///
/// Equality, hashing and ordering are defined over the full 16-byte
/// representation; the big-endian layout makes byte order the time order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SandflakeId {
    raw: [u8; Self::SIZE],
}

impl SandflakeId {
    /// Total size of the raw binary form in bytes
    pub const SIZE: usize = 16;
    /// Length of the encoded textual form in characters
    pub const ENCODED_LEN: usize = base32::ENCODED_LEN;
    /// Length of the timestamp field in bytes
    pub const TIMESTAMP_LEN: usize = 6;
    /// Length of the worker id field in bytes
    pub const WORKER_ID_LEN: usize = 4;
    /// Length of the sequence field in bytes
    pub const SEQUENCE_LEN: usize = 3;
    /// Length of the random field in bytes
    pub const RANDOM_LEN: usize = 3;
    /// Largest value the 24-bit sequence field can hold
    pub const MAX_SEQUENCE: u32 = 0x00FF_FFFF;

    /// Create a Sandflake ID from a raw 16-byte buffer
    ///
    /// # Errors
    /// Returns [`SandflakeError::InvalidArgument`] unless the buffer is
    /// exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SandflakeError> {
        if bytes.len() != Self::SIZE {
            return Err(SandflakeError::InvalidArgument {
                field: "ID",
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut raw = [0u8; Self::SIZE];
        raw.copy_from_slice(bytes);
        Ok(Self { raw })
    }

    /// Create a Sandflake ID from its four components
    ///
    /// The timestamp is truncated to its low 48 bits and the sequence to its
    /// low 24 bits on write.
    ///
    /// # Errors
    /// Returns [`SandflakeError::InvalidArgument`] on a wrong-length worker
    /// id or random slice.
    pub fn from_parts(
        timestamp_ms: u64,
        worker_id: &[u8],
        sequence: u32,
        random: &[u8],
    ) -> Result<Self, SandflakeError> {
        if worker_id.len() != Self::WORKER_ID_LEN {
            return Err(SandflakeError::InvalidArgument {
                field: "worker id",
                expected: Self::WORKER_ID_LEN,
                actual: worker_id.len(),
            });
        }
        if random.len() != Self::RANDOM_LEN {
            return Err(SandflakeError::InvalidArgument {
                field: "random bytes",
                expected: Self::RANDOM_LEN,
                actual: random.len(),
            });
        }

        let mut worker = [0u8; Self::WORKER_ID_LEN];
        worker.copy_from_slice(worker_id);
        let mut rand = [0u8; Self::RANDOM_LEN];
        rand.copy_from_slice(random);

        Ok(Self::from_raw_parts(timestamp_ms, worker, sequence, rand))
    }

    /// Assemble an ID from already-validated fixed-size components
    pub(crate) fn from_raw_parts(
        timestamp_ms: u64,
        worker_id: [u8; Self::WORKER_ID_LEN],
        sequence: u32,
        random: [u8; Self::RANDOM_LEN],
    ) -> Self {
        let mut raw = [0u8; Self::SIZE];
        let ts = timestamp_ms.to_be_bytes();
        raw[TIMESTAMP_OFFSET..WORKER_ID_OFFSET].copy_from_slice(&ts[2..]);
        raw[WORKER_ID_OFFSET..SEQUENCE_OFFSET].copy_from_slice(&worker_id);
        let seq = sequence.to_be_bytes();
        raw[SEQUENCE_OFFSET..RANDOM_OFFSET].copy_from_slice(&seq[1..]);
        raw[RANDOM_OFFSET..].copy_from_slice(&random);
        Self { raw }
    }

    /// Decode a 26-character string into a Sandflake ID
    ///
    /// # Errors
    /// Returns [`SandflakeError::InvalidLength`] or
    /// [`SandflakeError::InvalidCharacter`] on malformed input.
    pub fn decode(encoded: &str) -> Result<Self, SandflakeError> {
        let raw = base32::decode(encoded)?;
        Ok(Self { raw })
    }

    /// Encode this ID into its canonical 26-character string form
    pub fn encode(&self) -> String {
        base32::encode(&self.raw)
    }

    /// Milliseconds since the Unix epoch
    ///
    /// The 48-bit field occupies the low-order bits of the returned value;
    /// the top 16 bits are always zero.
    pub fn timestamp_ms(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf[2..].copy_from_slice(&self.raw[TIMESTAMP_OFFSET..WORKER_ID_OFFSET]);
        u64::from_be_bytes(buf)
    }

    /// Timestamp as a UTC datetime
    pub fn timestamp(&self) -> DateTime<Utc> {
        // A 48-bit millisecond count is always within chrono's range
        DateTime::from_timestamp_millis(self.timestamp_ms() as i64)
            .expect("48-bit timestamp out of range")
    }

    /// The 4 raw worker id bytes
    pub fn worker_id(&self) -> [u8; Self::WORKER_ID_LEN] {
        let mut buf = [0u8; Self::WORKER_ID_LEN];
        buf.copy_from_slice(&self.raw[WORKER_ID_OFFSET..SEQUENCE_OFFSET]);
        buf
    }

    /// The 24-bit sequence number, zero-extended
    pub fn sequence(&self) -> u32 {
        let mut buf = [0u8; 4];
        buf[1..].copy_from_slice(&self.raw[SEQUENCE_OFFSET..RANDOM_OFFSET]);
        u32::from_be_bytes(buf)
    }

    /// The 3 raw random bytes
    pub fn random_bytes(&self) -> [u8; Self::RANDOM_LEN] {
        let mut buf = [0u8; Self::RANDOM_LEN];
        buf.copy_from_slice(&self.raw[RANDOM_OFFSET..]);
        buf
    }

    /// A copy of the full 16-byte representation
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.raw
    }

    /// A borrow of the full 16-byte representation
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.raw
    }
}

impl fmt::Display for SandflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = base32::encode_array(&self.raw);
        // encode_array emits alphabet bytes only, which are valid ASCII
        f.write_str(&String::from_utf8_lossy(&encoded))
    }
}

impl fmt::Debug for SandflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SandflakeId({})", self)
    }
}

impl FromStr for SandflakeId {
    type Err = SandflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
