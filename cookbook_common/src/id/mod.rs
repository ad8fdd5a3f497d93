//! # Id
//!
//! Sortable identifiers for catalog entities.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use ulid::Ulid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Unexpected};

/// Worker-based id generation.
pub mod worker;

/// A sortable identifier.
///
/// Ids built from worker parts order by creation time first, then by the
/// sequence number of the generator that produced them. The textual form is
/// the ULID encoding of the underlying 128-bit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u128);

/// Errors that can occur when parsing an `Id` from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// The string is not a valid ULID.
    #[error("invalid id string")]
    InvalidString,
}

const TIMESTAMP_BITS: u32 = 64;
const WORKER_BITS: u32 = 16;
const SEQUENCE_BITS: u32 = 16;

impl Id {
    /// Creates a new ID from a 128-bit integer.
    #[must_use]
    pub const fn new(id: u128) -> Self {
        Self(id)
    }

    /// Creates an ID from a timestamp, a worker number and a sequence number.
    ///
    /// Only millisecond precision of `time` is kept.
    #[must_use]
    pub fn from_worker_parts(time: OffsetDateTime, worker: u16, sequence: u16) -> Self {
        let timestamp_ms = (time.unix_timestamp_nanos() / 1_000_000) as u128;
        let worker = u128::from(worker);
        let sequence = u128::from(sequence);

        Self(
            (timestamp_ms & ((1 << TIMESTAMP_BITS) - 1)) << (WORKER_BITS + SEQUENCE_BITS)
                | (worker << SEQUENCE_BITS)
                | sequence,
        )
    }

    /// Decodes the ID into its timestamp, worker and sequence parts.
    #[must_use]
    pub fn decode_worker(self) -> (OffsetDateTime, u16, u16) {
        let milliseconds = (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) as i64;
        let timestamp = OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(milliseconds);

        let worker = ((self.0 >> SEQUENCE_BITS) & ((1 << WORKER_BITS) - 1)) as u16;
        let sequence = (self.0 & ((1 << SEQUENCE_BITS) - 1)) as u16;

        (timestamp, worker, sequence)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Ulid(self.0).fmt(f)
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_str(s)
            .map(From::from)
            .map_err(|_| ParseIdError::InvalidString)
    }
}

impl From<u128> for Id {
    fn from(id: u128) -> Self {
        Self(id)
    }
}

impl From<Id> for u128 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl From<Ulid> for Id {
    fn from(ulid: Ulid) -> Self {
        Self(ulid.0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        value
            .parse::<Self>()
            .map_err(|_| D::Error::invalid_value(Unexpected::Str(value.as_str()), &"Id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display() {
        let id = Id::from_worker_parts(OffsetDateTime::from_unix_timestamp(42).unwrap(), 5, 7);
        let decoded: Id = id.to_string().parse().unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn worker_parts() {
        let ts = OffsetDateTime::from_unix_timestamp(42).unwrap() + Duration::milliseconds(1337);

        let id = Id::from_worker_parts(ts, 1, 1);
        assert_eq!(id, Id::new((43_337 << 32) | (1 << 16) | 1));

        let (timestamp, worker, sequence) = id.decode_worker();
        assert_eq!(timestamp, ts);
        assert_eq!(worker, 1);
        assert_eq!(sequence, 1);
    }

    #[test]
    fn worker_ids_sort_by_sequence() {
        let ts = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let first = Id::from_worker_parts(ts, 3, 10);
        let second = Id::from_worker_parts(ts, 3, 11);
        let later = Id::from_worker_parts(ts + Duration::milliseconds(1), 3, 0);
        assert!(first < second);
        assert!(second < later);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!("not an id".parse::<Id>(), Err(ParseIdError::InvalidString));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize() {
        let id = Id::from_worker_parts(OffsetDateTime::from_unix_timestamp(42).unwrap(), 5, 7);
        let encoded = serde_json::to_string(&id).unwrap();
        assert_eq!(encoded, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<Id>(&encoded).unwrap(), id);
    }
}
