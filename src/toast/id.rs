// SPDX-License-Identifier: MPL-2.0
//! Unique identifiers for toast entries.
//!
//! With the `uuid` feature (default) ids are random UUID v4 strings. Without
//! it, ids are built from the wall-clock time, a random component and a
//! process-wide sequence number, prefixed with `toast-`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of ids produced by the fallback generator.
pub const FALLBACK_PREFIX: &str = "toast-";

const RANDOM_LEN: usize = 8;

/// Unique identifier for a toast entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new unique id from the strongest available source.
    #[must_use]
    pub fn generate() -> Self {
        strong_id().unwrap_or_else(Self::fallback)
    }

    /// Creates an id from time, randomness and a sequence number.
    #[must_use]
    pub fn fallback() -> Self {
        static SEQUENCE: AtomicU64 = AtomicU64::new(0);

        let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "{FALLBACK_PREFIX}{}-{}{}",
            to_base36(millis),
            random_base36(RANDOM_LEN),
            to_base36(sequence)
        ))
    }

    /// Wraps an existing id string, e.g. one received back from a renderer.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of toast ids for a stack.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> ToastId;
}

/// Generator backed by [`ToastId::generate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ToastId {
        ToastId::generate()
    }
}

/// Predictable ids (`<prefix>1`, `<prefix>2`, ...) for hosts that need
/// reproducible output, such as snapshot tests.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ToastId {
        let id = ToastId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(feature = "uuid")]
fn strong_id() -> Option<ToastId> {
    Some(ToastId(uuid::Uuid::new_v4().to_string()))
}

#[cfg(not(feature = "uuid"))]
fn strong_id() -> Option<ToastId> {
    None
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        // value % 36 < 36 so from_digit always succeeds
        digits.push(char::from_digit((value % 36) as u32, 36).unwrap_or('0'));
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn random_base36(len: usize) -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from_digit(rng.gen_range(0..36), 36).unwrap_or('0'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<ToastId> = (0..1000).map(|_| ToastId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn fallback_ids_are_unique_within_the_same_millisecond() {
        let ids: HashSet<ToastId> = (0..1000).map(|_| ToastId::fallback()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn fallback_ids_carry_prefix_and_time_component() {
        let id = ToastId::fallback();
        let rest = id.as_str().strip_prefix(FALLBACK_PREFIX).expect("prefix");
        let (time, random) = rest.split_once('-').expect("separator");

        assert!(!time.is_empty());
        assert!(random.len() > RANDOM_LEN);
        assert!(random.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn strong_ids_are_uuids() {
        let id = ToastId::generate();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn sequential_ids_count_up_from_one() {
        let mut ids = SequentialIds::new("t");
        assert_eq!(ids.next_id().as_str(), "t1");
        assert_eq!(ids.next_id().as_str(), "t2");
    }

    #[test]
    fn raw_ids_round_trip_through_display() {
        let id = ToastId::from_raw("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_ref(), "abc");
    }
}
