//! Session key generation.
//!
//! A key combines the low six decimal digits of the wall-clock millisecond
//! timestamp with a three-digit in-process counter into a single integer,
//! then encodes it as seven base-36 symbols over `A-Z0-9`, least significant
//! symbol first. Generation is O(1) and collision-resistant within one
//! process at realistic request rates. There is no uniqueness guarantee
//! across restarts or processes; the store checks for live collisions.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::SessionKey;

/// Length of every generated key.
pub const KEY_LENGTH: usize = 7;

const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TIMESTAMP_MODULUS: u64 = 1_000_000;
const COUNTER_MODULUS: u64 = 1_000;

/// Thread-safe generator of short session keys.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    counter: AtomicU64,
}

impl KeyGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Generate a key for the given wall-clock time in epoch milliseconds.
    pub fn generate(&self, now_ms: i64) -> SessionKey {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        encode(combine(now_ms, count))
    }
}

fn combine(now_ms: i64, count: u64) -> u64 {
    let timestamp = now_ms.unsigned_abs() % TIMESTAMP_MODULUS;
    timestamp * COUNTER_MODULUS + count % COUNTER_MODULUS
}

fn encode(mut combined: u64) -> SessionKey {
    let base = ALPHABET.len() as u64;
    let mut key = String::with_capacity(KEY_LENGTH);
    for _ in 0..KEY_LENGTH {
        key.push(char::from(ALPHABET[(combined % base) as usize]));
        combined /= base;
    }
    SessionKey::new(key)
}
