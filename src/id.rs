//! ID generation utilities for projboard
//!
//! Entry ids are opaque strings. Uniqueness within a store comes from the
//! store's sequence number; the timestamp and random suffix keep ids from
//! different boards apart.

use rand::Rng;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Generate an entry ID for the `seq`-th entry of a store
///
/// Format: `{timestamp_ms}-{seq}-{random_hex}`
/// Example: `1738300800123-0-a1b2`
pub fn generate_entry_id(seq: u64) -> String {
    let timestamp = now_ms();
    let random: u16 = rand::rng().random();
    format!("{}-{}-{:04x}", timestamp, seq, random)
}
