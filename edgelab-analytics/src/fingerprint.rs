//! Journal fingerprints for caller-side memoization.
//!
//! Everything in this crate is pure, so a cache key only has to capture the
//! inputs: the trade list, and for trend views the window. The digest is a
//! BLAKE3 hash of the serialized list; any field edit or reorder produces a
//! different key.

use crate::trend::Window;
use edgelab_core::domain::Trade;

/// Hex BLAKE3 digest of the full trade list.
pub fn journal_fingerprint(trades: &[Trade]) -> String {
    let json = serde_json::to_string(trades).expect("trade list serializes to JSON");
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// Cache key for a windowed view: journal digest plus the window tag.
pub fn view_key(trades: &[Trade], window: Window) -> String {
    format!("{}:{}", journal_fingerprint(trades), window.tag())
}
