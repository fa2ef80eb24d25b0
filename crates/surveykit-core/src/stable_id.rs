//! Stable identifier derivation
//!
//! Demo-seeded entities are rebuilt from bundled JSON on every fresh
//! install, so their identifiers must be derived from the
//! human-readable keys in the template rather than generated at
//! random. Derivation is namespace-sensitive: the same room key in
//! two projects yields two distinct IDs.
//!
//! The 128-bit value comes from two salted 64-bit hash passes over
//! the namespaced key; the version nibble is forced to 5 and the
//! variant bits to RFC 4122 so the result is a syntactically valid
//! UUID. This is identity bookkeeping, not security: collision
//! resistance beyond "distinct keys stay distinct in practice" is
//! not required.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// A fresh random identifier for newly created entities.
pub fn new_random() -> Uuid {
    Uuid::new_v4()
}

/// Derives a stable identifier from a template key within a
/// namespace.
///
/// Keys that already parse as UUIDs pass through unchanged, so
/// templates may mix stable literal IDs with human-readable keys.
pub fn derive(key: &str, namespace: &str) -> Uuid {
    if let Ok(uuid) = Uuid::parse_str(key) {
        return uuid;
    }

    let namespaced = if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", namespace, key)
    };

    let high = salted_hash("A|", &namespaced);
    let low = salted_hash("B|", &namespaced);

    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&high.to_be_bytes());
    bytes[8..].copy_from_slice(&low.to_be_bytes());

    // Version 5 nibble, RFC 4122 variant
    bytes[6] = (bytes[6] & 0x0F) | 0x50;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    Uuid::from_bytes(bytes)
}

fn salted_hash(salt: &str, value: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    salt.hash(&mut hasher);
    value.hash(&mut hasher);
    hasher.finish()
}
