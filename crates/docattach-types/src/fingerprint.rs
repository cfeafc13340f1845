use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Width of a fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 16;

const DOMAIN: &str = "docattach-embedded-file-v1";

/// Content fingerprint for an embedded file payload.
///
/// A `Fingerprint` is a 128-bit BLAKE3 extendable output computed over a
/// fixed domain tag followed by the exact payload bytes. Identical payloads
/// always produce the same fingerprint, which makes it usable as the key for
/// deduplicating stored content within a document session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Compute the fingerprint of a payload.
    pub fn of(data: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        let mut out = [0u8; FINGERPRINT_LEN];
        hasher.finalize_xof().fill(&mut out);
        Self(out)
    }

    /// The raw 16-byte digest.
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != FINGERPRINT_LEN {
            return Err(TypeError::InvalidLength {
                expected: FINGERPRINT_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; FINGERPRINT_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Returns `true` if `data` hashes to this fingerprint.
    pub fn matches(&self, data: &[u8]) -> bool {
        Self::of(data) == *self
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
