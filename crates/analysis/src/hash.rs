//! Content fingerprinting.
//!
//! A fingerprint is the lowercase hex SHA-256 digest of the exact input bytes:
//!
//! ```text
//! SHA-256(document_bytes) -> 64 hex chars
//! ```
//!
//! No normalization happens before hashing. Two documents that differ only in
//! encoding, line endings or trailing whitespace get different fingerprints.
//!
//! # Examples
//!
//! ```rust
//! use analysis::fingerprint;
//!
//! let fp = fingerprint(b"hello world");
//! assert_eq!(fp.len(), 64);
//! assert_eq!(fp, fingerprint(b"hello world"));
//! assert_ne!(fp, fingerprint(b"hello world\n"));
//! ```

use sha2::{Digest, Sha256};

/// Compute the content fingerprint of a byte sequence.
///
/// Accepts any input, including the empty slice.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
