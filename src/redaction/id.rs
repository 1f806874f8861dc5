//! Deterministic redaction identifiers

use sha2::{Digest, Sha256};

/// Derive the content-addressed ID for a redaction region.
///
/// The ID is the first 12 hex characters of SHA-256 over a fixed-width
/// binary encoding: the page index as a 4-byte big-endian signed integer
/// followed by each bound as a 4-byte big-endian IEEE-754 float. Identical
/// (page, rect) inputs always yield the identical ID, which is what makes
/// audit-log correlation across runs possible.
///
/// Coordinates must be finite; non-finite input is a caller error.
pub fn redaction_id(page: i32, x0: f64, y0: f64, x1: f64, y1: f64) -> String {
    let mut data = [0u8; 20];
    data[0..4].copy_from_slice(&page.to_be_bytes());
    for (i, v) in [x0, y0, x1, y1].into_iter().enumerate() {
        data[4 + i * 4..8 + i * 4].copy_from_slice(&(v as f32).to_be_bytes());
    }
    let digest = Sha256::digest(data);
    hex::encode(digest)[..12].to_string()
}
