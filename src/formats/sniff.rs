//! Signature-based classification of cache blobs.
//!
//! Rules are evaluated in order, first match wins:
//!
//! 1. PNG — the four-byte `\x89PNG` prefix.
//! 2. JPEG — SOI marker at the start *and* EOI marker as the final two bytes.
//! 3. Raw video — any zero byte among the first six.
//! 4. Anything else is unsupported.
//!
//! The raw-video rule is not a magic-number check. The cache's video blobs
//! are headerless (the real container data sits behind a 2-byte prefix), and
//! the leading null bytes of that shifted data are the only tell. The rule
//! matches almost any binary blob with an early zero byte; that permissiveness
//! is deliberate and must be preserved.

use super::{FormatError, FormatTag};

pub const PNG_SIGNATURE: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Every probe reads within bytes 0..6 or the final two bytes.
pub const MIN_PROBE_LEN: usize = 6;

/// Determine a blob's format from its bytes.
///
/// Fails with [`FormatError::MalformedInput`] for buffers shorter than
/// [`MIN_PROBE_LEN`] and [`FormatError::UnsupportedFormat`] when no rule
/// matches.
pub fn classify(bytes: &[u8]) -> Result<FormatTag, FormatError> {
    if bytes.len() < MIN_PROBE_LEN {
        return Err(FormatError::MalformedInput(bytes.len()));
    }

    if bytes[..4] == PNG_SIGNATURE {
        return Ok(FormatTag::Png);
    }

    if bytes[..2] == JPEG_SOI && bytes[bytes.len() - 2..] == JPEG_EOI {
        return Ok(FormatTag::Jpeg);
    }

    if bytes[..MIN_PROBE_LEN].contains(&0x00) {
        return Ok(FormatTag::RawVideo);
    }

    Err(FormatError::UnsupportedFormat)
}
