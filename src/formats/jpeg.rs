//! JPEG marker-segment scanning for frame dimensions.
//!
//! A JPEG stream is a sequence of marker segments: one or more 0xFF fill
//! bytes, a marker code, and (for most markers) a big-endian length that
//! counts itself plus the payload. The scanner walks segments forward until it
//! meets the baseline Start-Of-Frame marker (SOF0, 0xC0), whose payload
//! carries the pixel height and width right after a precision byte.
//!
//! Only SOF0 is recognized. Progressive and extended frames (0xC1–0xCF) are
//! skipped like any other segment, so their dimensions are never found and the
//! [`UNKNOWN_DIMENSIONS`] sentinel applies. That sentinel deliberately never
//! matches the thumbnail resolution, so a JPEG the scanner cannot measure is
//! always kept.

use super::Dimensions;

/// Returned when the scan ends without finding SOF0 — either an explicit EOI
/// or a truncated buffer. Never matches the thumbnail filter.
pub const UNKNOWN_DIMENSIONS: Dimensions = Dimensions {
    width: 9999,
    height: 9999,
};

const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOF0: u8 = 0xC0;
/// Reserved "temporary" marker, no length field.
const TEM: u8 = 0x01;

/// Scan a blob already classified as JPEG for its frame dimensions.
///
/// A single forward pass, no backtracking. Infallible: any buffer that runs
/// out mid-scan yields [`UNKNOWN_DIMENSIONS`].
pub fn read_dimensions(bytes: &[u8]) -> Dimensions {
    let mut pos = 0;

    while pos < bytes.len() {
        // Skip the 0xFF fill run preceding a marker code.
        while pos < bytes.len() && bytes[pos] == 0xFF {
            pos += 1;
        }
        let Some(&marker) = bytes.get(pos) else { break };
        pos += 1;

        match marker {
            // Bare markers without a length field.
            SOI | TEM | 0xD0..=0xD7 => continue,
            EOI => break,
            _ => {}
        }

        if pos + 2 > bytes.len() {
            break;
        }
        // Segment length counts its own two bytes.
        let seg_len = u16::from_be_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        pos += 2;

        if marker == SOF0 {
            // Frame header payload: precision byte, then 16-bit height and width.
            if pos + 5 > bytes.len() {
                break;
            }
            let height = u16::from_be_bytes([bytes[pos + 1], bytes[pos + 2]]);
            let width = u16::from_be_bytes([bytes[pos + 3], bytes[pos + 4]]);
            return Dimensions::new(width as u32, height as u32);
        }

        pos += seg_len.saturating_sub(2);
    }

    UNKNOWN_DIMENSIONS
}
