//! PNG dimension extraction from the IHDR chunk.
//!
//! PNG layout: 8-byte signature, then the IHDR chunk as 4-byte length,
//! 4-byte type, and chunk data starting with big-endian width and height.
//! The offsets are fixed by the format, so the reader indexes them directly —
//! no chunk-type check, no CRC.

use super::{Dimensions, FormatError};

const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

/// Signature + length + type + the two dimension fields.
const MIN_HEADER_LEN: usize = 24;

/// Read width and height from a blob already classified as PNG.
pub fn read_dimensions(bytes: &[u8]) -> Result<Dimensions, FormatError> {
    if bytes.len() < MIN_HEADER_LEN {
        return Err(FormatError::TruncatedHeader {
            format: "PNG",
            len: bytes.len(),
        });
    }

    let width = u32::from_be_bytes([
        bytes[WIDTH_OFFSET],
        bytes[WIDTH_OFFSET + 1],
        bytes[WIDTH_OFFSET + 2],
        bytes[WIDTH_OFFSET + 3],
    ]);
    let height = u32::from_be_bytes([
        bytes[HEIGHT_OFFSET],
        bytes[HEIGHT_OFFSET + 1],
        bytes[HEIGHT_OFFSET + 2],
        bytes[HEIGHT_OFFSET + 3],
    ]);

    Ok(Dimensions { width, height })
}
