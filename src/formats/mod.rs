//! Byte-level format identification for cache blobs.
//!
//! N0vaDesktop stores every cached asset as an extension-less blob, so the
//! only reliable way to tell a wallpaper from a live wallpaper is to look at
//! the bytes. This module provides the three probes the extractor needs:
//!
//! - [`classify`] — signature check over the leading (and, for JPEG, trailing)
//!   bytes of a blob.
//! - [`png::read_dimensions`] — width/height from the IHDR chunk at fixed
//!   offsets.
//! - [`jpeg::read_dimensions`] — a marker-segment walk that finds the baseline
//!   frame header.
//!
//! None of this is format validation. There are no CRC checks and no
//! exhaustive chunk parsing; the probes read exactly the bytes they need and
//! trust the rest. Corrupt blobs surface as a [`FormatError`] (or, for JPEG
//! dimension scans, as the [`jpeg::UNKNOWN_DIMENSIONS`] sentinel) and are
//! handled per-asset by the extraction pipeline.

pub mod jpeg;
pub mod png;
mod sniff;

pub use sniff::classify;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("buffer too short to probe ({0} bytes)")]
    MalformedInput(usize),
    #[error("no known signature matched")]
    UnsupportedFormat,
    #[error("{format} header truncated at {len} bytes")]
    TruncatedHeader { format: &'static str, len: usize },
}

/// What a blob's bytes say it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatTag {
    Png,
    Jpeg,
    /// Headerless video container with a 2-byte prefix, emitted as `.mp4`.
    RawVideo,
}

impl FormatTag {
    /// Output file extension for blobs of this format.
    pub fn extension(self) -> &'static str {
        match self {
            FormatTag::Png => "png",
            FormatTag::Jpeg => "jpg",
            FormatTag::RawVideo => "mp4",
        }
    }

    /// Short uppercase label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            FormatTag::Png => "PNG",
            FormatTag::Jpeg => "JPG",
            FormatTag::RawVideo => "MP4",
        }
    }
}

/// Pixel dimensions of an image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.width, self.height)
    }
}
