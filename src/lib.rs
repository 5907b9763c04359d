//! # nova-extract
//!
//! Recovers wallpapers and live wallpapers from the N0vaDesktop media cache.
//! The cache stores every downloaded asset as an extension-less blob, so the
//! tool classifies each blob by its byte content, drops the 480*270
//! placeholder previews the app keeps next to full assets, and re-emits
//! everything else with its real extension.
//!
//! # Pipeline
//!
//! ```text
//! N0vaDesktopCache/game/*  →  classify  →  measure  →  filter  →  n0va_output/*.{png,jpg,mp4}
//! ```
//!
//! One pass, one blob at a time, in enumeration order. Every blob produces
//! exactly one outcome (written, skipped as thumbnail, or failed), and
//! failures are contained to the blob that caused them — a corrupt entry is
//! logged and counted, never fatal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`formats`] | Byte-level classification and dimension probes (PNG IHDR reader, JPEG segment scanner) |
//! | [`extract`] | Per-asset pipeline: classify → measure → filter → emit, plus run statistics |
//! | [`locate`] | Cache-directory discovery (explicit path, env override, conventional install roots) |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Signatures, not decoders
//!
//! Dimensions come from fixed-offset reads (PNG) and a minimal marker walk
//! (JPEG), not from a decoding library. The only question the pipeline asks
//! is "is this the 480*270 preview?", and answering it takes a dozen bytes of
//! each blob. Full-format validation is a non-goal: there are no CRC checks
//! and corrupt blobs are reported and skipped, not repaired.
//!
//! ## Parity with the cache's quirks
//!
//! Two behaviors are inherited from the cache format on purpose. Video blobs
//! have no magic number — they are recognized by a zero byte among the first
//! six, a loose heuristic that works because the container data sits shifted
//! behind a 2-byte prefix. And a JPEG whose frame header cannot be found is
//! given sentinel dimensions of 9999*9999, which never match the thumbnail
//! filter, so an unparseable JPEG is always kept rather than silently lost.

pub mod extract;
pub mod formats;
pub mod locate;
pub mod output;
