//! Per-asset extraction pipeline.
//!
//! Walks the cache directory one blob at a time: classify the bytes, read
//! image dimensions where the format has them, drop thumbnail-sized
//! placeholder duplicates, and write everything that survives to the output
//! directory with the correct extension.
//!
//! ```text
//! cache blob ──> classify ──┬─ PNG/JPEG ─> dimensions ─┬─ 480*270 ─> skipped
//!                           │                          └─ else ────> <name>.png / <name>.jpg
//!                           ├─ raw video ─────────────────────────> <name>.mp4 (2-byte prefix stripped)
//!                           └─ error ────────────────────────────> failed
//! ```
//!
//! Every asset yields exactly one [`Outcome`]. Errors — unclassifiable bytes,
//! truncated headers, I/O faults — are recovered at the asset boundary and
//! recorded as [`Outcome::Failed`]; they never abort the run. Processing is
//! strictly sequential in enumeration order; the only shared state is the
//! [`RunStats`] counters owned by the run itself.

use crate::formats::{self, Dimensions, FormatError, FormatTag};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Resolution of the placeholder previews the cache stores next to full
/// assets. Anything matching it exactly is a duplicate worth dropping.
pub const THUMBNAIL_SIZE: Dimensions = Dimensions {
    width: 480,
    height: 270,
};

/// True iff the dimensions match the known placeholder resolution exactly.
pub fn is_thumbnail(dims: Dimensions) -> bool {
    dims == THUMBNAIL_SIZE
}

/// The cache prepends this many bytes to video blobs before the container data.
const VIDEO_PREFIX_LEN: usize = 2;

/// What happened to a single asset.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Written {
        format: FormatTag,
        #[serde(skip_serializing_if = "Option::is_none")]
        dimensions: Option<Dimensions>,
    },
    SkippedThumbnail {
        format: FormatTag,
        dimensions: Dimensions,
    },
    Failed {
        reason: String,
    },
}

/// One asset's identity plus its outcome, in enumeration order.
#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Run-wide counters.
///
/// `processed`, `images`, `videos` and `failures` follow the original tool's
/// accounting: skipped thumbnails increment none of them and are tracked
/// separately for the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub processed: usize,
    pub images: usize,
    pub videos: usize,
    pub skipped: usize,
    pub failures: usize,
}

/// Result of a full extraction or check run.
#[derive(Debug, Serialize)]
pub struct ExtractResult {
    pub assets: Vec<AssetReport>,
    pub stats: RunStats,
}

/// Extract every blob in `source` into `output`.
///
/// The output directory is deleted and recreated before processing begins.
pub fn extract(source: &Path, output: &Path) -> Result<ExtractResult, ExtractError> {
    reset_output_dir(output)?;
    run(source, Some(output))
}

/// Classification dry run: same pipeline, nothing written.
pub fn check(source: &Path) -> Result<ExtractResult, ExtractError> {
    run(source, None)
}

fn run(source: &Path, output: Option<&Path>) -> Result<ExtractResult, ExtractError> {
    let mut assets = Vec::new();
    let mut stats = RunStats::default();

    let walker = WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // An unreadable entry is a per-asset failure, not a fatal one.
                stats.failures += 1;
                assets.push(AssetReport {
                    name: err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| source.display().to_string()),
                    outcome: Outcome::Failed {
                        reason: err.to_string(),
                    },
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        // Cache blobs carry no extension, but strip one if present anyway.
        let stem = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.file_name().to_string_lossy().into_owned());

        let outcome = process_asset(entry.path(), &stem, output);
        match &outcome {
            Outcome::Written {
                format: FormatTag::RawVideo,
                ..
            } => {
                stats.processed += 1;
                stats.videos += 1;
            }
            Outcome::Written { .. } => {
                stats.processed += 1;
                stats.images += 1;
            }
            Outcome::SkippedThumbnail { .. } => stats.skipped += 1,
            Outcome::Failed { .. } => stats.failures += 1,
        }
        assets.push(AssetReport {
            name: stem,
            outcome,
        });
    }

    Ok(ExtractResult { assets, stats })
}

/// Process one blob, converting any error into a `Failed` outcome.
fn process_asset(path: &Path, stem: &str, output: Option<&Path>) -> Outcome {
    match try_process(path, stem, output) {
        Ok(outcome) => outcome,
        Err(err) => Outcome::Failed {
            reason: err.to_string(),
        },
    }
}

fn try_process(path: &Path, stem: &str, output: Option<&Path>) -> Result<Outcome, ExtractError> {
    let bytes = fs::read(path)?;
    let format = formats::classify(&bytes)?;

    match format {
        FormatTag::Png | FormatTag::Jpeg => {
            let dims = match format {
                FormatTag::Png => formats::png::read_dimensions(&bytes)?,
                _ => formats::jpeg::read_dimensions(&bytes),
            };
            if is_thumbnail(dims) {
                return Ok(Outcome::SkippedThumbnail {
                    format,
                    dimensions: dims,
                });
            }
            if let Some(out) = output {
                fs::write(out.join(format!("{stem}.{}", format.extension())), &bytes)?;
            }
            Ok(Outcome::Written {
                format,
                dimensions: Some(dims),
            })
        }
        FormatTag::RawVideo => {
            if let Some(out) = output {
                // Valid container data starts behind the fixed 2-byte prefix.
                fs::write(
                    out.join(format!("{stem}.{}", format.extension())),
                    &bytes[VIDEO_PREFIX_LEN..],
                )?;
            }
            Ok(Outcome::Written {
                format,
                dimensions: None,
            })
        }
    }
}

fn reset_output_dir(output: &Path) -> Result<(), ExtractError> {
    if output.exists() {
        fs::remove_dir_all(output)?;
    }
    fs::create_dir_all(output)?;
    Ok(())
}
