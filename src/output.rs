//! CLI output formatting.
//!
//! Each command has `format_*` functions (pure, return strings — testable
//! without capturing stdout) and a `print_*` wrapper that writes the lines
//! out. The extract vocabulary mirrors the upstream tool's log lines:
//!
//! ```text
//! Processed 15a2b as PNG (3840*2160).
//! [JPG] Skipped 22c01 by thumbnail.
//! Processed 30d44 as MP4.
//! Failed to process 4e9f0: no known signature matched.
//! Processed 2 files: 1 images, 1 videos.
//! ```

use crate::extract::{AssetReport, ExtractResult, Outcome, RunStats};

/// One log line per asset, in processing order.
pub fn format_asset_line(report: &AssetReport) -> String {
    match &report.outcome {
        Outcome::Written {
            format,
            dimensions: Some(dims),
        } => format!("Processed {} as {} ({dims}).", report.name, format.label()),
        Outcome::Written {
            format,
            dimensions: None,
        } => format!("Processed {} as {}.", report.name, format.label()),
        Outcome::SkippedThumbnail { format, .. } => {
            format!("[{}] Skipped {} by thumbnail.", format.label(), report.name)
        }
        Outcome::Failed { reason } => {
            format!("Failed to process {}: {reason}.", report.name)
        }
    }
}

/// Final summary: the original's one-liner plus skip/failure counts when
/// they are non-zero.
pub fn format_summary(stats: &RunStats) -> Vec<String> {
    let mut lines = vec![format!(
        "Processed {} files: {} images, {} videos.",
        stats.processed, stats.images, stats.videos
    )];
    if stats.skipped > 0 {
        lines.push(format!("Skipped {} thumbnail previews.", stats.skipped));
    }
    if stats.failures > 0 {
        lines.push(format!("{} files could not be processed.", stats.failures));
    }
    lines
}

/// Per-asset line for the `check` dry run: classification findings only.
pub fn format_check_line(report: &AssetReport) -> String {
    match &report.outcome {
        Outcome::Written {
            format,
            dimensions: Some(dims),
        } => format!("{}: {} ({dims})", report.name, format.label()),
        Outcome::Written {
            format,
            dimensions: None,
        } => format!("{}: {}", report.name, format.label()),
        Outcome::SkippedThumbnail { format, dimensions } => format!(
            "{}: {} thumbnail preview ({dimensions}), would skip",
            report.name,
            format.label()
        ),
        Outcome::Failed { reason } => format!("{}: unrecognized ({reason})", report.name),
    }
}

pub fn print_extract_output(result: &ExtractResult) {
    for asset in &result.assets {
        println!("{}", format_asset_line(asset));
    }
    for line in format_summary(&result.stats) {
        println!("{line}");
    }
}

pub fn print_check_output(result: &ExtractResult) {
    for asset in &result.assets {
        println!("{}", format_check_line(asset));
    }
    for line in format_summary(&result.stats) {
        println!("{line}");
    }
}
