//! End-to-end extraction runs over synthetic cache directories.

use nova_extract::extract::{self, Outcome, RunStats};
use nova_extract::formats::FormatTag;
use std::fs;
use tempfile::TempDir;

/// 26-byte PNG: full signature, IHDR length/type, 800*600, two extra bytes.
fn png_800x600() -> Vec<u8> {
    let mut buf = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    buf.extend_from_slice(&13u32.to_be_bytes());
    buf.extend_from_slice(b"IHDR");
    buf.extend_from_slice(&800u32.to_be_bytes());
    buf.extend_from_slice(&600u32.to_be_bytes());
    buf.extend_from_slice(&[0x08, 0x06]);
    buf
}

/// JPEG with a baseline frame header and trailing EOI.
fn jpeg_with_sof0(width: u16, height: u16) -> Vec<u8> {
    let mut buf = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x08, 0x08];
    buf.extend_from_slice(&height.to_be_bytes());
    buf.extend_from_slice(&width.to_be_bytes());
    buf.extend_from_slice(&[0xFF, 0xD9]);
    buf
}

#[test]
fn mixed_cache_directory() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let png = png_800x600();
    assert_eq!(png.len(), 26);
    fs::write(source.path().join("wallpaper"), &png).unwrap();
    fs::write(
        source.path().join("preview"),
        jpeg_with_sof0(480, 270),
    )
    .unwrap();
    let video: Vec<u8> = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
    fs::write(source.path().join("clip"), &video).unwrap();

    let result = extract::extract(source.path(), output.path()).unwrap();

    assert_eq!(
        result.stats,
        RunStats {
            processed: 2,
            images: 1,
            videos: 1,
            skipped: 1,
            failures: 0,
        }
    );

    // The PNG is written verbatim.
    assert_eq!(fs::read(output.path().join("wallpaper.png")).unwrap(), png);

    // The video loses its 2-byte cache prefix.
    let mp4 = fs::read(output.path().join("clip.mp4")).unwrap();
    assert_eq!(mp4, video[2..]);
    assert_eq!(mp4.len(), 8);

    // The thumbnail-sized JPEG is neither written nor counted as processed.
    assert!(!output.path().join("preview.jpg").exists());
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 2);
}

#[test]
fn large_jpeg_is_kept() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let jpeg = jpeg_with_sof0(3840, 2160);
    fs::write(source.path().join("photo"), &jpeg).unwrap();

    let result = extract::extract(source.path(), output.path()).unwrap();
    assert_eq!(result.stats.images, 1);
    assert_eq!(fs::read(output.path().join("photo.jpg")).unwrap(), jpeg);

    match &result.assets[0].outcome {
        Outcome::Written { format, dimensions } => {
            assert_eq!(*format, FormatTag::Jpeg);
            let dims = dimensions.expect("JPEG outcome carries dimensions");
            assert_eq!((dims.width, dims.height), (3840, 2160));
        }
        other => panic!("expected Written outcome, got {other:?}"),
    }
}

#[test]
fn off_by_one_dimensions_are_not_thumbnails() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(source.path().join("a"), jpeg_with_sof0(480, 271)).unwrap();
    fs::write(source.path().join("b"), jpeg_with_sof0(479, 270)).unwrap();

    let result = extract::extract(source.path(), output.path()).unwrap();
    assert_eq!(result.stats.processed, 2);
    assert_eq!(result.stats.images, 2);
    assert_eq!(result.stats.skipped, 0);
    assert!(output.path().join("a.jpg").exists());
    assert!(output.path().join("b.jpg").exists());
}

#[test]
fn malformed_blob_fails_without_stopping_the_run() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    // Under the 6-byte probe window.
    fs::write(source.path().join("00-stub"), [0x89, 0x50]).unwrap();
    fs::write(source.path().join("01-wallpaper"), png_800x600()).unwrap();

    let result = extract::extract(source.path(), output.path()).unwrap();
    assert_eq!(result.stats.failures, 1);
    assert_eq!(result.stats.images, 1);
    assert!(matches!(
        result.assets[0].outcome,
        Outcome::Failed { .. }
    ));
    assert!(!output.path().join("00-stub.png").exists());
    assert!(output.path().join("01-wallpaper.png").exists());
}

#[test]
fn report_serializes_outcomes_and_stats() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(source.path().join("wallpaper"), png_800x600()).unwrap();

    let result = extract::extract(source.path(), output.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string(&result).unwrap(),
    )
    .unwrap();

    assert_eq!(json["stats"]["images"], 1);
    assert_eq!(json["assets"][0]["name"], "wallpaper");
    assert_eq!(json["assets"][0]["result"], "written");
    assert_eq!(json["assets"][0]["format"], "png");
    assert_eq!(json["assets"][0]["dimensions"]["width"], 800);
}
