//! Integration tests for scanning real image files.
//!
//! These exercise the rqrr-backed decoder against generated fixtures:
//! - Images with no code in them
//! - Corrupt files
//! - Nonexistent paths

use image::GrayImage;
use qr_code_reader::core::decode::{expand_paths, Frame, RqrrDecoder};
use qr_code_reader::core::session::{ScanSession, SessionConfig};
use qr_code_reader::error::DecodeError;
use qr_code_reader::events::null_sender;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_blank_png(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    GrayImage::from_pixel(64, 64, image::Luma([255]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn blank_images_produce_no_hits() {
    let temp = TempDir::new().unwrap();
    let a = write_blank_png(&temp, "a.png");
    let b = write_blank_png(&temp, "b.png");

    let (session, hits) = ScanSession::spawn(
        Box::new(RqrrDecoder::new()),
        SessionConfig::batch(),
        null_sender(),
    );

    for path in [&a, &b] {
        session.send(Frame::from_path(path).unwrap()).unwrap();
    }
    let handled = session.close();

    assert_eq!(handled, 2);
    assert_eq!(hits.iter().count(), 0);
}

#[test]
fn corrupt_image_fails_to_load_not_panic() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("corrupt.png");
    let mut file = File::create(&path).unwrap();
    file.write_all(b"this is not a valid image file").unwrap();
    drop(file);

    let err = Frame::from_path(&path).unwrap_err();
    assert!(matches!(err, DecodeError::ImageDecode { .. }));
    assert!(err.to_string().contains("corrupt.png"));
}

#[test]
fn nonexistent_path_is_a_recorded_error() {
    let expansion = expand_paths(&[PathBuf::from("/nonexistent/scans")]);
    assert!(expansion.images.is_empty());
    assert!(matches!(
        expansion.errors.first(),
        Some(DecodeError::ImageNotFound { .. })
    ));
}

#[test]
fn directory_scan_finds_only_images() {
    let temp = TempDir::new().unwrap();
    write_blank_png(&temp, "scan.png");
    File::create(temp.path().join("notes.txt")).unwrap();

    let expansion = expand_paths(&[temp.path().to_path_buf()]);
    assert_eq!(expansion.images.len(), 1);

    // The discovered image loads and decodes cleanly to nothing
    let (session, hits) = ScanSession::spawn(
        Box::new(RqrrDecoder::new()),
        SessionConfig::batch(),
        null_sender(),
    );
    session
        .send(Frame::from_path(&expansion.images[0]).unwrap())
        .unwrap();
    session.close();
    assert_eq!(hits.iter().count(), 0);
}
