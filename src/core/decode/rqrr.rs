//! QR decoding backed by the rqrr crate.

use super::{BarcodeDecoder, BarcodeFormat, DecodedBarcode, Frame};
use crate::error::DecodeError;

/// Pure-Rust QR decoder.
///
/// Feeds the oriented grayscale frame to rqrr. Only QR codes are
/// recognized, so every result carries the `QR_CODE` format tag.
#[derive(Debug, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }
}

impl BarcodeDecoder for RqrrDecoder {
    fn decode(&self, frame: &Frame) -> Result<Vec<DecodedBarcode>, DecodeError> {
        let gray = frame.oriented();
        let (width, height) = (gray.width() as usize, gray.height() as usize);

        // prepare_from_greyscale keeps rqrr decoupled from our image types
        let mut prepared = ::rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| {
            gray.get_pixel(x as u32, y as u32)[0]
        });

        let grids = prepared.detect_grids();
        if grids.is_empty() {
            // No code in this frame - silently ignored upstream
            return Ok(Vec::new());
        }

        let mut barcodes = Vec::new();
        let mut last_failure = None;

        for grid in grids {
            match grid.decode() {
                Ok((_meta, content)) => barcodes.push(DecodedBarcode {
                    raw: content,
                    format: BarcodeFormat::QrCode,
                }),
                Err(e) => {
                    tracing::debug!("grid failed to decode: {e}");
                    last_failure = Some(e);
                }
            }
        }

        // A grid was detected but nothing could be read from it
        if barcodes.is_empty() {
            if let Some(e) = last_failure {
                return Err(DecodeError::Unreadable {
                    reason: e.to_string(),
                });
            }
        }

        Ok(barcodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode::Rotation;
    use image::GrayImage;

    #[test]
    fn blank_frame_detects_nothing() {
        let frame = Frame::new(GrayImage::from_pixel(64, 64, image::Luma([255])), Rotation::Deg0);
        let barcodes = RqrrDecoder::new().decode(&frame).unwrap();
        assert!(barcodes.is_empty());
    }

    #[test]
    fn noise_frame_does_not_panic() {
        // Deterministic pseudo-noise; the decoder may find nothing or fail
        // to read a false positive, but it must never panic
        let mut seed = 0x2545_f491u32;
        let pixels = GrayImage::from_fn(64, 64, |_, _| {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            image::Luma([(seed >> 24) as u8])
        });
        let frame = Frame::new(pixels, Rotation::Deg0);
        let _ = RqrrDecoder::new().decode(&frame);
    }
}
