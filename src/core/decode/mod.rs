//! # Decode Module
//!
//! Frames, the barcode decoder seam, and file discovery.
//!
//! The decoder is a trait so the scan session can be driven by anything
//! that produces barcodes from a frame - the bundled [`RqrrDecoder`] for
//! real images, or a scripted decoder in tests.
//!
//! ## Supported Image Formats
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//! - WebP (.webp)
//! - GIF (.gif)
//! - BMP (.bmp)
//! - TIFF (.tiff, .tif)

mod files;
mod rqrr;

pub use files::{expand_paths, is_supported_image, PathExpansion};
pub use self::rqrr::RqrrDecoder;

use crate::error::DecodeError;
use image::GrayImage;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rotation metadata attached to a frame, in degrees clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a degree value to a rotation; anything unaligned is treated as 0
    pub fn from_degrees(degrees: u32) -> Self {
        match degrees % 360 {
            90 => Rotation::Deg90,
            180 => Rotation::Deg180,
            270 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }
}

/// One grayscale image frame handed to the decoder.
///
/// The frame owns its pixel buffer; whoever consumes it drops it when
/// decoding completes, so the buffer is released exactly once whether the
/// decode succeeds, fails, or finds nothing.
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: GrayImage,
    rotation: Rotation,
}

impl Frame {
    /// Wrap a grayscale buffer with rotation metadata
    pub fn new(pixels: GrayImage, rotation: Rotation) -> Self {
        Self { pixels, rotation }
    }

    /// Load a frame from an image file
    pub fn from_path(path: &Path) -> Result<Self, DecodeError> {
        if !path.exists() {
            return Err(DecodeError::ImageNotFound {
                path: path.to_path_buf(),
            });
        }

        let img = image::open(path).map_err(|e| DecodeError::ImageDecode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pixels: img.to_luma8(),
            rotation: Rotation::Deg0,
        })
    }

    /// The frame's rotation metadata
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Width of the raw (unrotated) buffer
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height of the raw (unrotated) buffer
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The pixel buffer with rotation metadata applied
    pub fn oriented(&self) -> GrayImage {
        match self.rotation {
            Rotation::Deg0 => self.pixels.clone(),
            Rotation::Deg90 => image::imageops::rotate90(&self.pixels),
            Rotation::Deg180 => image::imageops::rotate180(&self.pixels),
            Rotation::Deg270 => image::imageops::rotate270(&self.pixels),
        }
    }
}

/// Barcode symbology tags, using the wire names handed across the
/// navigation boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeFormat {
    QrCode,
    DataMatrix,
    Pdf417,
    Aztec,
    Unknown,
}

impl BarcodeFormat {
    /// The wire name for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::QrCode => "QR_CODE",
            BarcodeFormat::DataMatrix => "DATA_MATRIX",
            BarcodeFormat::Pdf417 => "PDF417",
            BarcodeFormat::Aztec => "AZTEC",
            BarcodeFormat::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire name; unrecognized names map to Unknown
    pub fn from_name(name: &str) -> Self {
        match name {
            "QR_CODE" => BarcodeFormat::QrCode,
            "DATA_MATRIX" => BarcodeFormat::DataMatrix,
            "PDF417" => BarcodeFormat::Pdf417,
            "AZTEC" => BarcodeFormat::Aztec,
            _ => BarcodeFormat::Unknown,
        }
    }
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded barcode: the raw payload text and its format tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBarcode {
    /// Raw text recovered from the code; may be empty
    pub raw: String,
    /// Symbology the code was encoded with
    pub format: BarcodeFormat,
}

/// Trait for barcode decoders
///
/// Implement this trait to plug in a different decoding backend
/// (e.g., for testing).
///
/// A decoder examines one frame and returns every barcode it found.
/// Returning an empty vector means no code was detected - that is not an
/// error. `Err` means a code-like region was found but could not be read.
pub trait BarcodeDecoder: Send {
    /// Decode all barcodes in one frame
    fn decode(&self, frame: &Frame) -> Result<Vec<DecodedBarcode>, DecodeError>;
}
