//! # qr-read CLI
//!
//! Command-line interface for the QR code reader.
//!
//! ## Usage
//! ```bash
//! qr-read scan photo.png --launch
//! qr-read scan ~/Screenshots --output json
//! qr-read classify "https://example.com"
//! ```

mod cli;

use qr_code_reader::Result;

fn main() -> Result<()> {
    cli::run()
}
