//! BMP writing module
//!
//! This module serializes 8-bit-per-channel raster images as uncompressed
//! 24-bit Windows bitmaps.

mod standard_bmp_writer;
pub mod types;
mod writer;

pub use standard_bmp_writer::StandardBmpWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder};
pub use writer::BmpWriter;
