//! Image processing pipeline module
//!
//! This module provides a structured approach to raster image export,
//! with separate modules for buffer types, bit-depth conversion, BMP
//! writing, and conversion orchestration.

pub mod bmp;
pub mod common;
pub mod conversions;
pub mod depth;
pub mod raster;

pub use common::{ConversionError, Result};

pub use raster::{Channel, MonoImage, RgbImage};

pub use depth::BitDepthConverter;

pub use bmp::{BmpWriter, ConversionConfig, ConversionConfigBuilder, StandardBmpWriter};

pub use conversions::RasterToBmpPipeline;
