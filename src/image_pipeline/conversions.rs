//! Pipeline conversions module
//!
//! This module contains orchestration logic for raster to BMP conversion.

mod raster_to_bmp;

pub use raster_to_bmp::RasterToBmpPipeline;
