//! Bit-depth conversion module
//!
//! This module rescales raster samples from arbitrary source depths to the
//! fixed 8-bit output range.

pub mod converter;

pub use converter::BitDepthConverter;
