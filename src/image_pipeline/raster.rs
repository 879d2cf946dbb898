//! Raster buffer module
//!
//! This module provides the in-memory image buffer types the pipeline
//! operates on.

pub mod types;

pub use types::{Channel, MonoImage, RgbImage};
