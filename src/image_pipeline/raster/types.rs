//! Raster buffer types
//!
//! Buffers are dense and row-major: `data[((y * width) + x) * channels + c]`.
//! The original triple-pointer layout is replaced by a single owned `Vec`
//! addressed with computed offsets.

/// Channel indices within an interleaved RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Channel {
    R = 0,
    G = 1,
    B = 2,
}

/// An RGB raster image with interleaved samples
#[derive(Debug, Clone)]
pub struct RgbImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved pixel data [R, G, B, R, G, B, ...]
    pub data: Vec<u32>,
    /// Bits used per sample (e.g. 8, 12, 16); samples lie in [0, 2^bits - 1]
    pub bits_per_sample: u32,
}

impl RgbImage {
    /// Create a zero-filled image.
    pub fn new(width: usize, height: usize, bits_per_sample: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
            bits_per_sample,
        }
    }

    pub fn expected_len(&self) -> usize {
        self.width * self.height * 3
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u32; 3] {
        let off = (y * self.width + x) * 3;
        [
            self.data[off + Channel::R as usize],
            self.data[off + Channel::G as usize],
            self.data[off + Channel::B as usize],
        ]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u32; 3]) {
        let off = (y * self.width + x) * 3;
        self.data[off + Channel::R as usize] = rgb[0];
        self.data[off + Channel::G as usize] = rgb[1];
        self.data[off + Channel::B as usize] = rgb[2];
    }
}

/// A single-channel (monochrome) raster image
#[derive(Debug, Clone)]
pub struct MonoImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// One intensity sample per pixel
    pub data: Vec<u32>,
    /// Bits used per sample
    pub bits_per_sample: u32,
}

impl MonoImage {
    /// Create a zero-filled image.
    pub fn new(width: usize, height: usize, bits_per_sample: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
            bits_per_sample,
        }
    }

    pub fn expected_len(&self) -> usize {
        self.width * self.height
    }

    pub fn sample(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.width + x]
    }

    pub fn set_sample(&mut self, x: usize, y: usize, value: u32) {
        self.data[y * self.width + x] = value;
    }
}
