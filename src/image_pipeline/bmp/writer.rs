use std::io::Write;

use crate::image_pipeline::bmp::types::ConversionConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::{MonoImage, RgbImage};

pub trait BmpWriter {
    fn write_rgb_bmp(
        &self,
        image: &RgbImage,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;

    fn write_mono_bmp(
        &self,
        image: &MonoImage,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
