use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::image_pipeline::{
    bmp::{BmpWriter, ConversionConfig, StandardBmpWriter},
    common::error::{ConversionError, Result},
    depth::BitDepthConverter,
    raster::{MonoImage, RgbImage},
};

pub struct RasterToBmpPipeline<W: BmpWriter> {
    converter: BitDepthConverter,
    writer: W,
    config: ConversionConfig,
}

impl RasterToBmpPipeline<StandardBmpWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            converter: BitDepthConverter::new(),
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<W: BmpWriter> RasterToBmpPipeline<W> {
    pub fn with_custom(writer: W, config: ConversionConfig) -> Self {
        Self {
            converter: BitDepthConverter::new(),
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Convert an RGB raster to 8 bits per channel and write it as BMP.
    ///
    /// The conversion mutates `image` in place; after a successful call its
    /// `bits_per_sample` is 8.
    #[instrument(skip(self, image, output), fields(width = image.width, height = image.height))]
    pub fn convert(&self, image: &mut RgbImage, output: &mut dyn Write) -> Result<()> {
        info!("Starting raster to BMP conversion");

        self.validate_dimensions(image.width, image.height)?;

        {
            let _span = tracing::info_span!("convert_bit_depth",
                bits_per_sample = image.bits_per_sample
            )
            .entered();
            self.converter.convert_rgb(image)?;
        }

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_rgb_bmp(image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Convert a monochrome raster and write it as a grayscale BMP.
    #[instrument(skip(self, image, output), fields(width = image.width, height = image.height))]
    pub fn convert_mono(&self, image: &mut MonoImage, output: &mut dyn Write) -> Result<()> {
        info!("Starting mono raster to BMP conversion");

        self.validate_dimensions(image.width, image.height)?;

        {
            let _span = tracing::info_span!("convert_bit_depth",
                bits_per_sample = image.bits_per_sample
            )
            .entered();
            self.converter.convert_mono(image)?;
        }

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_mono_bmp(image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, image, output_path))]
    pub fn convert_to_file<P: AsRef<Path>>(
        &self,
        image: &mut RgbImage,
        output_path: P,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Converting raster to file");

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(image, &mut output_file)?;

        Ok(())
    }

    #[instrument(skip(self, image, output_path))]
    pub fn convert_mono_to_file<P: AsRef<Path>>(
        &self,
        image: &mut MonoImage,
        output_path: P,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Converting mono raster to file");

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert_mono(image, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
