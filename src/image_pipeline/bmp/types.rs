//! BMP conversion configuration types

/// Configuration for raster to BMP conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Upper bound on width and height when validation is enabled
    pub max_dimension: Option<usize>,
    /// Pixel density written to the info header, in pixels per meter
    /// (2835 corresponds to 72 DPI)
    pub resolution_ppm: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(50000),
            resolution_ppm: 2835,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    resolution_ppm: Option<u32>,
}

impl ConversionConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn resolution_ppm(mut self, ppm: u32) -> Self {
        self.resolution_ppm = Some(ppm);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            resolution_ppm: self.resolution_ppm.unwrap_or(default.resolution_ppm),
        }
    }
}
