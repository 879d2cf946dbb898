use raster_bmp_rs::image_pipeline::{ConversionConfig, RasterToBmpPipeline, RgbImage};
use raster_bmp_rs::logger;

use tracing::{error, info};

const WIDTH: usize = 256;
const HEIGHT: usize = 256;
const BITS_PER_SAMPLE: u32 = 12;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting raster_bmp...");

    // Generate a red gradient at 12 bits per channel.
    let max = (1u32 << BITS_PER_SAMPLE) - 1;
    let mut image = RgbImage::new(WIDTH, HEIGHT, BITS_PER_SAMPLE);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let red = (x as u32 * max) / (WIDTH as u32 - 1);
            image.set_pixel(x, y, [red, 0, 0]);
        }
    }

    let config = ConversionConfig::builder().validate_dimensions(true).build();
    let pipeline = RasterToBmpPipeline::new(config);

    info!("Raster to BMP pipeline initialized");
    info!(
        "Image: {}x{} at {} bits per channel",
        WIDTH, HEIGHT, BITS_PER_SAMPLE
    );

    match pipeline.convert_to_file(&mut image, "output.bmp") {
        Ok(_) => info!("Conversion successful!"),
        Err(e) => error!("Conversion failed: {}", e),
    }

    Ok(())
}
