use std::io::Write;

use tracing::debug;

use crate::image_pipeline::bmp::types::ConversionConfig;
use crate::image_pipeline::bmp::writer::BmpWriter;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{Channel, MonoImage, RgbImage};

/// Size of the file header plus the BITMAPINFOHEADER.
const HEADER_SIZE: usize = 54;
/// Bits per pixel of the output: three 8-bit channels.
const BIT_COUNT: u16 = 24;

/// Writes uncompressed 24-bit BMP files with top-down row order.
///
/// Samples are narrowed with `as u8`; values above 255 wrap. Callers are
/// expected to have converted the image to 8 bits per channel first.
pub struct StandardBmpWriter;

impl BmpWriter for StandardBmpWriter {
    fn write_rgb_bmp(
        &self,
        image: &RgbImage,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width, image.height);

        check_len(image.expected_len(), image.data.len())?;
        let layout = RowLayout::new(image.width, image.height)?;

        let mut buffer = Vec::with_capacity(layout.file_size);
        write_headers(&mut buffer, &layout, image.width, image.height, config)?;

        for y in 0..image.height {
            let row = &image.data[y * image.width * 3..(y + 1) * image.width * 3];
            for pixel in row.chunks_exact(3) {
                buffer.push(pixel[Channel::B as usize] as u8);
                buffer.push(pixel[Channel::G as usize] as u8);
                buffer.push(pixel[Channel::R as usize] as u8);
            }
            buffer.extend(std::iter::repeat_n(0u8, layout.padding));
        }

        output.write_all(&buffer)?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }

    fn write_mono_bmp(
        &self,
        image: &MonoImage,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding mono BMP image: {}x{}", image.width, image.height);

        check_len(image.expected_len(), image.data.len())?;
        let layout = RowLayout::new(image.width, image.height)?;

        let mut buffer = Vec::with_capacity(layout.file_size);
        write_headers(&mut buffer, &layout, image.width, image.height, config)?;

        for y in 0..image.height {
            let row = &image.data[y * image.width..(y + 1) * image.width];
            for &sample in row {
                // Gray expands to an identical triple in all three channels.
                let g = sample as u8;
                buffer.push(g);
                buffer.push(g);
                buffer.push(g);
            }
            buffer.extend(std::iter::repeat_n(0u8, layout.padding));
        }

        output.write_all(&buffer)?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

/// Derived byte layout of the pixel data section.
struct RowLayout {
    padding: usize,
    data_size: usize,
    file_size: usize,
}

impl RowLayout {
    fn new(width: usize, height: usize) -> Result<Self> {
        // Rows are padded to a multiple of 4 bytes.
        let color_bytes = width
            .checked_mul(3)
            .ok_or_else(|| oversize_error(width, height))?;
        let padding = (4 - color_bytes % 4) % 4;
        let row_size = color_bytes + padding;
        let data_size = row_size
            .checked_mul(height)
            .ok_or_else(|| oversize_error(width, height))?;
        let file_size = data_size
            .checked_add(HEADER_SIZE)
            .ok_or_else(|| oversize_error(width, height))?;
        if u32::try_from(file_size).is_err() {
            return Err(oversize_error(width, height));
        }
        Ok(Self {
            padding,
            data_size,
            file_size,
        })
    }
}

fn write_headers(
    buffer: &mut Vec<u8>,
    layout: &RowLayout,
    width: usize,
    height: usize,
    config: &ConversionConfig,
) -> Result<()> {
    let width_i32 = i32::try_from(width).map_err(|_| oversize_error(width, height))?;
    let height_i32 = i32::try_from(height).map_err(|_| oversize_error(width, height))?;

    // File header (14 bytes)
    buffer.extend_from_slice(b"BM");
    buffer.extend_from_slice(&(layout.file_size as u32).to_le_bytes());
    buffer.extend_from_slice(&0u16.to_le_bytes()); // reserved
    buffer.extend_from_slice(&0u16.to_le_bytes()); // reserved
    buffer.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // pixel data offset

    // BITMAPINFOHEADER (40 bytes)
    buffer.extend_from_slice(&40u32.to_le_bytes());
    buffer.extend_from_slice(&width_i32.to_le_bytes());
    buffer.extend_from_slice(&(-height_i32).to_le_bytes()); // negative = top-down rows
    buffer.extend_from_slice(&1u16.to_le_bytes()); // planes
    buffer.extend_from_slice(&BIT_COUNT.to_le_bytes());
    buffer.extend_from_slice(&0u32.to_le_bytes()); // no compression
    buffer.extend_from_slice(&(layout.data_size as u32).to_le_bytes());
    buffer.extend_from_slice(&(config.resolution_ppm as i32).to_le_bytes());
    buffer.extend_from_slice(&(config.resolution_ppm as i32).to_le_bytes());
    buffer.extend_from_slice(&0u32.to_le_bytes()); // colors used
    buffer.extend_from_slice(&0u32.to_le_bytes()); // important colors

    Ok(())
}

fn oversize_error(width: usize, height: usize) -> ConversionError {
    ConversionError::EncodeError(format!(
        "image dimensions {}x{} overflow BMP size fields",
        width, height
    ))
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(ConversionError::BufferSizeMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_rgb(image: &RgbImage) -> Vec<u8> {
        let mut output = Cursor::new(Vec::new());
        StandardBmpWriter
            .write_rgb_bmp(image, &mut output, &ConversionConfig::default())
            .unwrap();
        output.into_inner()
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn read_i32(bytes: &[u8], offset: usize) -> i32 {
        i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn read_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn header_fields_for_256x256() {
        let mut image = RgbImage::new(256, 256, 8);
        for y in 0..256 {
            for x in 0..256 {
                image.set_pixel(x, y, [255, 0, 0]);
            }
        }

        let bytes = encode_rgb(&image);

        // 256 * 3 = 768 bytes per row, no padding needed.
        assert_eq!(bytes.len(), 54 + 768 * 256);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(read_u32(&bytes, 2), 196662); // file size
        assert_eq!(read_u16(&bytes, 6), 0); // reserved
        assert_eq!(read_u16(&bytes, 8), 0); // reserved
        assert_eq!(read_u32(&bytes, 10), 54); // pixel data offset
        assert_eq!(read_u32(&bytes, 14), 40); // info header size
        assert_eq!(read_i32(&bytes, 18), 256); // width
        assert_eq!(read_i32(&bytes, 22), -256); // negative height, top-down
        assert_eq!(read_u16(&bytes, 26), 1); // planes
        assert_eq!(read_u16(&bytes, 28), 24); // bits per pixel
        assert_eq!(read_u32(&bytes, 30), 0); // compression
        assert_eq!(read_u32(&bytes, 34), 768 * 256); // data size
        assert_eq!(read_i32(&bytes, 38), 2835); // horizontal resolution
        assert_eq!(read_i32(&bytes, 42), 2835); // vertical resolution
        assert_eq!(read_u32(&bytes, 46), 0); // colors used
        assert_eq!(read_u32(&bytes, 50), 0); // important colors

        // All-red pixels come out as B,G,R = 0,0,255.
        assert_eq!(&bytes[54..57], &[0, 0, 255]);
    }

    #[test]
    fn rows_are_padded_to_multiple_of_four() {
        // width 5: 15 color bytes per row, 1 pad byte.
        let image = RgbImage::new(5, 3, 8);

        let bytes = encode_rgb(&image);

        assert_eq!(bytes.len(), 54 + 16 * 3);
        assert_eq!(read_u32(&bytes, 34), 16 * 3);
        for row in 0..3 {
            let pad = 54 + row * 16 + 15;
            assert_eq!(bytes[pad], 0, "pad byte of row {}", row);
        }
    }

    #[test]
    fn pixels_are_written_bgr() {
        let mut image = RgbImage::new(1, 1, 8);
        image.set_pixel(0, 0, [10, 20, 30]);

        let bytes = encode_rgb(&image);

        assert_eq!(&bytes[54..57], &[30, 20, 10]);
    }

    #[test]
    fn rows_are_written_top_down() {
        let mut image = RgbImage::new(1, 2, 8);
        image.set_pixel(0, 0, [1, 2, 3]);
        image.set_pixel(0, 1, [4, 5, 6]);

        let bytes = encode_rgb(&image);

        // First stored row is the visual top row (width 1 rows carry 1 pad byte).
        assert_eq!(&bytes[54..57], &[3, 2, 1]);
        assert_eq!(&bytes[58..61], &[6, 5, 4]);
    }

    #[test]
    fn mono_samples_expand_to_gray_triples() {
        let mut image = MonoImage::new(2, 1, 8);
        image.set_sample(0, 0, 7);
        image.set_sample(1, 0, 200);

        let mut output = Cursor::new(Vec::new());
        StandardBmpWriter
            .write_mono_bmp(&image, &mut output, &ConversionConfig::default())
            .unwrap();
        let bytes = output.into_inner();

        assert_eq!(&bytes[54..60], &[7, 7, 7, 200, 200, 200]);
        assert_eq!(bytes.len(), 54 + 8); // 6 color bytes + 2 pad bytes
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let mut image = RgbImage::new(2, 2, 8);
        image.data.truncate(5);

        let mut output = Cursor::new(Vec::new());
        let result =
            StandardBmpWriter.write_rgb_bmp(&image, &mut output, &ConversionConfig::default());

        assert!(matches!(
            result,
            Err(ConversionError::BufferSizeMismatch {
                expected: 12,
                actual: 5
            })
        ));
        assert!(output.into_inner().is_empty());
    }

    #[test]
    fn out_of_range_samples_wrap_on_narrowing() {
        let mut image = MonoImage::new(1, 1, 8);
        image.set_sample(0, 0, 256);

        let mut output = Cursor::new(Vec::new());
        StandardBmpWriter
            .write_mono_bmp(&image, &mut output, &ConversionConfig::default())
            .unwrap();

        assert_eq!(output.into_inner()[54], 0);
    }
}
