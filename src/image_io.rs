//! PNG decode/encode around the in-memory pixel buffer.
//!
//! The dithering core only ever sees an RGBA8 [`PixelBuffer`]; this
//! module is the boundary where files become buffers and back. Inputs
//! are normalized to 8-bit RGBA at decode time (paletted, grayscale, and
//! 16-bit PNGs included), so the core never has to care about the source
//! format.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use palette_dither::PixelBuffer;
use thiserror::Error;

/// Errors from reading or writing PNG files.
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("unsupported PNG color type after expansion: {0:?}")]
    UnsupportedColorType(png::ColorType),
}

/// Decode a PNG file into an RGBA8 pixel buffer.
///
/// Decoder transformations normalize the source to 8-bit with an alpha
/// channel; grayscale-with-alpha output is expanded to RGBA here. The
/// alpha values are carried into the buffer but the dithering pass
/// ignores them and stamps every pixel opaque.
pub fn decode_png(path: &Path) -> Result<PixelBuffer, ImageIoError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8() | png::Transformations::ALPHA);

    let mut reader = decoder.read_info()?;
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data)?;
    data.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;

    match info.color_type {
        png::ColorType::Rgba => Ok(PixelBuffer::new(width, height, data)),
        png::ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(width * height * 4);
            for px in data.chunks_exact(2) {
                rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
            Ok(PixelBuffer::new(width, height, rgba))
        }
        // EXPAND | ALPHA leaves only the two cases above
        other => Err(ImageIoError::UnsupportedColorType(other)),
    }
}

/// Encode a pixel buffer to an RGBA8 PNG file.
pub fn encode_png(path: &Path, buffer: &PixelBuffer) -> Result<(), ImageIoError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        buffer.width() as u32,
        buffer.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(buffer.as_bytes())?;
    writer.finish()?;
    Ok(())
}
