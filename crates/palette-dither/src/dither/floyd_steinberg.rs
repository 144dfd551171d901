//! Floyd-Steinberg error diffusion over an in-place pixel buffer.
//!
//! The classic 4-neighbor kernel, applied in raster order with integer
//! arithmetic:
//!
//! ```text
//!        X   7
//!    3   5   1      (each weight / 16)
//! ```
//!
//! Every pixel is replaced by its nearest palette color and the
//! per-channel quantization error is pushed into the still-unvisited
//! neighbors, so their colors already reflect accumulated error when the
//! scan reaches them. Neighbors outside the image are skipped; nothing
//! wraps around row ends.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::Palette;

use super::Resolver;

/// Quantize `buffer` to `palette` with Floyd-Steinberg dithering.
///
/// Walks the buffer top-to-bottom, left-to-right. For each pixel the
/// current color (including error diffused into it by earlier pixels) is
/// resolved to its nearest palette entry, written back with opaque
/// alpha, and the signed residual is distributed to the right,
/// below-left, below, and below-right neighbors with weights 7, 3, 5, 1
/// out of 16.
///
/// A pixel is never revisited once written; each row's error is fully
/// diffused before the scan enters the next row. A zero-area buffer is a
/// no-op.
///
/// # Example
///
/// ```
/// use palette_dither::{dither_in_place, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let mut buffer = PixelBuffer::new(1, 1, vec![200, 200, 200, 0]);
///
/// dither_in_place(&mut buffer, &palette);
/// assert_eq!(buffer.get(0, 0), Rgb::new(255, 255, 255));
/// ```
pub fn dither_in_place(buffer: &mut PixelBuffer, palette: &Palette) {
    let width = buffer.width();
    let height = buffer.height();
    let mut resolver = Resolver::new(palette);

    for y in 0..height {
        for x in 0..width {
            let orig = buffer.get(x, y);
            let chosen = resolver.resolve(orig);
            buffer.set(x, y, chosen);

            // Max |err| is 255; err * 7 stays well inside i16.
            let err = [
                orig.r as i16 - chosen.r as i16,
                orig.g as i16 - chosen.g as i16,
                orig.b as i16 - chosen.b as i16,
            ];

            if x + 1 < width {
                diffuse(buffer, x + 1, y, err, 7);
            }
            if y + 1 < height {
                if x > 0 {
                    diffuse(buffer, x - 1, y + 1, err, 3);
                }
                diffuse(buffer, x, y + 1, err, 5);
                if x + 1 < width {
                    diffuse(buffer, x + 1, y + 1, err, 1);
                }
            }
        }
    }
}

/// Add `weight/16` of the error to the neighbor at `(x, y)`.
#[inline]
fn diffuse(buffer: &mut PixelBuffer, x: usize, y: usize, err: [i16; 3], weight: i16) {
    let current = buffer.get(x, y);
    buffer.set(
        x,
        y,
        Rgb::new(
            apply_error(current.r, err[0], weight),
            apply_error(current.g, err[1], weight),
            apply_error(current.b, err[2], weight),
        ),
    );
}

/// One channel of the diffusion step: `channel + (err * weight) >> 4`,
/// clamped to 0..=255 after the shift. The arithmetic shift truncates
/// negative values toward negative infinity, matching the classic
/// integer formulation of the algorithm bit-for-bit.
#[inline]
fn apply_error(channel: u8, err: i16, weight: i16) -> u8 {
    (channel as i16 + ((err * weight) >> 4)).clamp(0, 255) as u8
}
