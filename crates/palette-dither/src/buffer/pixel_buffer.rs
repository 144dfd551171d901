//! Row-major RGBA8 pixel buffer.
//!
//! [`PixelBuffer`] is the single working surface of the dithering pass:
//! the decoded image lands here, the rasterizer mutates it in place, and
//! the same buffer is handed to the encoder. There is no separate output
//! buffer.

use crate::color::Rgb;

/// Bytes per pixel in the buffer (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// A mutable width × height grid of RGBA8 pixels, stored row-major.
///
/// The alpha channel is carried through from the decoded input but never
/// read by the dithering pass; every write stamps alpha fully opaque, so
/// after rasterization all alpha bytes are 255.
///
/// # Example
///
/// ```
/// use palette_dither::{PixelBuffer, Rgb};
///
/// let mut buffer = PixelBuffer::new(2, 1, vec![0; 8]);
/// buffer.set(1, 0, Rgb::new(10, 20, 30));
/// assert_eq!(buffer.get(1, 0), Rgb::new(10, 20, 30));
/// assert_eq!(buffer.as_bytes()[7], 255); // alpha stamped opaque
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// RGBA bytes, `width * height * 4`, row-major.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from decoded RGBA bytes.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height * BYTES_PER_PIXEL,
            "data length ({}) must match width * height * 4 ({}x{}x4={})",
            data.len(),
            width,
            height,
            width * height * BYTES_PER_PIXEL,
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * BYTES_PER_PIXEL
    }

    /// Read the color at `(x, y)`, ignoring alpha.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Write the color at `(x, y)` and stamp alpha fully opaque.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = 255;
    }

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw RGBA bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
