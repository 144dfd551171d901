//! In-place pixel buffer shared by decode, dither, and encode.

mod pixel_buffer;

pub use pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
