//! palette-dither: fixed-palette quantization with Floyd-Steinberg
//! error diffusion.
//!
//! This library reduces a full-color image to a small, caller-supplied
//! color palette while preserving perceived tone. It is the algorithmic
//! core of the `palettize` CLI; file decoding, encoding, and argument
//! handling live in the binary crate.
//!
//! # Quick Start
//!
//! ```
//! use palette_dither::{dither_in_place, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//!
//! // 2x2 mid-gray RGBA image
//! let mut buffer = PixelBuffer::new(2, 2, vec![128; 16]);
//! dither_in_place(&mut buffer, &palette);
//!
//! // Every pixel now carries a palette color with opaque alpha
//! for px in buffer.as_bytes().chunks_exact(4) {
//!     assert!(px[0] == 0 || px[0] == 255);
//!     assert_eq!(px[3], 255);
//! }
//! ```
//!
//! # How it works
//!
//! Matching uses squared Euclidean distance over raw 8-bit channels — no
//! gamma decoding and no perceptual model, so results are integer-exact
//! and cheap to compute. Two optimizations carry the per-pixel cost:
//!
//! - **Exclusive radii**: at construction the [`Palette`] computes, for
//!   each entry, the squared half-distance to its nearest sibling. A
//!   point strictly inside an entry's radius is provably nearest to that
//!   entry, no scan required.
//! - **Resolver cache**: the [`Resolver`] remembers the last winning
//!   entry and its radius. Consecutive similar pixels — the common case
//!   in photographs — short-circuit in O(1); only color transitions pay
//!   for the linear scan.
//!
//! [`dither_in_place`] then walks the buffer in raster order, replacing
//! each pixel with its resolved color and diffusing the signed residual
//! into the four unvisited Floyd-Steinberg neighbors using `>> 4`
//! fixed-point arithmetic with post-shift clamping.
//!
//! # Determinism
//!
//! Output is a pure function of the input pixels and the palette. Ties
//! in the distance scan always resolve to the lowest palette index, and
//! the radius cache never changes a result — it only skips work.

pub mod buffer;
pub mod color;
pub mod dither;
pub mod palette;


pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use color::Rgb;
pub use dither::{dither_in_place, Resolver};
pub use palette::{Palette, PaletteError, ParseColorError};
