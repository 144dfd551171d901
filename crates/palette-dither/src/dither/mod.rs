//! Error diffusion dithering.
//!
//! Two pieces cooperate here:
//!
//! - [`Resolver`]: nearest-palette-color lookup with a single-entry
//!   radius cache that skips the palette scan for runs of similar pixels.
//! - [`dither_in_place`]: the Floyd-Steinberg raster walk that replaces
//!   each pixel with its resolved color and diffuses the quantization
//!   error into unvisited neighbors.
//!
//! The walk is inherently sequential: each pixel's resolved color depends
//! on error accumulated from earlier pixels, so there is no parallel
//! variant.

mod floyd_steinberg;
mod resolver;

pub use floyd_steinberg::dither_in_place;
pub use resolver::Resolver;
