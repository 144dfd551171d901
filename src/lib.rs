//! Palettize - fixed-palette PNG dithering
//!
//! Thin I/O shell around the `palette-dither` core.
//! This library exposes modules for integration testing.

pub mod image_io;
