//! Palette types and utilities
//!
//! This module provides the palette store with its precomputed exclusive
//! radius table, plus error types for parsing and validation.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
