//! Error types for palette construction.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color token fails, either due to an
/// invalid length or an invalid hexadecimal character.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette validation.
///
/// Returned when the supplied color list cannot form a valid palette:
/// empty input, too many distinct colors, or an unparseable hex token.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    Empty,
    /// More distinct colors than the palette supports
    TooManyColors {
        /// Number of distinct colors supplied
        count: usize,
        /// Maximum supported palette size
        max: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Empty => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyColors { count, max } => {
                write!(f, "palette has {} distinct colors (maximum {})", count, max)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
