//! 8-bit RGB color type.
//!
//! All palette matching and error diffusion operates on raw 8-bit channel
//! values. Alpha never participates in any computation; the rasterizer
//! stamps alpha fully opaque on every pixel it writes.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with three 8-bit channels.
///
/// Immutable once constructed. Distance between colors is squared
/// Euclidean distance in raw channel space — no gamma decoding and no
/// perceptual model, so matching is cheap and exactly reproducible.
///
/// # Example
///
/// ```
/// use palette_dither::Rgb;
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// assert_eq!(black.distance_squared(white), 3 * 255 * 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance to another color in channel space.
    ///
    /// Symmetric, and zero iff both colors are identical in all three
    /// channels. The maximum value is `3 * 255^2 = 195075`, which fits a
    /// `u32` with no wraparound.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::Rgb;
    ///
    /// let a = Rgb::new(10, 20, 30);
    /// let b = Rgb::new(13, 16, 30);
    /// assert_eq!(a.distance_squared(b), 9 + 16);
    /// assert_eq!(a.distance_squared(b), b.distance_squared(a));
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed. Alpha components are not accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_dither::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let red: Rgb = "F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
