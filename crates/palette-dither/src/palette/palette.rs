//! Palette store with precomputed exclusive radii.
//!
//! The palette holds the fixed set of allowed output colors plus one
//! precomputed value per entry: the entry's *exclusive radius*. Any point
//! whose squared distance to an entry is strictly below that entry's
//! radius is provably nearest to it, which lets the resolver skip the
//! full palette scan for runs of similar pixels.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// A fixed, ordered color palette with nearest-color matching.
///
/// Colors are deduplicated at construction (first occurrence wins) and
/// never change afterward. Entry order matters only as the deterministic
/// tie-break: when two entries are equidistant from an input color, the
/// earlier-indexed entry is chosen.
///
/// # Precomputation
///
/// Construction computes each entry's exclusive radius: the squared
/// half-distance to its nearest sibling entry. If a point lies strictly
/// inside entry `i`'s radius, no other entry can be closer (the point is
/// on `i`'s side of the half-distance boundary to every sibling), so the
/// resolver can return `i` without scanning. This is O(n²) in palette
/// size, run once, with n capped at 255.
///
/// # Example
///
/// ```
/// use palette_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let (idx, _) = palette.find_nearest(Rgb::new(10, 10, 10));
/// assert_eq!(idx, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    /// Distinct palette entries, in caller order.
    colors: Vec<Rgb>,
    /// Exclusive radius per entry: squared half-distance to the nearest
    /// sibling, `u32::MAX` for a single-entry palette.
    radii: Vec<u32>,
}

impl Palette {
    /// Maximum number of distinct colors a palette may hold.
    pub const MAX_COLORS: usize = 255;

    /// Create a palette from an ordered list of colors.
    ///
    /// Duplicate colors are removed, keeping the first occurrence so the
    /// tie-break order is unaffected.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Empty`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if more than
    ///   [`MAX_COLORS`](Self::MAX_COLORS) distinct colors are supplied
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(colors.len());
        for &color in colors {
            if seen.insert(color.to_bytes()) {
                unique.push(color);
            }
        }

        if unique.len() > Self::MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: unique.len(),
                max: Self::MAX_COLORS,
            });
        }

        let radii = exclusive_radii(&unique);
        Ok(Self {
            colors: unique,
            radii,
        })
    }

    /// Create a palette from hex color tokens.
    ///
    /// Accepts the formats of [`Rgb::from_str`]: `#RRGGBB`, `RRGGBB`,
    /// `#RGB`, `RGB`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first malformed
    /// token, or any validation error from [`Palette::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#F00"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(tokens: &[&str]) -> Result<Self, PaletteError> {
        let colors: Vec<Rgb> = tokens
            .iter()
            .map(|s| Rgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are
    /// rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All palette entries, in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Get the exclusive radius of the entry at the given index.
    ///
    /// Any color whose squared distance to `colors[idx]` is strictly
    /// below this value has `colors[idx]` as its unique nearest entry.
    #[inline]
    pub fn radius(&self, idx: usize) -> u32 {
        self.radii[idx]
    }

    /// Find the nearest palette entry to the given color.
    ///
    /// Returns `(index, squared_distance)`. Uses strict less-than
    /// comparison so equidistant entries resolve to the lowest index.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
    /// let (idx, dist) = palette.find_nearest(Rgb::new(250, 250, 250));
    /// assert_eq!(idx, 1);
    /// assert_eq!(dist, 3 * 5 * 5);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        // Linear scan - optimal for small palettes; the resolver's radius
        // cache handles the common repeated-pixel case.
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}

/// Compute the exclusive radius table for a deduplicated color list.
///
/// For each entry the radius is `min_sibling_dist_sq / 4`: the squared
/// half-distance to the nearest sibling. Points strictly inside it are
/// provably nearest to the entry — for any sibling `j`,
/// `|p - c_j| >= |c_i - c_j| - |p - c_i| > d - d/2 = d/2 > |p - c_i|`.
/// Integer division only shrinks the radius, which keeps the strict
/// less-than test sound. A single-entry palette has no sibling, so its
/// radius is maximal and every lookup short-circuits.
fn exclusive_radii(colors: &[Rgb]) -> Vec<u32> {
    if colors.len() == 1 {
        return vec![u32::MAX];
    }

    colors
        .iter()
        .enumerate()
        .map(|(i, &entry)| {
            let mut min_dist = u32::MAX;
            for (j, &sibling) in colors.iter().enumerate() {
                if i != j {
                    min_dist = min_dist.min(entry.distance_squared(sibling));
                }
            }
            min_dist / 4
        })
        .collect()
}
