//! Nearest-color resolver with a single-entry radius cache.

use crate::color::Rgb;
use crate::palette::Palette;

/// Resolves input colors to their nearest palette entry.
///
/// The resolver wraps [`Palette::find_nearest`] with a one-entry cache:
/// the last winning color and that entry's exclusive radius. When the
/// next input lies strictly inside the cached radius it is provably
/// nearest to the cached entry and the scan is skipped entirely. On
/// photographic content, where consecutive pixels are similar, most
/// lookups take this path.
///
/// The cache is purely an optimization: for every input the returned
/// color equals the one a full linear scan would pick, ties included.
/// One resolver instance serves one rasterization run; concurrent runs
/// need separate instances.
///
/// # Example
///
/// ```
/// use palette_dither::{Palette, Resolver, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let mut resolver = Resolver::new(&palette);
///
/// assert_eq!(resolver.resolve(Rgb::new(10, 10, 10)), Rgb::new(0, 0, 0));
/// assert_eq!(resolver.resolve(Rgb::new(250, 250, 250)), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug)]
pub struct Resolver<'a> {
    palette: &'a Palette,
    /// Last resolved palette color.
    cached: Rgb,
    /// Exclusive radius of the cached entry.
    cached_radius: u32,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the given palette.
    ///
    /// The cache starts primed with the palette's first entry, which is
    /// as valid as any other: the short-circuit only fires for inputs
    /// provably nearest to the cached entry.
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            cached: palette.color(0),
            cached_radius: palette.radius(0),
        }
    }

    /// Return the palette entry nearest to `color`.
    ///
    /// Deterministic: equidistant entries resolve to the lowest palette
    /// index, whether or not the cached fast path fires.
    #[inline]
    pub fn resolve(&mut self, color: Rgb) -> Rgb {
        // Inside the cached entry's exclusive radius no sibling can be
        // closer, so the scan is skipped.
        if color.distance_squared(self.cached) < self.cached_radius {
            return self.cached;
        }

        let (idx, _) = self.palette.find_nearest(color);
        self.cached = self.palette.color(idx);
        self.cached_radius = self.palette.radius(idx);
        self.cached
    }
}
