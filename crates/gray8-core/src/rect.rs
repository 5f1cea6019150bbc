//! Rectangle type for image regions.
//!
//! A [`Rect`] is never stored inside an image; it is the derived concept
//! used to express crop regions, paste placements and sub-image offsets.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Edges are computed in `u64`, so a rectangle whose far corner lies past
//! `u32::MAX` is reported as not contained rather than wrapping around.
//!
//! # Usage
//!
//! ```rust
//! use gray8_core::Rect;
//!
//! let image = Rect::from_size(100, 80);
//! assert!(image.contains_rect(&Rect::new(10, 20, 90, 60)));
//! assert!(!image.contains_rect(&Rect::new(10, 20, 91, 60)));
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Example
///
/// ```rust
/// use gray8_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at origin (0, 0) with the given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom edges.
    ///
    /// ```rust
    /// use gray8_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));
    /// assert!(rect.contains(109, 109));
    /// assert!(!rect.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && (px as u64) < self.right()
            && py >= self.y
            && (py as u64) < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    ///
    /// An empty rectangle is contained as long as its origin lies within
    /// the closed extent of `self`, so a 0x0 region at `(width, height)` is
    /// still valid.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Iterates over every position of the rectangle in raster order
    /// (top row first, left to right within a row).
    ///
    /// Positions past `u32::MAX` on either axis are not representable and
    /// are not yielded.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        const END: u64 = u32::MAX as u64 + 1;
        let (x, y) = (self.x as u64, self.y as u64);
        let right = self.right().min(END);
        let bottom = self.bottom().min(END);
        (y..bottom).flat_map(move |py| (x..right).map(move |px| (px as u32, py as u32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(3, 4, 5, 6);
        assert_eq!(r.right(), 8);
        assert_eq!(r.bottom(), 10);
        assert_eq!(r.area(), 30);
        assert!(!r.is_empty());
        assert!(Rect::new(1, 1, 0, 7).is_empty());
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let r = Rect::new(u32::MAX, u32::MAX, 2, 2);
        assert_eq!(r.right(), u32::MAX as u64 + 2);
        assert!(!Rect::from_size(u32::MAX, u32::MAX).contains_rect(&r));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::from_size(10, 8);
        assert!(outer.contains_rect(&Rect::new(0, 0, 10, 8)));
        assert!(outer.contains_rect(&Rect::new(9, 7, 1, 1)));
        assert!(outer.contains_rect(&Rect::new(10, 8, 0, 0)));
        assert!(!outer.contains_rect(&Rect::new(9, 7, 2, 1)));
        assert!(!outer.contains_rect(&Rect::new(0, 1, 10, 8)));
    }

    #[test]
    fn test_positions_raster_order() {
        let r = Rect::new(2, 5, 3, 2);
        let got: Vec<_> = r.positions().collect();
        assert_eq!(
            got,
            vec![(2, 5), (3, 5), (4, 5), (2, 6), (3, 6), (4, 6)]
        );
        assert_eq!(Rect::new(0, 0, 0, 4).positions().count(), 0);
    }

    #[test]
    fn test_positions_at_coordinate_limit() {
        let r = Rect::new(u32::MAX - 1, u32::MAX, 4, 3);
        assert_eq!(r.right(), u32::MAX as u64 + 3);
        let got: Vec<_> = r.positions().collect();
        assert_eq!(got, vec![(u32::MAX - 1, u32::MAX), (u32::MAX, u32::MAX)]);
    }
}
