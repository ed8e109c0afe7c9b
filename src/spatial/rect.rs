//! Axis-aligned integer rectangles and the geometric predicates used by
//! partitioning and overlap resolution
//!
//! Bounds follow the half-open convention: `min` coordinates are inclusive,
//! `max` coordinates are exclusive. All operations are total — degenerate
//! inputs produce degenerate outputs rather than errors.

/// Axis-aligned rectangle with integer bounds
///
/// A value type: two rectangles are equal iff all four bounds match.
/// Well-formed rectangles satisfy `min_x <= max_x` and `min_y <= max_y`;
/// operations tolerate inverted bounds by treating them as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Minimum x coordinate (inclusive)
    pub min_x: i32,
    /// Minimum y coordinate (inclusive)
    pub min_y: i32,
    /// Maximum x coordinate (exclusive)
    pub max_x: i32,
    /// Maximum y coordinate (exclusive)
    pub max_y: i32,
}

const fn lesser(a: i32, b: i32) -> i32 {
    if a < b { a } else { b }
}

const fn greater(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

impl Rect {
    /// The canonical empty rectangle
    ///
    /// Every empty intersection collapses to this value so that exact-match
    /// bookkeeping treats all of them as one entry.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from explicit bounds
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle covering `(0, 0)` to `(width, height)`
    pub const fn from_dimensions(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Horizontal extent; zero or negative for degenerate rectangles
    pub const fn width(self) -> i32 {
        self.max_x - self.min_x
    }

    /// Vertical extent; zero or negative for degenerate rectangles
    pub const fn height(self) -> i32 {
        self.max_y - self.min_y
    }

    /// Whether the rectangle contains no points
    pub const fn is_empty(self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// The rectangle covering the region shared by `self` and `other`
    ///
    /// Returns [`Rect::ZERO`] when the two do not intersect, so every empty
    /// result compares equal regardless of where the inputs sat.
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        let clipped = Self {
            min_x: greater(self.min_x, other.min_x),
            min_y: greater(self.min_y, other.min_y),
            max_x: lesser(self.max_x, other.max_x),
            max_y: lesser(self.max_y, other.max_y),
        };
        if clipped.is_empty() { Self::ZERO } else { clipped }
    }

    /// Strict overlap test used by overlap elimination
    ///
    /// True iff the two rectangles share interior area: edge or corner
    /// contact does not count, empty rectangles never overlap anything, and
    /// a rectangle never overlaps one with identical bounds (duplicates of
    /// the same region are treated as one tile, not as a collision).
    pub fn overlaps(self, other: Self) -> bool {
        self != other
            && !self.is_empty()
            && !other.is_empty()
            && self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Whether every point of `other` lies within `self`
    ///
    /// True when the bounds coincide; vacuously true for empty `other`.
    pub const fn contains(self, other: Self) -> bool {
        other.is_empty()
            || (self.min_x <= other.min_x
                && other.max_x <= self.max_x
                && self.min_y <= other.min_y
                && other.max_y <= self.max_y)
    }

    /// Shrink the rectangle by `n` units on all four sides
    ///
    /// The result may be empty or inverted when `n` exceeds half of either
    /// extent; painting treats such regions as no-ops.
    #[must_use]
    pub const fn inset(self, n: i32) -> Self {
        Self {
            min_x: self.min_x + n,
            min_y: self.min_y + n,
            max_x: self.max_x - n,
            max_y: self.max_y - n,
        }
    }
}
