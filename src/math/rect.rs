use super::Point2;

/// Axis-aligned rectangle in graphics coordinates: `bottom` is numerically
/// greater than `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle of the given size with its top-left corner at the origin.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the rectangle has no positive extent on some axis, or an edge
    /// is not finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let finite = [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite());
        !finite || self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Shrinks the rectangle by `d` on every side. A negative `d` grows it.
    #[must_use]
    pub fn inset(&self, d: f64) -> Self {
        Self::new(self.left + d, self.top + d, self.right - d, self.bottom - d)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Smallest rectangle enclosing all `points`, or `None` if there are none.
    #[must_use]
    pub fn bounding_box(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut bb = Self::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bb.left = bb.left.min(p.x);
            bb.top = bb.top.min(p.y);
            bb.right = bb.right.max(p.x);
            bb.bottom = bb.bottom.max(p.y);
        }
        Some(bb)
    }
}
