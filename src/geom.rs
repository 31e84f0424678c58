//! Basic plane geometry: points and bounding boxes

/// A 2D point. Depending on context the coordinates are Cartesian
/// (x right, y up) or polar (x = angle in radians, y = radius).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box contains a point (boundary inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Grow the box by `margin` on every side
    pub fn padded(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// Minimal bounding box over a set of points, or `None` for an empty set.
pub fn bounds_of<I>(points: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = Point>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut bounds = BoundingBox::new(first.x, first.y, 0.0, 0.0);
    for p in iter {
        bounds = bounds.expand_to_include(p);
    }
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert!(bounds_of(std::iter::empty()).is_none());
    }

    #[test]
    fn bounds_of_single_point_is_degenerate() {
        let b = bounds_of([Point::new(3.0, -2.0)]).unwrap();
        assert_eq!(b, BoundingBox::new(3.0, -2.0, 0.0, 0.0));
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = [
            Point::new(-1.0, 4.0),
            Point::new(5.0, 0.0),
            Point::new(2.0, -3.0),
        ];
        let b = bounds_of(pts).unwrap();
        assert_eq!(b, BoundingBox::new(-1.0, -3.0, 6.0, 7.0));
        for p in pts {
            assert!(b.contains(p));
        }
    }

    #[test]
    fn padded_adds_margin_on_every_side() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 20.0).padded(10.0);
        assert_eq!(b, BoundingBox::new(-10.0, -10.0, 30.0, 40.0));
    }
}
