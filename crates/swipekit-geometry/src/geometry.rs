//! Geometric primitives: Point, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Screen-space bounding rectangle, used for leave detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + width,
            bottom: origin.y + height,
        }
    }

    /// Strict containment: points exactly on an edge count as outside.
    /// Leave detection treats edge contact as having left the element.
    pub fn contains_exclusive(&self, point: Point) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_points_count_as_outside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(rect.contains_exclusive(Point::new(50.0, 50.0)));
        assert!(!rect.contains_exclusive(Point::new(0.0, 50.0)));
        assert!(!rect.contains_exclusive(Point::new(100.0, 50.0)));
        assert!(!rect.contains_exclusive(Point::new(50.0, 100.0)));
        assert!(!rect.contains_exclusive(Point::new(150.0, 50.0)));
    }

    #[test]
    fn rect_from_origin_size() {
        let rect = Rect::from_origin_size(Point::new(10.0, 20.0), 30.0, 40.0);
        assert_eq!(rect, Rect::new(10.0, 20.0, 40.0, 60.0));
    }
}
