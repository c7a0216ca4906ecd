//! Derived motion metrics computed from contact point pairs.
//!
//! All distances are rounded to whole screen units and angles to whole
//! degrees so threshold comparisons behave identically across platforms
//! with sub-pixel input precision.

use crate::Point;

/// Coarse compass direction of a swipe.
///
/// The classifier partitions the full angle range into four sectors rather
/// than fine-grained compass directions; see [`direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Stable index for per-direction bookkeeping tables.
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Direction of a pinch: contacts moving together or apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinchDirection {
    In,
    Out,
}

/// Euclidean distance between two points, rounded to the nearest unit.
pub fn distance(start: Point, end: Point) -> f32 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    (dx * dx + dy * dy).sqrt().round()
}

/// Separation between two simultaneous contacts, rounded to the nearest
/// unit. Used for pinch tracking.
pub fn separation(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    (dx * dx + dy * dy).sqrt().round()
}

/// Angle of travel from `start` to `end` in whole degrees, normalized into
/// [0, 360). Zero degrees points along leftward travel (x measured
/// start-to-end reversed, y measured downward), matching the sector table
/// in [`direction`].
pub fn angle(start: Point, end: Point) -> f32 {
    let x = start.x - end.x;
    let y = end.y - start.y;
    let mut degrees = y.atan2(x).to_degrees().round();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    degrees
}

/// Classifies the travel from `start` to `end` into one of four sectors:
/// [0°,45°] and [315°,360°) map to `Left`, [135°,225°] to `Right`,
/// (45°,135°) to `Down`, and the rest to `Up`.
pub fn direction(start: Point, end: Point) -> Direction {
    let angle = angle(start, end);

    if angle <= 45.0 {
        Direction::Left
    } else if angle >= 315.0 {
        Direction::Left
    } else if (135.0..=225.0).contains(&angle) {
        Direction::Right
    } else if angle > 45.0 && angle < 135.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Zoom factor of a pinch: end separation over start separation, rounded
/// to two decimals.
pub fn zoom_ratio(start_separation: f32, end_separation: f32) -> f32 {
    ((end_separation / start_separation) * 100.0).round() / 100.0
}

/// Pinch direction is derived purely from the zoom ratio: below 1 the
/// contacts converged (`Out`), at or above 1 they spread (`In`).
pub fn pinch_direction(zoom: f32) -> PinchDirection {
    if zoom < 1.0 {
        PinchDirection::Out
    } else {
        PinchDirection::In
    }
}
