//! Pure math for gesture recognition: points, bounds, and the derived
//! metrics (distance, angle, compass direction, pinch zoom) the recognizer
//! computes from contact positions.

mod geometry;
mod motion;

pub use geometry::{Point, Rect};
pub use motion::{
    angle, direction, distance, pinch_direction, separation, zoom_ratio, Direction,
    PinchDirection,
};
