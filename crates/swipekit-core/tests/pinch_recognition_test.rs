//! Two-contact pinch recognition: zoom ratio, direction, the separation
//! threshold, and mid-session adoption of a second contact.

use swipekit_core::{FingerCount, Settings};
use swipekit_geometry::{PinchDirection, Point};
use swipekit_testing::{GestureRobot, Recorded};

fn pinch_settings(settings: &mut Settings) {
    settings.fingers = FingerCount::Exact(2);
    // The primary contact barely travels in a symmetric pinch; drop the
    // swipe distance gate so the session can end rather than cancel.
    settings.threshold = None;
    settings.on_swipe = None;
    settings.on_swipe_left = None;
    settings.on_swipe_right = None;
    settings.on_swipe_up = None;
    settings.on_swipe_down = None;
    settings.on_swipe_status = None;
}

fn pinches(recorded: &[Recorded]) -> Vec<Recorded> {
    recorded
        .iter()
        .filter(|r| matches!(r, Recorded::Pinch { .. }))
        .copied()
        .collect()
}

#[test]
fn shrinking_separation_is_a_pinch_out_with_the_end_over_start_ratio() {
    let mut robot = GestureRobot::with_settings(pinch_settings);
    robot.pinch(
        (Point::new(100.0, 100.0), Point::new(200.0, 100.0)),
        (Point::new(125.0, 100.0), Point::new(175.0, 100.0)),
        100,
        100,
    );

    let pinches = pinches(&robot.recorded());
    assert_eq!(pinches.len(), 1);
    assert_eq!(
        pinches[0],
        Recorded::Pinch {
            direction: PinchDirection::Out,
            zoom: 0.5,
            distance: 50.0,
            contact_count: 2,
        }
    );
}

#[test]
fn growing_separation_is_a_pinch_in() {
    let mut robot = GestureRobot::with_settings(pinch_settings);
    robot.pinch(
        (Point::new(100.0, 100.0), Point::new(200.0, 100.0)),
        (Point::new(75.0, 100.0), Point::new(225.0, 100.0)),
        100,
        100,
    );

    let pinches = pinches(&robot.recorded());
    assert_eq!(pinches.len(), 1);
    assert!(matches!(
        pinches[0],
        Recorded::Pinch {
            direction: PinchDirection::In,
            zoom,
            ..
        } if zoom == 1.5
    ));
}

#[test]
fn separation_change_under_the_pinch_threshold_fires_nothing() {
    let mut robot = GestureRobot::with_settings(pinch_settings);
    // Separation 100 -> 108: an 8-unit change against the 20-unit default.
    robot.pinch(
        (Point::new(100.0, 100.0), Point::new(200.0, 100.0)),
        (Point::new(96.0, 100.0), Point::new(204.0, 100.0)),
        100,
        100,
    );

    assert!(pinches(&robot.recorded()).is_empty());
}

#[test]
fn second_contact_arriving_mid_session_is_adopted() {
    let mut robot = GestureRobot::with_settings(pinch_settings);
    robot.begin(&[Point::new(100.0, 100.0)]);
    robot.advance(20);
    // The second contact lands after the session started; separation is
    // measured from here.
    robot.move_contacts(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
    robot.advance(40);
    robot.move_contacts(&[Point::new(125.0, 100.0), Point::new(175.0, 100.0)]);
    robot.advance(20);
    robot.end(&[Point::new(175.0, 100.0)]);
    robot.advance(100);
    robot.end(&[]);

    let pinches = pinches(&robot.recorded());
    assert_eq!(pinches.len(), 1);
    assert!(matches!(
        pinches[0],
        Recorded::Pinch {
            direction: PinchDirection::Out,
            zoom,
            contact_count: 2,
            ..
        } if zoom == 0.5
    ));
}

#[test]
fn pinch_status_streams_the_live_zoom() {
    let mut robot = GestureRobot::with_settings(pinch_settings);
    robot.pinch(
        (Point::new(100.0, 100.0), Point::new(200.0, 100.0)),
        (Point::new(125.0, 100.0), Point::new(175.0, 100.0)),
        100,
        100,
    );

    let zooms: Vec<f32> = robot
        .recorded()
        .iter()
        .filter_map(|r| match r {
            Recorded::PinchStatus { zoom, .. } => Some(*zoom),
            _ => None,
        })
        .collect();
    // Separation shrinks monotonically across the four sampled moves.
    assert!(zooms.len() >= 4);
    assert_eq!(zooms.last(), Some(&0.5));
    assert!(zooms.windows(2).all(|pair| pair[1] <= pair[0]));
}
