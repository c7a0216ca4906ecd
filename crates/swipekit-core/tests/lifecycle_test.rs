//! Attachment, source selection, the option accessor, enable/disable, and
//! scroll-suppression outcomes.

use swipekit_core::{
    AttachError, ConfigError, OptionValue, PageScroll, Recognizer, Settings, SourceCapability,
};
use swipekit_geometry::Point;
use swipekit_testing::{GestureRobot, Recorded};

#[test]
fn attach_prefers_pointer_over_touch() {
    let recognizer = Recognizer::attach(
        Settings::default(),
        &[SourceCapability::Touch, SourceCapability::Pointer],
    )
    .expect("attach");
    assert_eq!(recognizer.source(), SourceCapability::Pointer);
}

#[test]
fn attach_falls_back_to_mouse_only_when_allowed() {
    let recognizer = Recognizer::attach(Settings::default(), &[SourceCapability::Mouse])
        .expect("mouse fallback on by default");
    assert_eq!(recognizer.source(), SourceCapability::Mouse);

    let mut settings = Settings::default();
    settings.fallback_to_mouse_events = false;
    let err = Recognizer::attach(settings, &[SourceCapability::Mouse])
        .err()
        .expect("attach should fail without the mouse fallback");
    assert_eq!(err, AttachError::NoSupportedSource);
}

#[test]
fn attach_with_no_sources_errors() {
    let err = Recognizer::attach(Settings::default(), &[])
        .err()
        .expect("attach should fail with no sources");
    assert_eq!(err, AttachError::NoSupportedSource);
}

#[test]
fn option_accessor_round_trips_and_rejects_unknown_names() {
    let mut robot = GestureRobot::new();
    let recognizer = robot.recognizer_mut();

    recognizer
        .set_option("threshold", OptionValue::Distance(Some(120.0)))
        .expect("set threshold");
    assert_eq!(
        recognizer.option("threshold").expect("get threshold"),
        OptionValue::Distance(Some(120.0))
    );

    assert!(matches!(
        recognizer.option("no_such_option"),
        Err(ConfigError::UnknownOption { .. })
    ));
    assert!(matches!(
        recognizer.set_option("threshold", OptionValue::Flag(true)),
        Err(ConfigError::TypeMismatch { .. })
    ));
}

#[test]
fn raised_threshold_applies_to_the_next_session() {
    let mut robot = GestureRobot::new();
    robot
        .recognizer_mut()
        .set_option("threshold", OptionValue::Distance(Some(150.0)))
        .expect("set threshold");
    robot.swipe(Point::new(100.0, 100.0), Point::new(200.0, 100.0), 60, 2);

    assert!(!robot
        .recorded()
        .iter()
        .any(|r| matches!(r, Recorded::Swipe { .. })));
}

#[test]
fn disable_aborts_the_session_in_flight() {
    let mut robot = GestureRobot::new();
    robot.begin(&[Point::new(100.0, 100.0)]);
    assert!(robot.recognizer().in_progress());

    robot.recognizer_mut().disable();
    assert!(!robot.recognizer().in_progress());

    // The in-session listeners are gone; the release goes nowhere.
    robot.advance(30);
    robot.move_contacts(&[Point::new(300.0, 100.0)]);
    robot.advance(10);
    let outcome = robot.end(&[]);
    assert!(!outcome.handled);
    assert!(!robot
        .recorded()
        .iter()
        .any(|r| matches!(r, Recorded::Swipe { .. })));
}

#[test]
fn begin_stays_bound_while_disabled() {
    let mut robot = GestureRobot::new();
    robot.recognizer_mut().disable();

    robot.swipe(Point::new(100.0, 100.0), Point::new(300.0, 100.0), 100, 4);
    assert!(robot
        .recorded()
        .iter()
        .any(|r| matches!(r, Recorded::Swipe { .. })));
}

#[test]
fn transport_cancel_abandons_the_session() {
    let mut robot = GestureRobot::new();
    robot.begin(&[Point::new(100.0, 100.0)]);
    robot.advance(30);
    robot.move_contacts(&[Point::new(250.0, 100.0)]);
    robot.advance(10);
    robot.cancel();

    assert!(!robot.recognizer().in_progress());

    robot.advance(10);
    robot.end(&[]);
    assert!(!robot
        .recorded()
        .iter()
        .any(|r| matches!(r, Recorded::Swipe { .. })));
}

#[test]
fn contacts_starting_in_an_excluded_region_never_begin() {
    let mut robot = GestureRobot::with_settings(|settings| {
        settings.excluded = Some(Box::new(|point| point.x < 50.0));
    });
    let outcome = robot.begin(&[Point::new(10.0, 10.0)]);
    assert!(!outcome.handled);
    assert!(!robot.recognizer().in_progress());

    // Outside the region the session starts normally.
    robot.begin(&[Point::new(80.0, 10.0)]);
    assert!(robot.recognizer().in_progress());
}

#[test]
fn moves_request_scroll_suppression_per_policy() {
    // Swipe handlers wired and no explicit policy: everything suppressed.
    let mut robot = GestureRobot::new();
    robot.begin(&[Point::new(100.0, 100.0)]);
    robot.advance(20);
    assert!(robot.move_contacts(&[Point::new(150.0, 100.0)]).suppress_scroll);
    robot.advance(10);
    robot.end(&[]);

    // Horizontal scrolling left to the page: horizontal moves pass
    // through, vertical moves are still suppressed.
    let mut robot = GestureRobot::with_settings(|settings| {
        settings.page_scroll = Some(PageScroll::Horizontal);
    });
    robot.begin(&[Point::new(100.0, 100.0)]);
    robot.advance(20);
    assert!(!robot.move_contacts(&[Point::new(150.0, 100.0)]).suppress_scroll);
    robot.advance(20);
    assert!(robot.move_contacts(&[Point::new(150.0, 180.0)]).suppress_scroll);
    robot.advance(10);
    robot.end(&[]);

    // prevent_default off silences suppression entirely.
    let mut robot = GestureRobot::with_settings(|settings| {
        settings.prevent_default = false;
    });
    robot.begin(&[Point::new(100.0, 100.0)]);
    robot.advance(20);
    assert!(!robot.move_contacts(&[Point::new(200.0, 100.0)]).suppress_scroll);
}

#[test]
fn mouse_begin_suppresses_the_platform_default() {
    let mut robot = GestureRobot::with_source(SourceCapability::Mouse, |_| {});
    let outcome = robot.begin(&[Point::new(100.0, 100.0)]);
    assert!(outcome.suppress_scroll);

    let mut robot = GestureRobot::new();
    let outcome = robot.begin(&[Point::new(100.0, 100.0)]);
    assert!(!outcome.suppress_scroll);
}

#[test]
fn destroy_consumes_the_recognizer() {
    let recognizer =
        Recognizer::attach(Settings::default(), &[SourceCapability::Touch]).expect("attach");
    recognizer.destroy();
}
