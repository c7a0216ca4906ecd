//! Robot-style driver for gesture tests.
//!
//! The robot owns a recognizer wired so every gesture and status callback
//! records into a shared log, plus a virtual clock. Test code scripts
//! contact streams (tap, swipe, pinch, press) against the clock and then
//! asserts on the recorded dispatch sequence.
//!
//! # Example
//!
//! ```
//! use swipekit_geometry::Point;
//! use swipekit_testing::{GestureRobot, Recorded};
//!
//! let mut robot = GestureRobot::new();
//! robot.swipe(Point::new(300.0, 100.0), Point::new(100.0, 100.0), 100, 4);
//! assert!(robot
//!     .recorded()
//!     .iter()
//!     .any(|r| matches!(r, Recorded::Swipe { .. })));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use swipekit_core::{
    ContactEvent, ContactSample, DispatchResult, Phase, ProcessOutcome, Recognizer, Settings,
    SourceCapability,
};
use swipekit_geometry::{Direction, PinchDirection, Point};

/// One recorded dispatch from the recognizer under test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recorded {
    SwipeStatus {
        phase: Phase,
        distance: f32,
    },
    Swipe {
        direction: Option<Direction>,
        distance: f32,
        duration: u64,
        contact_count: u8,
    },
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    PinchStatus {
        phase: Phase,
        zoom: f32,
    },
    Pinch {
        direction: PinchDirection,
        zoom: f32,
        distance: f32,
        contact_count: u8,
    },
    Tap {
        position: Point,
    },
    DoubleTap,
    LongTap {
        duration: u64,
    },
    Hold,
}

/// Drives one recognizer with synthetic contact events against a virtual
/// millisecond clock.
pub struct GestureRobot {
    recognizer: Recognizer,
    log: Rc<RefCell<Vec<Recorded>>>,
    now: u64,
}

impl GestureRobot {
    /// A robot over a touch-source recognizer with every handler recording
    /// and default settings.
    pub fn new() -> Self {
        Self::with_settings(|_| {})
    }

    /// Like [`GestureRobot::new`] but lets the test adjust settings (and
    /// unhook recorders by setting slots back to `None`) before attach.
    pub fn with_settings(configure: impl FnOnce(&mut Settings)) -> Self {
        Self::with_source(SourceCapability::Touch, configure)
    }

    /// A robot with only the tap family wired (tap, double-tap, long-tap,
    /// hold). Registered swipe or pinch capability suppresses tap-family
    /// classification entirely, so tap tests need the swipe slots empty.
    pub fn tap_family_only() -> Self {
        Self::with_settings(|settings| {
            settings.on_swipe = None;
            settings.on_swipe_left = None;
            settings.on_swipe_right = None;
            settings.on_swipe_up = None;
            settings.on_swipe_down = None;
            settings.on_swipe_status = None;
            settings.on_pinch_in = None;
            settings.on_pinch_out = None;
            settings.on_pinch_status = None;
        })
    }

    pub fn with_source(
        source: SourceCapability,
        configure: impl FnOnce(&mut Settings),
    ) -> Self {
        let log: Rc<RefCell<Vec<Recorded>>> = Rc::new(RefCell::new(Vec::new()));
        let mut settings = Settings::default();

        macro_rules! record {
            ($event:expr) => {{
                let log = log.clone();
                Box::new(move |_report: &_| {
                    log.borrow_mut().push($event);
                    DispatchResult::Continue
                })
            }};
        }

        settings.on_swipe = Some({
            let log = log.clone();
            Box::new(move |report| {
                log.borrow_mut().push(Recorded::Swipe {
                    direction: report.direction,
                    distance: report.distance,
                    duration: report.duration,
                    contact_count: report.contact_count,
                });
                DispatchResult::Continue
            })
        });
        settings.on_swipe_left = Some(record!(Recorded::SwipeLeft));
        settings.on_swipe_right = Some(record!(Recorded::SwipeRight));
        settings.on_swipe_up = Some(record!(Recorded::SwipeUp));
        settings.on_swipe_down = Some(record!(Recorded::SwipeDown));
        settings.on_swipe_status = Some({
            let log = log.clone();
            Box::new(move |phase, report| {
                log.borrow_mut().push(Recorded::SwipeStatus {
                    phase,
                    distance: report.distance,
                });
                DispatchResult::Continue
            })
        });
        settings.on_pinch_in = Some({
            let log = log.clone();
            Box::new(move |report| {
                log.borrow_mut().push(Recorded::Pinch {
                    direction: PinchDirection::In,
                    zoom: report.zoom,
                    distance: report.distance,
                    contact_count: report.contact_count,
                });
                DispatchResult::Continue
            })
        });
        settings.on_pinch_out = Some({
            let log = log.clone();
            Box::new(move |report| {
                log.borrow_mut().push(Recorded::Pinch {
                    direction: PinchDirection::Out,
                    zoom: report.zoom,
                    distance: report.distance,
                    contact_count: report.contact_count,
                });
                DispatchResult::Continue
            })
        });
        settings.on_pinch_status = Some({
            let log = log.clone();
            Box::new(move |phase, report| {
                log.borrow_mut().push(Recorded::PinchStatus {
                    phase,
                    zoom: report.zoom,
                });
                DispatchResult::Continue
            })
        });
        settings.on_tap = Some({
            let log = log.clone();
            Box::new(move |report| {
                log.borrow_mut().push(Recorded::Tap {
                    position: report.position,
                });
                DispatchResult::Continue
            })
        });
        settings.on_double_tap = Some(record!(Recorded::DoubleTap));
        settings.on_long_tap = Some({
            let log = log.clone();
            Box::new(move |report| {
                log.borrow_mut().push(Recorded::LongTap {
                    duration: report.duration,
                });
                DispatchResult::Continue
            })
        });
        settings.on_hold = Some(record!(Recorded::Hold));

        configure(&mut settings);

        let recognizer =
            Recognizer::attach(settings, &[source]).expect("source available for robot");

        Self {
            recognizer,
            log,
            now: 1_000,
        }
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut Recognizer {
        &mut self.recognizer
    }

    /// The virtual clock, in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Everything recorded so far, in dispatch order.
    pub fn recorded(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }

    pub fn clear_recorded(&mut self) {
        self.log.borrow_mut().clear();
    }

    /// Advances the virtual clock and pumps deferred tasks, the way a host
    /// event loop would between events.
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
        self.recognizer.advance(self.now);
    }

    // Raw event feeding.

    pub fn begin(&mut self, points: &[Point]) -> ProcessOutcome {
        let samples = Self::samples(points);
        self.recognizer
            .process(&ContactEvent::begin(self.now, samples))
    }

    pub fn move_contacts(&mut self, points: &[Point]) -> ProcessOutcome {
        let samples = Self::samples(points);
        self.recognizer
            .process(&ContactEvent::moved(self.now, samples))
    }

    /// Ends contacts; `remaining` lists the positions of contacts still on
    /// the surface (identifiers keep their begin-order).
    pub fn end(&mut self, remaining: &[Point]) -> ProcessOutcome {
        let samples = Self::samples(remaining);
        self.recognizer
            .process(&ContactEvent::end(self.now, samples))
    }

    pub fn cancel(&mut self) -> ProcessOutcome {
        self.recognizer.process(&ContactEvent::cancel(self.now))
    }

    pub fn leave(&mut self) -> ProcessOutcome {
        self.recognizer.process(&ContactEvent::leave(self.now))
    }

    // Scripted gestures.

    /// A quick press-and-release at `position`.
    pub fn tap(&mut self, position: Point, duration: u64) {
        self.begin(&[position]);
        self.advance(duration);
        self.end(&[]);
    }

    /// A one-contact drag from `from` to `to` over `duration`, sampled in
    /// `steps` move events.
    pub fn swipe(&mut self, from: Point, to: Point, duration: u64, steps: u32) {
        let steps = steps.max(1);
        self.begin(&[from]);
        for step in 1..=steps {
            self.advance(duration / u64::from(steps));
            let t = step as f32 / steps as f32;
            let position = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.move_contacts(&[position]);
        }
        self.end(&[]);
    }

    /// A two-contact pinch: both contacts land together, travel to their
    /// end positions, then lift one after the other `lift_gap` apart.
    /// Terminal pinch classification needs `fingers` configured to 2 (or
    /// all); the default of 1 only produces the status stream.
    pub fn pinch(
        &mut self,
        starts: (Point, Point),
        ends: (Point, Point),
        duration: u64,
        lift_gap: u64,
    ) {
        let steps = 4u64;
        self.begin(&[starts.0, starts.1]);
        for step in 1..=steps {
            self.advance(duration / steps);
            let t = step as f32 / steps as f32;
            let a = Point::new(
                starts.0.x + (ends.0.x - starts.0.x) * t,
                starts.0.y + (ends.0.y - starts.0.y) * t,
            );
            let b = Point::new(
                starts.1.x + (ends.1.x - starts.1.x) * t,
                starts.1.y + (ends.1.y - starts.1.y) * t,
            );
            self.move_contacts(&[a, b]);
        }
        // First contact lifts; the second stays down through the grace
        // window, then lifts too.
        self.end(&[ends.1]);
        self.advance(lift_gap);
        self.end(&[]);
    }

    /// Press at `position`, stay still for `duration`, then release.
    pub fn long_press(&mut self, position: Point, duration: u64) {
        self.begin(&[position]);
        self.advance(duration);
        self.end(&[]);
    }

    fn samples(points: &[Point]) -> Vec<ContactSample> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| ContactSample::new(index as u32, *point))
            .collect()
    }
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}
