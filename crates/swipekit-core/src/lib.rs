//! Gesture recognition core for Swipekit.
//!
//! The recognizer classifies a raw stream of contact events (begin, move,
//! end, cancel, plus an optional bounds-leave notification) into named
//! gestures: swipe, pinch, tap, double-tap, long-tap, and hold. It owns no
//! rendering and no event transport; the host feeds it [`ContactEvent`]s
//! with monotonic millisecond timestamps and pumps deferred work through
//! [`Recognizer::advance`].
//!
//! One [`Recognizer`] tracks at most one interaction session at a time:
//! contact-begin events arriving while a session is in progress are
//! ignored, and every completed session dispatches at most one terminal
//! gesture.

pub mod classifier;
pub mod config;
pub mod contact;
pub mod dispatch;
pub mod events;
pub mod handlers;
pub mod recognizer;
pub mod session;
pub mod source;
pub mod tasks;

pub use config::{ConfigError, FingerCount, OptionValue, PageScroll, Settings};
pub use contact::{Contact, ContactTracker, MAX_CONTACTS};
pub use events::{ContactEvent, ContactEventKind, ContactSample, ProcessOutcome};
pub use handlers::{DispatchResult, PinchReport, SwipeReport, TapReport};
pub use recognizer::Recognizer;
pub use session::{Phase, Session};
pub use source::{AttachError, SourceCapability};

pub use swipekit_geometry::{Direction, PinchDirection, Point, Rect};
