//! Recognizer configuration: thresholds, firing policy, handler slots, and
//! the by-name option accessor exposed after attachment.

use std::fmt;

use crate::handlers::{
    ExcludedRegion, PinchHandler, PinchStatusHandler, SwipeHandler, SwipeStatusHandler, TapHandler,
};
use swipekit_geometry::Rect;

/// Small fixed movement allowance under which a long press still counts as
/// stationary.
pub const JITTER_ALLOWANCE: f32 = 10.0;

/// Required number of simultaneous contacts for swipe classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FingerCount {
    Exact(u8),
    /// Any contact count qualifies.
    All,
}

impl FingerCount {
    pub fn matches(self, count: u8) -> bool {
        match self {
            FingerCount::Exact(required) => count == required,
            FingerCount::All => true,
        }
    }
}

/// How the host should treat page scrolling while a gesture is tracked.
///
/// The recognizer never scrolls anything itself; it reports a
/// suppress-scroll decision per processed event and the transport applies
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageScroll {
    /// Suppress scrolling only along axes with registered swipe handlers.
    Auto,
    /// Suppress all scrolling during gestures.
    None,
    /// Leave horizontal scrolling to the page.
    Horizontal,
    /// Leave vertical scrolling to the page.
    Vertical,
}

/// A configuration value read or written through the by-name accessor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionValue {
    Fingers(FingerCount),
    Distance(Option<f32>),
    Millis(Option<u64>),
    Flag(bool),
    Scroll(PageScroll),
}

/// Configuration errors surfaced by the option accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption { name: String },
    TypeMismatch { name: String, expected: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "unknown option: {name}"),
            ConfigError::TypeMismatch { name, expected } => {
                write!(f, "option {name} expects {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Full recognizer configuration: thresholds, firing policy, and one
/// handler slot per gesture. Immutable for the lifetime of one session;
/// scalar values may be changed between sessions through
/// [`crate::Recognizer::set_option`].
pub struct Settings {
    /// Required simultaneous contact count for swipes and pinches.
    pub fingers: FingerCount,
    /// Minimum travel for a swipe, in screen units. `None` disables the
    /// distance check.
    pub threshold: Option<f32>,
    /// Reversal margin that cancels an in-flight swipe. `None` disables
    /// swipe-back cancellation.
    pub cancel_threshold: Option<f32>,
    /// Minimum separation change for a pinch.
    pub pinch_threshold: Option<f32>,
    /// Maximum duration for a valid swipe, exclusive: a swipe lasting
    /// exactly this long is already too slow. `None` disables the time
    /// check.
    pub max_time_threshold: Option<u64>,
    /// Grace window after a partial multi-contact lift-off.
    pub release_grace_ms: u64,
    /// Duration after which a stationary press becomes a long-tap / hold.
    pub long_tap_ms: u64,
    /// Maximum gap between two taps forming a double-tap.
    pub double_tap_ms: u64,
    /// Fire terminal gestures only when the last contact lifts (default),
    /// or progressively as soon as the metrics qualify.
    pub fire_on_release: bool,
    /// Also fire when a tracked contact leaves `bounds`.
    pub trigger_on_leave: bool,
    /// Page-scroll suppression policy. Left unset, it resolves at attach
    /// time: `None` (suppress everything) when a swipe or swipe-status
    /// handler is registered, `Auto` otherwise.
    pub page_scroll: Option<PageScroll>,
    /// Master switch for all scroll suppression.
    pub prevent_default: bool,
    /// Allow falling back to a mouse source when neither touch nor pointer
    /// input is available.
    pub fallback_to_mouse_events: bool,
    /// Element bounds used by leave detection. Provided by the host; the
    /// recognizer performs no geometry lookup of its own.
    pub bounds: Option<Rect>,
    /// Contacts starting inside an excluded region never start a session.
    pub excluded: Option<ExcludedRegion>,

    pub on_swipe: Option<SwipeHandler>,
    pub on_swipe_left: Option<SwipeHandler>,
    pub on_swipe_right: Option<SwipeHandler>,
    pub on_swipe_up: Option<SwipeHandler>,
    pub on_swipe_down: Option<SwipeHandler>,
    pub on_swipe_status: Option<SwipeStatusHandler>,
    pub on_pinch_in: Option<PinchHandler>,
    pub on_pinch_out: Option<PinchHandler>,
    pub on_pinch_status: Option<PinchStatusHandler>,
    pub on_tap: Option<TapHandler>,
    pub on_double_tap: Option<TapHandler>,
    pub on_long_tap: Option<TapHandler>,
    pub on_hold: Option<TapHandler>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fingers: FingerCount::Exact(1),
            threshold: Some(75.0),
            cancel_threshold: None,
            pinch_threshold: Some(20.0),
            max_time_threshold: None,
            release_grace_ms: 250,
            long_tap_ms: 500,
            double_tap_ms: 200,
            fire_on_release: true,
            trigger_on_leave: false,
            page_scroll: None,
            prevent_default: true,
            fallback_to_mouse_events: true,
            bounds: None,
            excluded: None,
            on_swipe: None,
            on_swipe_left: None,
            on_swipe_right: None,
            on_swipe_up: None,
            on_swipe_down: None,
            on_swipe_status: None,
            on_pinch_in: None,
            on_pinch_out: None,
            on_pinch_status: None,
            on_tap: None,
            on_double_tap: None,
            on_long_tap: None,
            on_hold: None,
        }
    }
}

impl Settings {
    /// Whether the caller registered interest in any swipe output.
    pub fn has_swipes(&self) -> bool {
        self.on_swipe.is_some()
            || self.on_swipe_status.is_some()
            || self.on_swipe_left.is_some()
            || self.on_swipe_right.is_some()
            || self.on_swipe_up.is_some()
            || self.on_swipe_down.is_some()
    }

    /// Whether the caller registered interest in any pinch output.
    pub fn has_pinches(&self) -> bool {
        self.on_pinch_status.is_some() || self.on_pinch_in.is_some() || self.on_pinch_out.is_some()
    }

    pub fn has_tap(&self) -> bool {
        self.on_tap.is_some()
    }

    pub fn has_double_tap(&self) -> bool {
        self.on_double_tap.is_some()
    }

    pub fn has_long_tap(&self) -> bool {
        self.on_long_tap.is_some()
    }

    pub fn has_hold(&self) -> bool {
        self.on_hold.is_some()
    }

    pub fn has_status(&self) -> bool {
        self.on_swipe_status.is_some() || self.on_pinch_status.is_some()
    }

    /// Resolves the page-scroll policy the way attachment does: an unset
    /// policy defaults to suppressing everything when swipe output is
    /// wired, and to free scrolling otherwise.
    pub fn resolve_page_scroll(&mut self) {
        if self.page_scroll.is_none() {
            self.page_scroll = Some(if self.on_swipe.is_some() || self.on_swipe_status.is_some() {
                PageScroll::None
            } else {
                PageScroll::Auto
            });
        }
    }

    /// Reads a configuration value by name. Unrecognized names error.
    pub fn option(&self, name: &str) -> Result<OptionValue, ConfigError> {
        let value = match name {
            "fingers" => OptionValue::Fingers(self.fingers),
            "threshold" => OptionValue::Distance(self.threshold),
            "cancel_threshold" => OptionValue::Distance(self.cancel_threshold),
            "pinch_threshold" => OptionValue::Distance(self.pinch_threshold),
            "max_time_threshold" => OptionValue::Millis(self.max_time_threshold),
            "release_grace" => OptionValue::Millis(Some(self.release_grace_ms)),
            "long_tap" => OptionValue::Millis(Some(self.long_tap_ms)),
            "double_tap" => OptionValue::Millis(Some(self.double_tap_ms)),
            "fire_on_release" => OptionValue::Flag(self.fire_on_release),
            "trigger_on_leave" => OptionValue::Flag(self.trigger_on_leave),
            "prevent_default" => OptionValue::Flag(self.prevent_default),
            "fallback_to_mouse_events" => OptionValue::Flag(self.fallback_to_mouse_events),
            "page_scroll" => OptionValue::Scroll(self.page_scroll.unwrap_or(PageScroll::Auto)),
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_owned(),
                })
            }
        };
        Ok(value)
    }

    /// Writes a configuration value by name. Unrecognized names and
    /// mismatched value variants error; the stored configuration is left
    /// untouched on error.
    pub fn set_option(&mut self, name: &str, value: OptionValue) -> Result<(), ConfigError> {
        fn mismatch(name: &str, expected: &'static str) -> ConfigError {
            ConfigError::TypeMismatch {
                name: name.to_owned(),
                expected,
            }
        }

        match (name, value) {
            ("fingers", OptionValue::Fingers(v)) => self.fingers = v,
            ("threshold", OptionValue::Distance(v)) => self.threshold = v,
            ("cancel_threshold", OptionValue::Distance(v)) => self.cancel_threshold = v,
            ("pinch_threshold", OptionValue::Distance(v)) => self.pinch_threshold = v,
            ("max_time_threshold", OptionValue::Millis(v)) => self.max_time_threshold = v,
            ("release_grace", OptionValue::Millis(Some(v))) => self.release_grace_ms = v,
            ("long_tap", OptionValue::Millis(Some(v))) => self.long_tap_ms = v,
            ("double_tap", OptionValue::Millis(Some(v))) => self.double_tap_ms = v,
            ("fire_on_release", OptionValue::Flag(v)) => self.fire_on_release = v,
            ("trigger_on_leave", OptionValue::Flag(v)) => self.trigger_on_leave = v,
            ("prevent_default", OptionValue::Flag(v)) => self.prevent_default = v,
            ("fallback_to_mouse_events", OptionValue::Flag(v)) => {
                self.fallback_to_mouse_events = v
            }
            ("page_scroll", OptionValue::Scroll(v)) => self.page_scroll = Some(v),
            ("fingers", _) => return Err(mismatch(name, "a finger count")),
            (
                "threshold" | "cancel_threshold" | "pinch_threshold",
                _,
            ) => return Err(mismatch(name, "a distance")),
            (
                "max_time_threshold" | "release_grace" | "long_tap" | "double_tap",
                _,
            ) => return Err(mismatch(name, "milliseconds")),
            (
                "fire_on_release" | "trigger_on_leave" | "prevent_default"
                | "fallback_to_mouse_events",
                _,
            ) => return Err(mismatch(name, "a flag")),
            ("page_scroll", _) => return Err(mismatch(name, "a scroll policy")),
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_owned(),
                })
            }
        }
        Ok(())
    }
}
