//! Gesture callback slots and the data passed to them.
//!
//! Every handler returns a [`DispatchResult`]; returning
//! [`DispatchResult::Suppress`] vetoes further dispatch for the current
//! phase and forces the session into cancel.

use crate::contact::{Contact, MAX_CONTACTS};
use crate::session::Phase;
use swipekit_geometry::{Direction, PinchDirection, Point};

/// Control-flow result returned by every gesture and status handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    /// Keep dispatching for this phase.
    Continue,
    /// Abort further dispatch for this phase and cancel the session.
    Suppress,
}

/// Metrics reported to swipe and swipe-status handlers.
#[derive(Clone, Copy, Debug)]
pub struct SwipeReport {
    pub direction: Option<Direction>,
    pub distance: f32,
    pub duration: u64,
    pub contact_count: u8,
    pub contacts: [Contact; MAX_CONTACTS],
}

/// Metrics reported to pinch and pinch-status handlers.
#[derive(Clone, Copy, Debug)]
pub struct PinchReport {
    pub direction: Option<PinchDirection>,
    pub distance: f32,
    pub duration: u64,
    pub contact_count: u8,
    pub zoom: f32,
    pub contacts: [Contact; MAX_CONTACTS],
}

/// Metrics reported to the tap family (tap, double-tap, long-tap) and hold.
#[derive(Clone, Copy, Debug)]
pub struct TapReport {
    /// Where the contact started.
    pub position: Point,
    pub duration: u64,
}

pub type SwipeHandler = Box<dyn FnMut(&SwipeReport) -> DispatchResult>;
pub type SwipeStatusHandler = Box<dyn FnMut(Phase, &SwipeReport) -> DispatchResult>;
pub type PinchHandler = Box<dyn FnMut(&PinchReport) -> DispatchResult>;
pub type PinchStatusHandler = Box<dyn FnMut(Phase, &PinchReport) -> DispatchResult>;
pub type TapHandler = Box<dyn FnMut(&TapReport) -> DispatchResult>;

/// Predicate marking regions where contacts must not start a session.
pub type ExcludedRegion = Box<dyn Fn(Point) -> bool>;
