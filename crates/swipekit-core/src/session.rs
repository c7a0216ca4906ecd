//! The gesture session: live state for one interaction from first contact
//! to release or cancel.

use swipekit_geometry::{Direction, PinchDirection};

use crate::config::Settings;

/// Lifecycle phase of a session. A session only advances through
/// `Start -> Move* -> (End | Cancel)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Move,
    End,
    Cancel,
}

/// Largest distance observed while travelling in each cardinal direction.
/// Feeds swipe-back cancellation: reversing past the cancel margin after
/// having travelled far in one direction cancels the swipe.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionMaxima([f32; 4]);

impl DirectionMaxima {
    pub fn record(&mut self, direction: Direction, distance: f32) {
        let slot = &mut self.0[direction.index()];
        *slot = slot.max(distance);
    }

    pub fn get(&self, direction: Direction) -> f32 {
        self.0[direction.index()]
    }

    pub fn reset(&mut self) {
        self.0 = [0.0; 4];
    }
}

/// Grace window opened when part of a multi-contact gesture lifts before
/// the rest. Finalization waits for the last contact (or window expiry)
/// and classifies with the pre-release contact count.
#[derive(Clone, Copy, Debug, Default)]
struct ReleaseWindow {
    /// Time of the partial lift; 0 when no window is open.
    ended_at: u64,
    /// Contact count before the lift, taken from the triggering event.
    contact_count: u8,
}

/// Live interaction state, recreated at the start of each contact
/// sequence.
#[derive(Debug)]
pub struct Session {
    pub phase: Phase,
    pub contact_count: u8,
    pub start_time: u64,
    pub end_time: u64,
    pub distance: f32,
    pub direction: Option<Direction>,
    pub pinch_start_separation: f32,
    pub pinch_end_separation: f32,
    pub pinch_zoom: f32,
    pub pinch_distance: f32,
    pub pinch_direction: Option<PinchDirection>,
    maxima: DirectionMaxima,
    release: ReleaseWindow,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Start,
            contact_count: 0,
            start_time: 0,
            end_time: 0,
            distance: 0.0,
            direction: None,
            pinch_start_separation: 0.0,
            pinch_end_separation: 0.0,
            pinch_zoom: 1.0,
            pinch_distance: 0.0,
            pinch_direction: None,
            maxima: DirectionMaxima::default(),
            release: ReleaseWindow::default(),
        }
    }

    /// Resets all derived metrics for a fresh session starting at `Start`.
    pub fn begin(&mut self) {
        self.phase = Phase::Start;
        self.distance = 0.0;
        self.direction = None;
        self.pinch_direction = None;
        self.start_time = 0;
        self.end_time = 0;
        self.pinch_start_separation = 0.0;
        self.pinch_end_separation = 0.0;
        self.pinch_zoom = 1.0;
        self.pinch_distance = 0.0;
        self.maxima.reset();
        self.cancel_release_window();
    }

    /// Clears the counters a transport cancel wipes.
    pub fn clear(&mut self) {
        self.contact_count = 0;
        self.start_time = 0;
        self.end_time = 0;
        self.pinch_start_separation = 0.0;
        self.pinch_end_separation = 0.0;
        self.pinch_zoom = 1.0;
        self.cancel_release_window();
    }

    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }

    pub fn record_max_distance(&mut self, direction: Direction, distance: f32) {
        self.maxima.record(direction, distance);
    }

    pub fn max_distance(&self, direction: Direction) -> f32 {
        self.maxima.get(direction)
    }

    /// Opens the multi-contact release grace window. `contact_count` is the
    /// pre-release count, derived from the event that triggered the partial
    /// lift (remaining contacts plus the one that lifted).
    pub fn start_release_window(&mut self, now: u64, contact_count: u8) {
        self.release.ended_at = now;
        self.release.contact_count = contact_count;
    }

    pub fn cancel_release_window(&mut self) {
        self.release = ReleaseWindow::default();
    }

    /// Whether a partial lift happened within the grace window ending now.
    pub fn in_release_window(&self, now: u64, grace_ms: u64) -> bool {
        self.release.ended_at != 0 && now.saturating_sub(self.release.ended_at) <= grace_ms
    }

    /// Pre-release contact count recorded by the open window, if any.
    pub fn release_contact_count(&self) -> Option<u8> {
        (self.release.ended_at != 0).then_some(self.release.contact_count)
    }

    /// The next phase an end-like transition should move to, given the
    /// firing policy and current validity.
    pub fn next_phase(&self, current: Phase, settings: &Settings) -> Phase {
        let valid_time = crate::classifier::validate_swipe_time(self, settings);
        let valid_distance = crate::classifier::validate_swipe_distance(self, settings);
        let did_cancel = crate::classifier::did_swipe_back_to_cancel(self, settings);

        if !valid_time || did_cancel {
            Phase::Cancel
        } else if valid_distance
            && current == Phase::Move
            && (!settings.fire_on_release || settings.trigger_on_leave)
        {
            Phase::End
        } else if !valid_distance && current == Phase::End && settings.trigger_on_leave {
            Phase::Cancel
        } else {
            current
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
