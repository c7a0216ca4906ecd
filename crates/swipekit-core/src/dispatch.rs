//! The dispatch controller: decides which handlers fire for each phase
//! transition and in what order.
//!
//! Firing policy, per phase: the generic status handlers first (swipe
//! status, then pinch status), each able to veto the rest of the phase;
//! then, on a successful end, the terminal gesture and its directional
//! specialization. The tap family only runs when no swipe or pinch
//! capability is registered, and at most one of its members fires.

use swipekit_geometry::Direction;

use crate::classifier;
use crate::config::PageScroll;
use crate::handlers::{DispatchResult, PinchReport, SwipeReport, TapReport};
use crate::recognizer::Recognizer;
use crate::session::Phase;

impl Recognizer {
    /// Dispatches one phase transition. Exactly one terminal gesture can
    /// fire per completed session; the status streams may fire many times.
    pub(crate) fn trigger_handler(&mut self, phase: Phase, now: u64) -> DispatchResult {
        let mut ret = DispatchResult::Continue;

        let swipe_like = self.did_swipe() || self.settings.has_swipes();
        let pinch_like = self.did_pinch() || self.settings.has_pinches();

        if swipe_like || pinch_like {
            if swipe_like {
                ret = self.trigger_swipe(phase);
            }
            if pinch_like && ret == DispatchResult::Continue {
                ret = self.trigger_pinch(phase);
            }
        } else if self.did_double_tap(now) {
            ret = self.trigger_double_tap(phase);
        } else if self.did_long_tap() {
            ret = self.trigger_long_tap(phase);
        } else if self.did_tap() {
            ret = self.trigger_tap(phase, now);
        }

        if phase == Phase::Cancel {
            self.reset_session();
        }
        if phase == Phase::End && (!self.counts_contacts || self.live_contacts == 0) {
            self.reset_session();
        }

        ret
    }

    fn trigger_swipe(&mut self, phase: Phase) -> DispatchResult {
        let report = self.swipe_report();

        if let Some(handler) = self.settings.on_swipe_status.as_mut() {
            if handler(phase, &report) == DispatchResult::Suppress {
                return DispatchResult::Suppress;
            }
        }

        if phase == Phase::End && self.did_swipe() {
            log::debug!(
                "swipe {:?} distance {} duration {}ms",
                report.direction,
                report.distance,
                report.duration
            );

            if let Some(handler) = self.settings.on_swipe.as_mut() {
                if handler(&report) == DispatchResult::Suppress {
                    return DispatchResult::Suppress;
                }
            }

            let directional = match report.direction {
                Some(Direction::Left) => self.settings.on_swipe_left.as_mut(),
                Some(Direction::Right) => self.settings.on_swipe_right.as_mut(),
                Some(Direction::Up) => self.settings.on_swipe_up.as_mut(),
                Some(Direction::Down) => self.settings.on_swipe_down.as_mut(),
                None => None,
            };
            if let Some(handler) = directional {
                return handler(&report);
            }
        }

        DispatchResult::Continue
    }

    fn trigger_pinch(&mut self, phase: Phase) -> DispatchResult {
        let report = self.pinch_report();

        if let Some(handler) = self.settings.on_pinch_status.as_mut() {
            if handler(phase, &report) == DispatchResult::Suppress {
                return DispatchResult::Suppress;
            }
        }

        if phase == Phase::End && self.did_pinch() {
            log::debug!(
                "pinch {:?} zoom {} distance {}",
                report.direction,
                report.zoom,
                report.distance
            );

            let terminal = match report.direction {
                Some(swipekit_geometry::PinchDirection::In) => self.settings.on_pinch_in.as_mut(),
                Some(swipekit_geometry::PinchDirection::Out) => {
                    self.settings.on_pinch_out.as_mut()
                }
                None => None,
            };
            if let Some(handler) = terminal {
                return handler(&report);
            }
        }

        DispatchResult::Continue
    }

    /// Plain tap dispatch, with double-tap arbitration: when a double-tap
    /// handler is registered and no window is open yet, the tap is
    /// deferred until the double-tap gap elapses; otherwise it fires
    /// immediately.
    pub(crate) fn trigger_tap(&mut self, phase: Phase, now: u64) -> DispatchResult {
        if !matches!(phase, Phase::End | Phase::Cancel) {
            return DispatchResult::Continue;
        }

        self.scheduler.cancel_deferred_tap();
        self.scheduler.cancel_hold();

        if self.settings.has_double_tap() && !self.did_double_tap(now) {
            log::debug!("tap deferred for double-tap window");
            self.tap_window_started = Some(now);
            let report = self.tap_report();
            self.scheduler
                .schedule_deferred_tap(now + self.settings.double_tap_ms, report);
            DispatchResult::Continue
        } else {
            log::debug!("tap");
            self.tap_window_started = None;
            let report = self.tap_report();
            match self.settings.on_tap.as_mut() {
                Some(handler) => handler(&report),
                None => DispatchResult::Continue,
            }
        }
    }

    fn trigger_double_tap(&mut self, phase: Phase) -> DispatchResult {
        if !matches!(phase, Phase::End | Phase::Cancel) {
            return DispatchResult::Continue;
        }

        log::debug!("double tap");
        self.scheduler.cancel_deferred_tap();
        self.tap_window_started = None;
        let report = self.tap_report();
        match self.settings.on_double_tap.as_mut() {
            Some(handler) => handler(&report),
            None => DispatchResult::Continue,
        }
    }

    fn trigger_long_tap(&mut self, phase: Phase) -> DispatchResult {
        if !matches!(phase, Phase::End | Phase::Cancel) {
            return DispatchResult::Continue;
        }

        log::debug!("long tap, duration {}ms", self.session.duration());
        self.scheduler.cancel_deferred_tap();
        self.tap_window_started = None;
        let report = self.tap_report();
        match self.settings.on_long_tap.as_mut() {
            Some(handler) => handler(&report),
            None => DispatchResult::Continue,
        }
    }

    /// Whether the transport should suppress the platform page scroll for
    /// a move in `travel` direction, per the configured policy.
    pub(crate) fn scroll_suppression(&self, travel: Direction) -> bool {
        if !self.settings.prevent_default {
            return false;
        }

        let policy = self.settings.page_scroll.unwrap_or(PageScroll::Auto);
        if policy == PageScroll::None {
            return true;
        }
        let auto = policy == PageScroll::Auto;

        if travel.is_horizontal() {
            let wired = match travel {
                Direction::Left => self.settings.on_swipe_left.is_some(),
                _ => self.settings.on_swipe_right.is_some(),
            };
            (auto && wired) || (!auto && policy != PageScroll::Horizontal)
        } else {
            let wired = match travel {
                Direction::Up => self.settings.on_swipe_up.is_some(),
                _ => self.settings.on_swipe_down.is_some(),
            };
            (auto && wired) || (!auto && policy != PageScroll::Vertical)
        }
    }

    // Capability + validity, per gesture.

    pub(crate) fn did_swipe(&self) -> bool {
        self.settings.has_swipes()
            && classifier::validate_swipe(
                &self.session,
                self.tracker.primary(),
                &self.settings,
                self.counts_contacts,
            )
    }

    pub(crate) fn did_pinch(&self) -> bool {
        self.settings.has_pinches()
            && classifier::validate_pinch(
                &self.session,
                self.tracker.primary(),
                &self.settings,
                self.counts_contacts,
            )
    }

    pub(crate) fn did_tap(&self) -> bool {
        self.settings.has_tap()
            && classifier::validate_tap(&self.session, &self.settings, self.counts_contacts)
    }

    pub(crate) fn did_double_tap(&self, now: u64) -> bool {
        self.settings.has_double_tap()
            && classifier::validate_double_tap(self.tap_window_started, now, &self.settings)
    }

    pub(crate) fn did_long_tap(&self) -> bool {
        self.settings.has_long_tap() && classifier::validate_long_tap(&self.session, &self.settings)
    }

    fn swipe_report(&self) -> SwipeReport {
        SwipeReport {
            direction: self.session.direction,
            distance: self.session.distance,
            duration: self.session.duration(),
            contact_count: self.session.contact_count,
            contacts: self.tracker.snapshot(),
        }
    }

    fn pinch_report(&self) -> PinchReport {
        PinchReport {
            direction: self.session.pinch_direction,
            distance: self.session.pinch_distance,
            duration: self.session.duration(),
            contact_count: self.session.contact_count,
            zoom: self.session.pinch_zoom,
            contacts: self.tracker.snapshot(),
        }
    }

    fn tap_report(&self) -> TapReport {
        TapReport {
            position: self.tracker.primary().start,
            duration: self.session.duration(),
        }
    }
}
