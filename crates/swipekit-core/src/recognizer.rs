//! The attached recognizer instance: session orchestration and the public
//! lifecycle surface.
//!
//! A `Recognizer` is an explicit object returned from [`Recognizer::attach`]
//! and owned by the caller. It consumes [`ContactEvent`]s, drives the
//! session state machine, and fires the configured handlers through the
//! dispatch controller in [`crate::dispatch`].

use swipekit_geometry::{direction, distance, pinch_direction, separation, zoom_ratio};

use crate::classifier;
use crate::config::{ConfigError, OptionValue, Settings};
use crate::contact::ContactTracker;
use crate::events::{ContactEvent, ContactEventKind, ProcessOutcome};
use crate::handlers::{DispatchResult, TapReport};
use crate::session::{Phase, Session};
use crate::source::{select_source, AttachError, SourceCapability};
use crate::tasks::{Scheduler, TaskKind};

/// Which event kinds the recognizer currently listens for. Begin and
/// cancel are bound while attached; move, end, and leave only while a
/// session is in progress.
#[derive(Clone, Copy, Debug)]
struct Listeners {
    begin_cancel: bool,
    in_session: bool,
}

/// A gesture recognizer attached to one element.
pub struct Recognizer {
    pub(crate) settings: Settings,
    pub(crate) session: Session,
    pub(crate) tracker: ContactTracker,
    pub(crate) scheduler: Scheduler,
    /// Whether the selected source reports discrete simultaneous contacts.
    pub(crate) counts_contacts: bool,
    /// Start of the open double-tap window (time of the first tap's
    /// release), if one is open.
    pub(crate) tap_window_started: Option<u64>,
    /// Contacts on the surface after the last processed event.
    pub(crate) live_contacts: u8,
    source: SourceCapability,
    listeners: Listeners,
}

impl Recognizer {
    /// Attaches a recognizer configured with `settings` to an element whose
    /// transport offers the given capabilities. Fails when no supported
    /// source is available.
    pub fn attach(
        mut settings: Settings,
        available: &[SourceCapability],
    ) -> Result<Self, AttachError> {
        let source = select_source(available, settings.fallback_to_mouse_events)?;
        settings.resolve_page_scroll();
        log::debug!("recognizer attached, source {source:?}");

        Ok(Self {
            counts_contacts: source.counts_contacts(),
            settings,
            session: Session::new(),
            tracker: ContactTracker::new(),
            scheduler: Scheduler::new(),
            tap_window_started: None,
            live_contacts: 0,
            source,
            listeners: Listeners {
                begin_cancel: true,
                in_session: false,
            },
        })
    }

    /// The input source selected at attach time.
    pub fn source(&self) -> SourceCapability {
        self.source
    }

    /// Current session phase.
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Whether a session is currently being tracked.
    pub fn in_progress(&self) -> bool {
        self.listeners.in_session
    }

    /// Reads a configuration value by name.
    pub fn option(&self, name: &str) -> Result<OptionValue, ConfigError> {
        self.settings.option(name)
    }

    /// Writes a configuration value by name. Takes effect for the next
    /// session.
    pub fn set_option(&mut self, name: &str, value: OptionValue) -> Result<(), ConfigError> {
        self.settings.set_option(name, value)
    }

    /// Re-enables session tracking: listen for begin and cancel again.
    pub fn enable(&mut self) {
        self.listeners.begin_cancel = true;
    }

    /// Detaches the in-session listeners (move, end, leave), aborting any
    /// session in flight. Begin and cancel stay bound.
    pub fn disable(&mut self) {
        self.listeners.in_session = false;
        self.reset_session();
        self.scheduler.cancel_all();
        log::debug!("recognizer disabled");
    }

    /// Fully detaches and releases the recognizer.
    pub fn destroy(mut self) {
        self.listeners.begin_cancel = false;
        self.listeners.in_session = false;
        self.scheduler.cancel_all();
        log::debug!("recognizer destroyed");
    }

    /// Fires any deferred task whose deadline is at or before `now`. The
    /// host should pump this between events so deferred taps and holds
    /// fire on time; `process` also drains due tasks before each event.
    pub fn advance(&mut self, now: u64) {
        // Collect first: firing a task runs user handlers.
        let due: Vec<TaskKind> = self.scheduler.due(now).collect();
        for task in due {
            match task {
                TaskKind::DeferredTap(report) => {
                    self.tap_window_started = None;
                    log::debug!("deferred tap fired");
                    if let Some(handler) = self.settings.on_tap.as_mut() {
                        let _ = handler(&report);
                    }
                }
                TaskKind::Hold(report) => {
                    log::debug!("hold fired");
                    if let Some(handler) = self.settings.on_hold.as_mut() {
                        let _ = handler(&report);
                    }
                }
            }
        }
    }

    /// Processes one contact event. Returns whether the event advanced a
    /// session and whether the transport should suppress the platform
    /// default for it.
    pub fn process(&mut self, event: &ContactEvent) -> ProcessOutcome {
        self.advance(event.timestamp);

        match event.kind {
            ContactEventKind::Begin if self.listeners.begin_cancel => self.on_begin(event),
            ContactEventKind::Cancel if self.listeners.begin_cancel => self.on_cancel(),
            ContactEventKind::Move if self.listeners.in_session => self.on_move(event),
            ContactEventKind::End if self.listeners.in_session => self.on_end(event),
            ContactEventKind::Leave if self.listeners.in_session => self.on_leave(event),
            _ => ProcessOutcome::IGNORED,
        }
    }

    fn on_begin(&mut self, event: &ContactEvent) -> ProcessOutcome {
        // No re-entrancy: one session at a time.
        if self.listeners.in_session {
            return ProcessOutcome::IGNORED;
        }
        let Some(primary) = event.primary().copied() else {
            return ProcessOutcome::IGNORED;
        };
        if let Some(excluded) = self.settings.excluded.as_ref() {
            if excluded(primary.position) {
                return ProcessOutcome::IGNORED;
            }
        }

        log::debug!("session begin at {:?}", primary.position);

        self.session.begin();
        self.tracker.reset();
        // Any new session clears all pending deferred work. Due tasks were
        // already drained against this event's timestamp.
        self.scheduler.cancel_all();

        self.live_contacts = if self.counts_contacts {
            event.samples.len() as u8
        } else {
            1
        };
        self.session.contact_count = self.live_contacts;

        // The transport handles its own default for touch; for mouse and
        // pointer feeds the begin itself suppresses the platform default.
        let suppress = !self.counts_contacts && self.settings.prevent_default;

        let mut ret = DispatchResult::Continue;
        let count_ok = !self.counts_contacts
            || self.settings.fingers.matches(self.session.contact_count)
            || self.settings.has_pinches();

        if count_ok {
            self.tracker
                .create(0, primary.identifier, primary.position);
            self.session.start_time = event.timestamp;

            if self.session.contact_count == 2 {
                if let Some(second) = event.samples.get(1).copied() {
                    self.tracker.create(1, second.identifier, second.position);
                    let sep = separation(
                        self.tracker.primary().start,
                        self.tracker.secondary().start,
                    );
                    self.session.pinch_start_separation = sep;
                    self.session.pinch_end_separation = sep;
                }
            }

            if self.settings.has_status() {
                ret = self.trigger_handler(Phase::Start, event.timestamp);
            }
        } else {
            ret = DispatchResult::Suppress;
        }

        if ret == DispatchResult::Suppress {
            self.session.phase = Phase::Cancel;
            self.trigger_handler(Phase::Cancel, event.timestamp);
            return ProcessOutcome::handled(suppress);
        }

        if self.settings.has_hold() {
            let report = TapReport {
                position: primary.position,
                duration: self.settings.long_tap_ms,
            };
            self.scheduler
                .schedule_hold(event.timestamp + self.settings.long_tap_ms, report);
        }

        self.listeners.in_session = true;
        ProcessOutcome::handled(suppress)
    }

    fn on_move(&mut self, event: &ContactEvent) -> ProcessOutcome {
        if self.session.phase == Phase::End
            || self.session.phase == Phase::Cancel
            || self
                .session
                .in_release_window(event.timestamp, self.settings.release_grace_ms)
        {
            return ProcessOutcome::IGNORED;
        }
        let Some(primary) = event.primary().copied() else {
            return ProcessOutcome::IGNORED;
        };
        let Some(current) = self.tracker.update(primary.identifier, primary.position) else {
            return ProcessOutcome::IGNORED;
        };

        self.session.end_time = event.timestamp;
        if self.counts_contacts {
            self.live_contacts = event.samples.len() as u8;
            self.session.contact_count = self.live_contacts;
        }
        // Movement disarms the hold deadline.
        self.scheduler.cancel_hold();
        self.session.phase = Phase::Move;

        if self.session.contact_count == 2 {
            if self.session.pinch_start_separation == 0.0 {
                // Second contact arrived mid-session; adopt it now.
                if let Some(second) = event.samples.get(1).copied() {
                    self.tracker.create(1, second.identifier, second.position);
                    let sep = separation(
                        self.tracker.primary().start,
                        self.tracker.secondary().start,
                    );
                    self.session.pinch_start_separation = sep;
                    self.session.pinch_end_separation = sep;
                }
            } else {
                if let Some(second) = event.samples.get(1).copied() {
                    self.tracker.update(second.identifier, second.position);
                }
                self.session.pinch_end_separation = separation(
                    self.tracker.primary().end,
                    self.tracker.secondary().end,
                );
            }
            self.session.pinch_zoom = zoom_ratio(
                self.session.pinch_start_separation,
                self.session.pinch_end_separation,
            );
            self.session.pinch_direction = Some(pinch_direction(self.session.pinch_zoom));
            self.session.pinch_distance =
                (self.session.pinch_start_separation - self.session.pinch_end_separation).abs();
        }

        let mut suppress = false;
        let mut ret = DispatchResult::Continue;
        let count_ok = !self.counts_contacts
            || self.settings.fingers.matches(self.session.contact_count)
            || self.settings.has_pinches();

        if count_ok {
            let travel = direction(current.start, current.end);
            self.session.direction = Some(travel);
            suppress = self.scroll_suppression(travel);
            self.session.distance = distance(current.start, current.end);
            self.session.record_max_distance(travel, self.session.distance);

            log::trace!(
                "move: {travel:?} distance {} phase {:?}",
                self.session.distance,
                self.session.phase
            );

            if self.settings.has_status() {
                ret = self.trigger_handler(Phase::Move, event.timestamp);
            }

            if !self.settings.fire_on_release || self.settings.trigger_on_leave {
                let in_bounds = if self.settings.trigger_on_leave {
                    self.settings
                        .bounds
                        .map_or(true, |bounds| bounds.contains_exclusive(current.end))
                } else {
                    true
                };

                if !self.settings.fire_on_release && in_bounds {
                    self.session.phase = self.session.next_phase(Phase::Move, &self.settings);
                } else if self.settings.trigger_on_leave && !in_bounds {
                    self.session.phase = self.session.next_phase(Phase::End, &self.settings);
                }

                if matches!(self.session.phase, Phase::Cancel | Phase::End) {
                    let phase = self.session.phase;
                    self.trigger_handler(phase, event.timestamp);
                }
            }
        } else {
            self.session.phase = Phase::Cancel;
            self.trigger_handler(Phase::Cancel, event.timestamp);
        }

        if ret == DispatchResult::Suppress {
            self.session.phase = Phase::Cancel;
            self.trigger_handler(Phase::Cancel, event.timestamp);
        }

        ProcessOutcome::handled(suppress)
    }

    fn on_end(&mut self, event: &ContactEvent) -> ProcessOutcome {
        if self.counts_contacts && !event.samples.is_empty() {
            // Part of a multi-contact gesture lifted; wait for the rest.
            // The pre-release count comes from this event: the remaining
            // contacts plus the one that just lifted.
            let before_release = event.samples.len() as u8 + 1;
            self.session
                .start_release_window(event.timestamp, before_release);
            log::debug!("release window opened, {before_release} contacts before lift");
            return ProcessOutcome::handled(false);
        }

        if self
            .session
            .in_release_window(event.timestamp, self.settings.release_grace_ms)
        {
            if let Some(count) = self.session.release_contact_count() {
                self.session.contact_count = count;
            }
        }
        self.live_contacts = 0;

        self.session.end_time = event.timestamp;
        let mut suppress = false;

        if classifier::did_swipe_back_to_cancel(&self.session, &self.settings)
            || !classifier::validate_swipe_distance(&self.session, &self.settings)
        {
            self.session.phase = Phase::Cancel;
            self.trigger_handler(Phase::Cancel, event.timestamp);
        } else if (self.settings.fire_on_release && self.session.phase != Phase::End)
            || (!self.settings.fire_on_release && self.session.phase == Phase::Move)
        {
            // The phase check keeps a leave-triggered End, which already
            // dispatched the terminal gesture, from firing again here.
            suppress = self.settings.prevent_default;
            self.session.phase = Phase::End;
            self.trigger_handler(Phase::End, event.timestamp);
        } else if !self.settings.fire_on_release && self.settings.has_tap() {
            // Progressive firing already dispatched (or skipped) the
            // swipe; the release itself still resolves as a tap.
            self.session.phase = Phase::End;
            self.trigger_tap(Phase::End, event.timestamp);
        } else if self.session.phase == Phase::Move {
            self.session.phase = Phase::Cancel;
            self.trigger_handler(Phase::Cancel, event.timestamp);
        }

        self.listeners.in_session = false;
        ProcessOutcome::handled(suppress)
    }

    fn on_cancel(&mut self) -> ProcessOutcome {
        log::debug!("session cancelled by transport");
        self.reset_session();
        ProcessOutcome::handled(false)
    }

    fn on_leave(&mut self, event: &ContactEvent) -> ProcessOutcome {
        if !self.settings.trigger_on_leave {
            return ProcessOutcome::IGNORED;
        }
        let phase = self.session.next_phase(Phase::End, &self.settings);
        self.session.phase = phase;
        self.trigger_handler(phase, event.timestamp);
        ProcessOutcome::handled(false)
    }

    /// Clears session and release state after a completed or cancelled
    /// interaction. The open double-tap window survives: it spans
    /// sessions by design.
    pub(crate) fn reset_session(&mut self) {
        self.session.clear();
        self.scheduler.cancel_hold();
        self.live_contacts = 0;
        self.listeners.in_session = false;
    }
}
