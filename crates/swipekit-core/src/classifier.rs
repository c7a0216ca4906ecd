//! Pure gesture validity predicates.
//!
//! Each predicate decides whether the current session metrics qualify for
//! one gesture; capability checks (did the caller register a handler) live
//! on [`Settings`] and are combined with these by the dispatch controller.

use crate::config::{Settings, JITTER_ALLOWANCE};
use crate::contact::Contact;
use crate::session::Session;

/// Distance check for swipes: at or past the configured threshold, or no
/// threshold configured.
pub fn validate_swipe_distance(session: &Session, settings: &Settings) -> bool {
    match settings.threshold {
        Some(threshold) => session.distance >= threshold,
        None => true,
    }
}

/// Swipe-back cancellation: the user reversed past the cancel margin after
/// having travelled far in the current direction.
pub fn did_swipe_back_to_cancel(session: &Session, settings: &Settings) -> bool {
    match (settings.cancel_threshold, session.direction) {
        (Some(threshold), Some(direction)) => {
            session.max_distance(direction) - session.distance >= threshold
        }
        _ => false,
    }
}

pub fn validate_pinch_distance(session: &Session, settings: &Settings) -> bool {
    match settings.pinch_threshold {
        Some(threshold) => session.pinch_distance >= threshold,
        None => true,
    }
}

/// Time check for swipes: under the configured maximum duration, or no
/// maximum configured.
pub fn validate_swipe_time(session: &Session, settings: &Settings) -> bool {
    match settings.max_time_threshold {
        Some(max) => session.duration() < max,
        None => true,
    }
}

/// Contact-count check. Transports without discrete contact counting
/// always pass.
pub fn validate_fingers(session: &Session, settings: &Settings, counts_contacts: bool) -> bool {
    !counts_contacts || settings.fingers.matches(session.contact_count)
}

/// The primary contact moved at least once (nonzero endpoint).
pub fn validate_end_point(primary: &Contact) -> bool {
    primary.end.x != 0.0
}

/// A completed swipe: correct contact count, nonzero endpoint, distance
/// and time within thresholds, and not cancelled by reversal.
pub fn validate_swipe(
    session: &Session,
    primary: &Contact,
    settings: &Settings,
    counts_contacts: bool,
) -> bool {
    !did_swipe_back_to_cancel(session, settings)
        && validate_end_point(primary)
        && validate_fingers(session, settings, counts_contacts)
        && validate_swipe_distance(session, settings)
        && validate_swipe_time(session, settings)
}

/// A completed pinch: correct contact count, nonzero endpoint, separation
/// delta past the pinch threshold.
pub fn validate_pinch(
    session: &Session,
    primary: &Contact,
    settings: &Settings,
    counts_contacts: bool,
) -> bool {
    validate_fingers(session, settings, counts_contacts)
        && validate_end_point(primary)
        && validate_pinch_distance(session, settings)
}

/// A tap: single contact (or a transport without discrete counting) with
/// negligible movement.
pub fn validate_tap(session: &Session, settings: &Settings, counts_contacts: bool) -> bool {
    let single = session.contact_count == 1 || !counts_contacts;
    let still = session.distance.is_nan()
        || settings
            .threshold
            .map_or(false, |threshold| session.distance < threshold);
    single && still
}

/// The second tap of a double-tap: a tap window opened at
/// `window_started_at` and the gap to `now` is within the threshold.
pub fn validate_double_tap(window_started_at: Option<u64>, now: u64, settings: &Settings) -> bool {
    match window_started_at {
        Some(started) => now.saturating_sub(started) <= settings.double_tap_ms,
        None => false,
    }
}

/// A long-tap: held past the long-tap duration while moving less than the
/// fixed jitter allowance.
pub fn validate_long_tap(session: &Session, settings: &Settings) -> bool {
    session.duration() > settings.long_tap_ms && session.distance < JITTER_ALLOWANCE
}
