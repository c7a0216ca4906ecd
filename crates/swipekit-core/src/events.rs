//! The abstract contact-event feed the recognizer consumes, and the
//! per-event outcome it reports back to the transport.

use smallvec::SmallVec;
use swipekit_geometry::Point;

use crate::contact::MAX_CONTACTS;

/// One `(identifier, position)` sample from the transport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactSample {
    /// Transport-assigned identifier; 0 when the transport provides none.
    pub identifier: u32,
    pub position: Point,
}

impl ContactSample {
    pub fn new(identifier: u32, position: Point) -> Self {
        Self {
            identifier,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactEventKind {
    Begin,
    Move,
    End,
    Cancel,
    /// The tracked pointer left the element bounds. Only meaningful when
    /// leave-triggering is configured.
    Leave,
}

/// A contact event as delivered by the transport adapter.
///
/// `samples` carries the contacts active on the surface after the event,
/// primary contact first: all current contacts for `Begin`/`Move`, the
/// remaining contacts for `End` (empty when the last contact lifted). For
/// transports without discrete contact counting a single sample is enough.
#[derive(Clone, Debug)]
pub struct ContactEvent {
    pub kind: ContactEventKind,
    /// Monotonic timestamp in milliseconds.
    pub timestamp: u64,
    pub samples: SmallVec<[ContactSample; MAX_CONTACTS]>,
}

impl ContactEvent {
    pub fn new(
        kind: ContactEventKind,
        timestamp: u64,
        samples: impl IntoIterator<Item = ContactSample>,
    ) -> Self {
        Self {
            kind,
            timestamp,
            samples: samples.into_iter().collect(),
        }
    }

    pub fn begin(timestamp: u64, samples: impl IntoIterator<Item = ContactSample>) -> Self {
        Self::new(ContactEventKind::Begin, timestamp, samples)
    }

    pub fn moved(timestamp: u64, samples: impl IntoIterator<Item = ContactSample>) -> Self {
        Self::new(ContactEventKind::Move, timestamp, samples)
    }

    /// An end event; `remaining` lists the contacts still on the surface.
    pub fn end(timestamp: u64, remaining: impl IntoIterator<Item = ContactSample>) -> Self {
        Self::new(ContactEventKind::End, timestamp, remaining)
    }

    pub fn cancel(timestamp: u64) -> Self {
        Self::new(ContactEventKind::Cancel, timestamp, [])
    }

    pub fn leave(timestamp: u64) -> Self {
        Self::new(ContactEventKind::Leave, timestamp, [])
    }

    pub fn primary(&self) -> Option<&ContactSample> {
        self.samples.first()
    }
}

/// What the transport should do with the platform event that produced a
/// processed contact event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// The event advanced an active (or newly started) session.
    pub handled: bool,
    /// The transport should suppress the platform default (page scroll)
    /// for this event.
    pub suppress_scroll: bool,
}

impl ProcessOutcome {
    pub const IGNORED: Self = Self {
        handled: false,
        suppress_scroll: false,
    };

    pub fn handled(suppress_scroll: bool) -> Self {
        Self {
            handled: true,
            suppress_scroll,
        }
    }
}
