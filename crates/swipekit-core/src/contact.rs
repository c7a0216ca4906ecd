//! Per-contact position tracking.
//!
//! The tracker holds one record per physical contact for the lifetime of a
//! session, keyed by the transport-assigned identifier. Slots are
//! reinitialized at the start of every session; identifiers are arbitrary
//! small integers, 0 when the transport provides none (mouse).

use smallvec::SmallVec;
use swipekit_geometry::Point;

/// Maximum number of simultaneous contacts tracked per session.
pub const MAX_CONTACTS: usize = 6;

/// One physical contact: where it started and where it currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Contact {
    pub identifier: u32,
    pub start: Point,
    pub end: Point,
}

/// Fixed-capacity table of the contacts in the current session.
#[derive(Debug)]
pub struct ContactTracker {
    contacts: SmallVec<[Contact; MAX_CONTACTS]>,
}

impl ContactTracker {
    pub fn new() -> Self {
        let mut tracker = Self {
            contacts: SmallVec::new(),
        };
        tracker.reset();
        tracker
    }

    /// Reinitializes all slots to zeroed points with identifier 0. Called
    /// at the start of every new session.
    pub fn reset(&mut self) {
        self.contacts.clear();
        for _ in 0..MAX_CONTACTS {
            self.contacts.push(Contact::default());
        }
    }

    /// Initializes `slot` for `identifier`, with both start and end set to
    /// `point`. `slot` must be below [`MAX_CONTACTS`].
    pub fn create(&mut self, slot: usize, identifier: u32, point: Point) -> Contact {
        let contact = &mut self.contacts[slot];
        contact.identifier = identifier;
        contact.start = point;
        contact.end = point;
        *contact
    }

    /// Overwrites the current position of the contact with `identifier`.
    /// Returns `None` when the identifier was never created; callers only
    /// update identifiers they created, so an unknown identifier is a
    /// contract violation handled as a no-op.
    pub fn update(&mut self, identifier: u32, point: Point) -> Option<Contact> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.identifier == identifier)?;
        contact.end = point;
        Some(*contact)
    }

    pub fn get(&self, identifier: u32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.identifier == identifier)
    }

    /// The primary contact (slot 0).
    pub fn primary(&self) -> &Contact {
        &self.contacts[0]
    }

    /// The secondary contact (slot 1), tracked during pinches.
    pub fn secondary(&self) -> &Contact {
        &self.contacts[1]
    }

    /// Snapshot of all slots, passed to gesture callbacks.
    pub fn snapshot(&self) -> [Contact; MAX_CONTACTS] {
        let mut out = [Contact::default(); MAX_CONTACTS];
        out.copy_from_slice(&self.contacts);
        out
    }
}

impl Default for ContactTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_sets_start_and_end_to_same_point() {
        let mut tracker = ContactTracker::new();
        let contact = tracker.create(0, 7, Point::new(10.0, 20.0));
        assert_eq!(contact.start, Point::new(10.0, 20.0));
        assert_eq!(contact.end, Point::new(10.0, 20.0));
        assert_eq!(contact.identifier, 7);
    }

    #[test]
    fn update_overwrites_end_only() {
        let mut tracker = ContactTracker::new();
        tracker.create(0, 3, Point::new(1.0, 1.0));
        let updated = tracker.update(3, Point::new(50.0, 60.0)).unwrap();
        assert_eq!(updated.start, Point::new(1.0, 1.0));
        assert_eq!(updated.end, Point::new(50.0, 60.0));
    }

    #[test]
    fn update_of_unknown_identifier_is_a_noop() {
        let mut tracker = ContactTracker::new();
        tracker.create(0, 3, Point::new(1.0, 1.0));
        assert!(tracker.update(99, Point::new(5.0, 5.0)).is_none());
        assert_eq!(tracker.get(3).unwrap().end, Point::new(1.0, 1.0));
    }

    #[test]
    fn reset_zeroes_all_slots() {
        let mut tracker = ContactTracker::new();
        tracker.create(0, 3, Point::new(1.0, 1.0));
        tracker.create(1, 4, Point::new(2.0, 2.0));
        tracker.reset();
        assert_eq!(tracker.primary(), &Contact::default());
        assert_eq!(tracker.secondary(), &Contact::default());
    }

    #[test]
    fn lookup_scans_by_identifier() {
        let mut tracker = ContactTracker::new();
        tracker.create(0, 11, Point::new(1.0, 0.0));
        tracker.create(1, 12, Point::new(2.0, 0.0));
        assert_eq!(tracker.get(12).unwrap().start, Point::new(2.0, 0.0));
        assert_eq!(tracker.get(11).unwrap().start, Point::new(1.0, 0.0));
    }
}
