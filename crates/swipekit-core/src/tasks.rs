//! Explicit cancelable deferred work.
//!
//! The recognizer never blocks and never owns a platform timer. The two
//! delayed behaviors — the deferred single tap waiting out the double-tap
//! window, and the hold deadline — are modelled as deadline tasks that the
//! recognizer drains against event timestamps and [`advance`] calls.
//!
//! [`advance`]: crate::Recognizer::advance

use smallvec::SmallVec;

use crate::handlers::TapReport;

/// The deferred work a task performs when its deadline passes.
#[derive(Clone, Copy, Debug)]
pub enum TaskKind {
    /// Fire the plain tap that was deferred while waiting for a possible
    /// second tap.
    DeferredTap(TapReport),
    /// Fire the hold gesture armed at session start.
    Hold(TapReport),
}

#[derive(Clone, Copy, Debug)]
struct Task {
    deadline: u64,
    kind: TaskKind,
}

/// Holds at most one pending task of each kind.
#[derive(Debug, Default)]
pub struct Scheduler {
    deferred_tap: Option<Task>,
    hold: Option<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the deferred single tap, replacing any pending one.
    pub fn schedule_deferred_tap(&mut self, deadline: u64, report: TapReport) {
        self.deferred_tap = Some(Task {
            deadline,
            kind: TaskKind::DeferredTap(report),
        });
    }

    /// Arms the hold deadline, replacing any pending one.
    pub fn schedule_hold(&mut self, deadline: u64, report: TapReport) {
        self.hold = Some(Task {
            deadline,
            kind: TaskKind::Hold(report),
        });
    }

    pub fn cancel_deferred_tap(&mut self) {
        self.deferred_tap = None;
    }

    pub fn cancel_hold(&mut self) {
        self.hold = None;
    }

    pub fn cancel_all(&mut self) {
        self.deferred_tap = None;
        self.hold = None;
    }

    pub fn has_deferred_tap(&self) -> bool {
        self.deferred_tap.is_some()
    }

    pub fn has_hold(&self) -> bool {
        self.hold.is_some()
    }

    /// Removes and returns the tasks whose deadline is at or before `now`,
    /// earliest first.
    pub fn due(&mut self, now: u64) -> impl Iterator<Item = TaskKind> {
        let mut fired: SmallVec<[Task; 2]> = SmallVec::new();
        if self.hold.is_some_and(|t| t.deadline <= now) {
            fired.extend(self.hold.take());
        }
        if self.deferred_tap.is_some_and(|t| t.deadline <= now) {
            fired.extend(self.deferred_tap.take());
        }
        fired.sort_by_key(|t| t.deadline);
        fired.into_iter().map(|t| t.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipekit_geometry::Point;

    fn report() -> TapReport {
        TapReport {
            position: Point::new(1.0, 2.0),
            duration: 0,
        }
    }

    #[test]
    fn due_tasks_fire_once() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_deferred_tap(200, report());
        assert_eq!(scheduler.due(199).count(), 0);
        assert_eq!(scheduler.due(200).count(), 1);
        assert_eq!(scheduler.due(1000).count(), 0);
    }

    #[test]
    fn rescheduling_replaces_pending_task() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_hold(500, report());
        scheduler.schedule_hold(800, report());
        assert_eq!(scheduler.due(500).count(), 0);
        assert_eq!(scheduler.due(800).count(), 1);
    }

    #[test]
    fn cancel_all_clears_both_kinds() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_hold(500, report());
        scheduler.schedule_deferred_tap(200, report());
        scheduler.cancel_all();
        assert!(!scheduler.has_hold());
        assert!(!scheduler.has_deferred_tap());
        assert_eq!(scheduler.due(10_000).count(), 0);
    }

    #[test]
    fn earlier_deadline_fires_first() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_hold(500, report());
        scheduler.schedule_deferred_tap(200, report());
        let fired: Vec<_> = scheduler.due(1000).collect();
        assert_eq!(fired.len(), 2);
        assert!(matches!(fired[0], TaskKind::DeferredTap(_)));
        assert!(matches!(fired[1], TaskKind::Hold(_)));
    }
}
