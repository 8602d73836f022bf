//! Viewport-visibility observation.
//!
//! The terminal delivers no intersection events, so [`ViewportObserver`]
//! polls instead: once per tick it compares every registered target's row
//! band against the visible band and reports only the targets whose
//! intersection state changed since the last report. Consumers never see
//! the polling — they hold a [`Subscription`] and receive boolean change
//! notifications.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::{Rc, Weak};

/// Opaque identifier for one registered observation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

/// A reported change in intersection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub id: TargetId,
    pub visible: bool,
}

/// Hands out visibility observations without exposing how visibility is
/// detected (events, polling, …).
pub trait ObservableVisibility {
    /// Register a new target. Its band starts empty (never intersecting).
    fn subscribe(&mut self) -> TargetId;
    /// Release a registration. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: TargetId);
}

struct Observation {
    id: TargetId,
    /// Row band of the target within the virtual page. Bands move when
    /// the layout reflows, so they are refreshed before every poll.
    band: Range<usize>,
    /// Last state reported for this target. `None` until the first poll.
    reported: Option<bool>,
}

/// Geometry-polling observer over the virtual page.
#[derive(Default)]
pub struct ViewportObserver {
    next_id: u64,
    observations: Vec<Observation>,
}

/// Shared handle — the observer lives on the single-threaded event loop.
pub type SharedObserver = Rc<RefCell<ViewportObserver>>;

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedObserver {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Update a target's row band. Unknown ids are ignored.
    pub fn set_band(&mut self, id: TargetId, band: Range<usize>) {
        if let Some(obs) = self.observations.iter_mut().find(|o| o.id == id) {
            obs.band = band;
        }
    }

    /// Compare every target against the visible band. Returns one change
    /// per target whose intersection state differs from the last report;
    /// any partial overlap counts as visible.
    pub fn poll(&mut self, viewport: Range<usize>) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        for obs in &mut self.observations {
            let visible = bands_overlap(&obs.band, &viewport);
            if obs.reported != Some(visible) {
                obs.reported = Some(visible);
                changes.push(VisibilityChange { id: obs.id, visible });
            }
        }
        changes
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl ObservableVisibility for ViewportObserver {
    fn subscribe(&mut self) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.observations.push(Observation {
            id,
            band: 0..0,
            reported: None,
        });
        id
    }

    fn unsubscribe(&mut self, id: TargetId) {
        self.observations.retain(|o| o.id != id);
    }
}

fn bands_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// RAII handle for one observation.
///
/// Dropping the handle releases the registration — exactly once, on every
/// exit path. If the observer itself is already gone, release is a no-op.
pub struct Subscription {
    observer: Weak<RefCell<ViewportObserver>>,
    id: TargetId,
}

impl Subscription {
    /// Register a new target with `observer` and tie its lifetime to the
    /// returned handle.
    pub fn register(observer: &SharedObserver) -> Self {
        let id = observer.borrow_mut().subscribe();
        Self {
            observer: Rc::downgrade(observer),
            id,
        }
    }

    pub fn id(&self) -> TargetId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.borrow_mut().unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn observer_with_band(band: Range<usize>) -> (ViewportObserver, TargetId) {
        let mut obs = ViewportObserver::new();
        let id = obs.subscribe();
        obs.set_band(id, band);
        (obs, id)
    }

    #[test]
    fn reports_enter_and_exit_once_each() {
        let (mut obs, id) = observer_with_band(10..20);

        // Off-screen: the very first poll reports the initial state.
        assert_eq!(
            obs.poll(0..5),
            vec![VisibilityChange { id, visible: false }]
        );
        // No change, no report.
        assert_eq!(obs.poll(0..5), vec![]);
        // Scrolled into view.
        assert_eq!(
            obs.poll(15..40),
            vec![VisibilityChange { id, visible: true }]
        );
        assert_eq!(obs.poll(12..40), vec![]);
        // Scrolled back out — the state is not sticky.
        assert_eq!(
            obs.poll(30..60),
            vec![VisibilityChange { id, visible: false }]
        );
    }

    #[test]
    fn partial_overlap_counts_as_visible() {
        let (mut obs, id) = observer_with_band(10..20);
        // One shared row (19) is enough.
        assert_eq!(
            obs.poll(19..30),
            vec![VisibilityChange { id, visible: true }]
        );
        // Touching bands do not overlap.
        let (mut obs, id) = observer_with_band(10..20);
        assert_eq!(
            obs.poll(20..30),
            vec![VisibilityChange { id, visible: false }]
        );
    }

    #[test]
    fn empty_band_never_intersects() {
        let mut obs = ViewportObserver::new();
        let id = obs.subscribe();
        assert_eq!(
            obs.poll(0..100),
            vec![VisibilityChange { id, visible: false }]
        );
    }

    #[test]
    fn subscription_releases_exactly_once_on_drop() {
        let shared = ViewportObserver::shared();
        let sub = Subscription::register(&shared);
        let id = sub.id();
        assert_eq!(shared.borrow().len(), 1);

        drop(sub);
        assert_eq!(shared.borrow().len(), 0);

        // A stale unsubscribe for the same id is harmless.
        shared.borrow_mut().unsubscribe(id);
        assert_eq!(shared.borrow().len(), 0);
    }

    #[test]
    fn drop_before_any_poll_is_clean() {
        let shared = ViewportObserver::shared();
        let sub = Subscription::register(&shared);
        drop(sub);
        assert!(shared.borrow().is_empty());
        assert_eq!(shared.borrow_mut().poll(0..10), vec![]);
    }

    #[test]
    fn drop_after_observer_gone_is_a_noop() {
        let shared = ViewportObserver::shared();
        let sub = Subscription::register(&shared);
        drop(shared);
        drop(sub); // must not panic
    }

    #[test]
    fn released_target_reports_nothing_further() {
        let shared = ViewportObserver::shared();
        let sub = Subscription::register(&shared);
        let id = sub.id();
        shared.borrow_mut().set_band(id, 0..5);
        assert_eq!(
            shared.borrow_mut().poll(0..10),
            vec![VisibilityChange { id, visible: true }]
        );

        drop(sub);
        assert_eq!(shared.borrow_mut().poll(20..30), vec![]);
    }
}
