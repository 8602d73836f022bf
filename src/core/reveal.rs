//! Fade-in-on-visibility wrapper.
//!
//! A [`Reveal`] wraps one section of the page: it owns the visibility
//! observation for that section and turns the reported boolean into a
//! time-boxed style transition (dim + downward row offset while hidden).
//! The effect is deliberately not sticky — a section that scrolls back out
//! of view fades out again.

use std::time::Duration;

use crate::core::visibility::{SharedObserver, Subscription, TargetId};

/// Duration of the hidden ↔ revealed style transition.
pub const TRANSITION: Duration = Duration::from_millis(600);

/// Rows of downward translation at the fully hidden style.
pub const SLIDE_ROWS: u16 = 2;

/// Reveal wrapper state: a visibility flag plus transition progress.
pub struct Reveal {
    /// Observation held for the wrapped content. `None` in degraded mode.
    subscription: Option<Subscription>,
    /// Latest reported intersection state. Starts hidden.
    visible: bool,
    /// 0.0 = fully hidden style, 1.0 = fully revealed.
    progress: f64,
}

impl Reveal {
    /// Mount the wrapper: register an observation for its content.
    pub fn mount(observer: &SharedObserver) -> Self {
        Self {
            subscription: Some(Subscription::register(observer)),
            visible: false,
            progress: 0.0,
        }
    }

    /// Degraded mode for when no observation capability exists: the flag
    /// stays `false` and the content keeps the hidden style permanently.
    pub fn detached() -> Self {
        Self {
            subscription: None,
            visible: false,
            progress: 0.0,
        }
    }

    /// The observation target, for routing poll results. `None` when
    /// detached.
    pub fn target(&self) -> Option<TargetId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    /// Apply an intersection notification. The latest one always wins;
    /// delivering the same value twice changes nothing.
    pub fn notify(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the transition toward the current flag by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let step = dt.as_secs_f64() / TRANSITION.as_secs_f64();
        self.progress = if self.visible {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Downward row offset for the current progress.
    pub fn slide_rows(&self) -> u16 {
        ((1.0 - self.progress) * f64::from(SLIDE_ROWS)).round() as u16
    }

    /// Whether the content should still render with the dimmed style.
    pub fn is_dimmed(&self) -> bool {
        self.progress < 1.0
    }

    /// True while the transition has not yet settled on its target.
    pub fn is_animating(&self) -> bool {
        let target = if self.visible { 1.0 } else { 0.0 };
        (self.progress - target).abs() > f64::EPSILON
    }
}
