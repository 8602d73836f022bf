//! Row-level smooth scroll with exponential ease-out.
//!
//! When the logical scroll target jumps (anchor navigation, paging), the
//! travelled distance is injected as a row displacement. Each tick the
//! displacement decays toward zero, so the page glides into place with
//! visible deceleration instead of snapping.

/// Row-offset smooth scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Current row displacement relative to the target. Positive = the
    /// view still lags above the target (scroll-down in flight).
    row_offset: f64,
    /// Previous scroll target row (to detect changes).
    prev_target: usize,
    /// Damping: `offset *= (1 - speed)` each tick.
    /// Higher speed = faster settle. Good range: 0.25–0.45 at 20 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            row_offset: 0.0,
            prev_target: 0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed the current target row. Detects a change and injects the
    /// displacement so the displayed offset starts where it was.
    pub fn set_target(&mut self, target: usize) {
        if target != self.prev_target {
            self.row_offset += target as f64 - self.prev_target as f64;
            self.prev_target = target;
        }
    }

    /// Decay the offset toward zero. Call once per frame.
    pub fn tick(&mut self) {
        self.row_offset *= 1.0 - self.speed;
        if self.row_offset.abs() < 0.4 {
            self.row_offset = 0.0;
        }
    }

    /// Drop any in-flight displacement (reduced-motion mode, resize).
    pub fn snap(&mut self) {
        self.row_offset = 0.0;
    }

    /// The row actually displayed for `target` this frame.
    pub fn displayed_row(&self, target: usize) -> usize {
        let shown = target as f64 - self.row_offset;
        shown.round().max(0.0) as usize
    }

    /// True while the animation has not fully settled.
    pub fn is_animating(&self) -> bool {
        self.row_offset != 0.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn target_change_starts_from_the_old_position() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(0);
        scroll.set_target(40);
        // First frame still shows (close to) the old position.
        assert_eq!(scroll.displayed_row(40), 0);
        assert!(scroll.is_animating());
    }

    #[test]
    fn displacement_decays_monotonically_to_zero() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(100);

        let mut prev = usize::MAX;
        let mut settled = false;
        for _ in 0..64 {
            scroll.tick();
            let shown = 100 - scroll.displayed_row(100);
            assert!(shown <= prev, "distance to target must shrink");
            prev = shown;
            if !scroll.is_animating() {
                settled = true;
                break;
            }
        }
        assert!(settled, "animation must settle");
        assert_eq!(scroll.displayed_row(100), 100);
    }

    #[test]
    fn snap_ends_the_animation_immediately() {
        let mut scroll = SmoothScroll::new(0.35);
        scroll.set_target(25);
        scroll.snap();
        assert!(!scroll.is_animating());
        assert_eq!(scroll.displayed_row(25), 25);
    }

    #[test]
    fn scrolling_up_works_symmetrically() {
        let mut scroll = SmoothScroll::new(0.5);
        scroll.set_target(50);
        scroll.snap();
        scroll.set_target(10);
        // In flight the view is still below the new target.
        assert!(scroll.displayed_row(10) > 10);
        for _ in 0..32 {
            scroll.tick();
        }
        assert_eq!(scroll.displayed_row(10), 10);
    }
}
