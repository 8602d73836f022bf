//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling). The event loop serialises every mutation.

use std::collections::HashMap;
use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::reveal::Reveal;
use crate::core::section::Section;
use crate::core::visibility::{SharedObserver, ViewportObserver};
use crate::ui::layout::LayoutMode;
use crate::ui::navbar::SCROLL_THRESHOLD_ROWS;
use crate::ui::page::BuiltPage;
use crate::ui::sections::SectionCtx;
use crate::ui::smooth_scroll::SmoothScroll;
use crate::ui::theme::ThemeMode;

/// Damping factor for the smooth-scroll animator at ~20 fps.
const SCROLL_SPEED: f64 = 0.35;

/// Rows moved by one scroll step (keys or wheel).
pub const SCROLL_STEP: usize = 3;

/// Top-level application state.
pub struct AppState {
    /// User-configurable keybindings and preferences.
    pub config: AppConfig,
    /// Palette currently in use.
    pub theme: ThemeMode,
    /// Snap all motion (smooth scroll and reveal transitions).
    pub reduce_motion: bool,
    /// Responsive mode derived from the live page width.
    pub mode: LayoutMode,
    /// The laid-out page for the current width/mode/palette.
    pub page: BuiltPage,
    /// Logical scroll target (top row of the viewport).
    pub scroll_target: usize,
    /// Ease-out animator between scroll targets.
    pub scroll: SmoothScroll,
    /// Shared visibility observer polled once per tick.
    pub observer: SharedObserver,
    /// Reveal wrapper per section, keyed by anchor.
    pub reveals: HashMap<Section, Reveal>,
    /// Section currently considered "on screen" (navbar highlight).
    pub active_section: Section,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Page-area width the current build was made for.
    page_width: u16,
    /// Page-area height in rows (viewport for visibility polling).
    pub page_rows: usize,
    last_tick: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let observer = ViewportObserver::shared();
        let reveals = Section::ALL
            .iter()
            .map(|&section| (section, Reveal::mount(&observer)))
            .collect();
        let theme = config.theme;
        let reduce_motion = config.reduce_motion;
        // A zero-width build; the first draw replaces it.
        let page = BuiltPage::build(&SectionCtx {
            palette: theme.palette(),
            mode: LayoutMode::Compact,
            width: 0,
        });

        Self {
            config,
            theme,
            reduce_motion,
            mode: LayoutMode::Compact,
            page,
            scroll_target: 0,
            scroll: SmoothScroll::new(SCROLL_SPEED),
            observer,
            reveals,
            active_section: Section::Home,
            status_message: None,
            should_quit: false,
            page_width: 0,
            page_rows: 0,
            last_tick: Instant::now(),
        }
    }

    // ── layout ──────────────────────────────────────────────────

    /// Re-lay-out the page if the area or palette changed since the last
    /// build. Called from the draw path with the page area.
    pub fn ensure_page(&mut self, area: Rect) {
        self.page_rows = area.height as usize;
        let mode = LayoutMode::from_width(area.width);
        if area.width == self.page_width && mode == self.mode {
            return;
        }
        self.page_width = area.width;
        self.mode = mode;
        self.rebuild_page();
    }

    fn rebuild_page(&mut self) {
        self.page = BuiltPage::build(&SectionCtx {
            palette: self.theme.palette(),
            mode: self.mode,
            width: self.page_width,
        });
        // A reflow moves every anchor; re-clamp and drop stale motion.
        self.scroll_target = self.scroll_target.min(self.page.max_scroll(self.page_rows));
        self.scroll.snap();
    }

    // ── scrolling ───────────────────────────────────────────────

    /// The row shown at the top of the page area this frame.
    pub fn displayed_offset(&self) -> usize {
        self.scroll
            .displayed_row(self.scroll_target)
            .min(self.page.total_rows().saturating_sub(1))
    }

    /// Whether the navbar should render its opaque (scrolled) style.
    pub fn navbar_scrolled(&self) -> bool {
        self.displayed_offset() > SCROLL_THRESHOLD_ROWS
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.page.max_scroll(self.page_rows);
        let target = self.scroll_target.saturating_add_signed(delta).min(max);
        self.set_scroll_target(target);
    }

    /// Smooth-scroll so `section` starts at the top of the viewport.
    /// A section missing from the current build is silently ignored.
    pub fn scroll_to_section(&mut self, section: Section) {
        let Some(band) = self.page.band(section) else {
            return;
        };
        let max = self.page.max_scroll(self.page_rows);
        self.set_scroll_target(band.start.min(max));
        self.active_section = section;
    }

    fn set_scroll_target(&mut self, target: usize) {
        self.scroll_target = target;
        self.scroll.set_target(target);
        if self.reduce_motion {
            self.scroll.snap();
        }
    }

    // ── theme ───────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.config.theme = self.theme;
        if let Err(err) = self.config.save() {
            tracing::warn!("could not persist theme preference: {err:#}");
        }
        self.status_message = Some(format!("Theme: {}", self.theme.label()));
        self.rebuild_page();
    }

    // ── animation tick ──────────────────────────────────────────

    /// Advance animations and poll visibility. Runs once per tick event.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        self.scroll.tick();

        // Refresh target bands, then poll against the visible band.
        let top = self.displayed_offset();
        let changes = {
            let mut observer = self.observer.borrow_mut();
            for (&section, reveal) in &self.reveals {
                if let (Some(id), Some(band)) = (reveal.target(), self.page.band(section)) {
                    observer.set_band(id, band);
                }
            }
            observer.poll(top..top + self.page_rows)
        };
        for change in changes {
            if let Some(reveal) = self
                .reveals
                .values_mut()
                .find(|r| r.target() == Some(change.id))
            {
                reveal.notify(change.visible);
            }
        }

        let dt = if self.reduce_motion {
            crate::core::reveal::TRANSITION // snap in a single step
        } else {
            dt
        };
        for reveal in self.reveals.values_mut() {
            reveal.advance(dt);
        }

        // Highlight the section occupying the upper third of the viewport.
        self.active_section = self.page.section_at(top + self.page_rows / 3);
    }

    /// True while any animation still needs frames.
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating() || self.reveals.values().any(Reveal::is_animating)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ui::layout::AppLayout;

    fn state_with_page() -> AppState {
        let mut state = AppState::new(AppConfig::defaults());
        let layout = AppLayout::from_area(Rect::new(0, 0, 120, 40));
        state.ensure_page(layout.page_area);
        state
    }

    fn settle(state: &mut AppState) {
        let mut now = Instant::now();
        for _ in 0..64 {
            now += Duration::from_millis(50);
            state.on_tick(now);
        }
    }

    #[test]
    fn navbar_style_flips_past_the_threshold() {
        let mut state = state_with_page();
        assert!(!state.navbar_scrolled());

        state.scroll_by(SCROLL_THRESHOLD_ROWS as isize);
        settle(&mut state);
        assert!(!state.navbar_scrolled(), "at the threshold is not past it");

        state.scroll_by(1);
        settle(&mut state);
        assert!(state.navbar_scrolled());
    }

    #[test]
    fn anchor_navigation_lands_on_the_band_start() {
        let mut state = state_with_page();
        state.scroll_to_section(Section::Projects);
        settle(&mut state);

        let band = state.page.band(Section::Projects).unwrap();
        let expected = band.start.min(state.page.max_scroll(state.page_rows));
        assert_eq!(state.scroll_target, expected);
        assert_eq!(state.displayed_offset(), expected);
    }

    #[test]
    fn scrolling_clamps_to_the_page() {
        let mut state = state_with_page();
        state.scroll_by(-100);
        assert_eq!(state.scroll_target, 0);
        state.scroll_by(isize::MAX);
        assert_eq!(state.scroll_target, state.page.max_scroll(state.page_rows));
    }

    #[test]
    fn sections_reveal_when_scrolled_into_view() {
        let mut state = state_with_page();
        settle(&mut state);
        // The hero is on screen from the start.
        assert!(state.reveals[&Section::Home].is_visible());
        // Contact is far below the fold.
        assert!(!state.reveals[&Section::Contact].is_visible());

        state.scroll_to_section(Section::Contact);
        settle(&mut state);
        assert!(state.reveals[&Section::Contact].is_visible());
        assert_eq!(state.reveals[&Section::Contact].progress(), 1.0);
        // And the hero faded back out — the reveal is not sticky.
        assert!(!state.reveals[&Section::Home].is_visible());
    }

    #[test]
    fn reduce_motion_snaps_instead_of_animating() {
        let mut state = state_with_page();
        state.reduce_motion = true;
        state.scroll_to_section(Section::Skills);
        assert!(!state.scroll.is_animating());
        let band = state.page.band(Section::Skills).unwrap();
        assert_eq!(
            state.displayed_offset(),
            band.start.min(state.page.max_scroll(state.page_rows))
        );
    }

    #[test]
    fn reflow_reclamps_the_scroll_target() {
        let mut state = state_with_page();
        state.scroll_by(isize::MAX);
        // A much taller viewport shrinks max_scroll.
        let layout = AppLayout::from_area(Rect::new(0, 0, 60, 50));
        state.ensure_page(layout.page_area);
        assert!(state.scroll_target <= state.page.max_scroll(state.page_rows));
        assert_eq!(state.mode, LayoutMode::Compact);
    }
}
