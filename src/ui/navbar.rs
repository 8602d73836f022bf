//! Fixed navigation bar.
//!
//! Transparent while the page sits at the top; once the scroll offset
//! passes [`SCROLL_THRESHOLD_ROWS`] it switches to an opaque background
//! with a separator line. Links are clickable — [`link_cells`] exposes the
//! same geometry the renderer uses so the mouse handler can hit-test.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::content;
use crate::core::section::Section;
use crate::ui::layout::LayoutMode;
use crate::ui::theme::{Palette, ThemeMode};

/// Scroll offset (rows) past which the navbar turns opaque.
pub const SCROLL_THRESHOLD_ROWS: usize = 3;

/// Column where the first nav link starts (after the monogram + name).
fn links_origin() -> u16 {
    // " ◉ " (three cells) + name + two-space gap
    (3 + content::IDENTITY.name.chars().count() + 2) as u16
}

/// Geometry of each link label on the bar: `(section, column range)`.
/// Only wide mode shows the full link row.
pub fn link_cells(mode: LayoutMode) -> Vec<(Section, Range<u16>)> {
    if mode == LayoutMode::Compact {
        return Vec::new();
    }
    let mut cells = Vec::new();
    let mut x = links_origin();
    for &section in content::NAV_LINKS {
        let label_len = section.label().chars().count() as u16;
        cells.push((section, x..x + label_len));
        x += label_len + 3;
    }
    cells
}

/// The section link (if any) under column `x` of the bar row.
pub fn link_at(x: u16, mode: LayoutMode) -> Option<Section> {
    link_cells(mode)
        .into_iter()
        .find(|(_, range)| range.contains(&x))
        .map(|(section, _)| section)
}

pub struct NavBar {
    pub mode: LayoutMode,
    pub active: Section,
    /// Whether the page is scrolled past the threshold.
    pub scrolled: bool,
    pub theme: ThemeMode,
}

impl NavBar {
    fn bar_line(&self, palette: &Palette) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                format!(" ◉ {}", content::IDENTITY.name),
                palette
                    .nav_link_style(false)
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        match self.mode {
            LayoutMode::Wide => {
                for &section in content::NAV_LINKS {
                    spans.push(Span::styled(
                        section.label().to_string(),
                        palette.nav_link_style(section == self.active),
                    ));
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(
                    format!("({})", self.theme.label()),
                    palette.nav_link_style(false),
                ));
            }
            LayoutMode::Compact => {
                // No room for the link row; show where we are instead.
                spans.push(Span::styled(
                    format!("≡ {}", self.active.label()),
                    palette.nav_link_style(true),
                ));
            }
        }
        Line::from(spans)
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let palette = self.theme.palette();
        let style = if self.scrolled {
            palette.navbar_opaque_style()
        } else {
            palette.navbar_transparent_style()
        };
        buf.set_style(area, style);

        let line = self.bar_line(palette);
        buf.set_line(area.x, area.y, &line, area.width);

        // Separator row: only drawn once the bar is opaque.
        if area.height > 1 && self.scrolled {
            let sep = Line::from(Span::styled(
                "─".repeat(area.width as usize),
                palette.border_style(),
            ));
            buf.set_line(area.x, area.y + 1, &sep, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wide_mode_exposes_every_link() {
        let cells = link_cells(LayoutMode::Wide);
        assert_eq!(cells.len(), content::NAV_LINKS.len());
        // Cells are disjoint and ordered.
        for pair in cells.windows(2) {
            assert!(pair[0].1.end <= pair[1].1.start);
        }
    }

    #[test]
    fn compact_mode_has_no_clickable_links() {
        assert!(link_cells(LayoutMode::Compact).is_empty());
        assert_eq!(link_at(10, LayoutMode::Compact), None);
    }

    #[test]
    fn link_cells_line_up_with_the_rendered_bar() {
        let area = Rect::new(0, 0, 120, 2);
        let mut buf = Buffer::empty(area);
        NavBar {
            mode: LayoutMode::Wide,
            active: Section::Home,
            scrolled: false,
            theme: ThemeMode::Dark,
        }
        .render(area, &mut buf);

        // Every clickable range must sit exactly under its label.
        for (section, range) in link_cells(LayoutMode::Wide) {
            let rendered: String = (range.start..range.end)
                .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
                .collect();
            assert_eq!(rendered, section.label(), "{section:?}");
        }
    }

    #[test]
    fn hit_testing_matches_the_rendered_geometry() {
        for (section, range) in link_cells(LayoutMode::Wide) {
            assert_eq!(link_at(range.start, LayoutMode::Wide), Some(section));
            assert_eq!(link_at(range.end - 1, LayoutMode::Wide), Some(section));
        }
        // The gap between the first two labels hits nothing.
        let cells = link_cells(LayoutMode::Wide);
        assert_eq!(link_at(cells[0].1.end, LayoutMode::Wide), None);
    }
}
