//! Layout helpers — split the terminal area into regions and pick the
//! responsive layout mode from the current width.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width (in columns) below which the page renders in compact mode.
pub const COMPACT_BREAKPOINT: u16 = 96;

/// Responsive layout mode, chosen from the live viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow terminal: everything stacks into a single column.
    Compact,
    /// Wide terminal: side-by-side columns and the full navbar.
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: u16) -> Self {
        if width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

/// Primary screen layout: fixed navbar, scrollable page, status bar.
pub struct AppLayout {
    pub navbar_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Height of the navbar region (bar + separator row).
    pub const NAVBAR_ROWS: u16 = 2;

    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::NAVBAR_ROWS), // fixed navbar
                Constraint::Min(3),                    // page (all remaining space)
                Constraint::Length(1),                 // status bar
            ])
            .split(area);

        Self {
            navbar_area: chunks[0],
            page_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(95, LayoutMode::Compact)]
    #[case(96, LayoutMode::Wide)]
    #[case(97, LayoutMode::Wide)]
    #[case(40, LayoutMode::Compact)]
    fn breakpoint_boundary(#[case] width: u16, #[case] expected: LayoutMode) {
        assert_eq!(LayoutMode::from_width(width), expected);
    }

    #[test]
    fn areas_partition_the_frame() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.navbar_area, Rect::new(0, 0, 120, 2));
        assert_eq!(layout.page_area, Rect::new(0, 2, 120, 37));
        assert_eq!(layout.status_area, Rect::new(0, 39, 120, 1));
    }
}
