//! The page composer — stacks the sections into one virtual page, keeps
//! the anchor map, and renders the scrolled window through each section's
//! reveal style.

use std::collections::HashMap;
use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Stylize},
    text::Line,
    widgets::Widget,
};

use crate::core::reveal::Reveal;
use crate::core::section::Section;
use crate::ui::sections::{self, SectionCtx};
use crate::ui::theme::Palette;

struct SectionBlock {
    section: Section,
    /// Row band of this section within the virtual page.
    band: Range<usize>,
    lines: Vec<Line<'static>>,
}

/// All sections laid out for one width/mode/palette combination.
///
/// Rebuilt only when one of those inputs changes; scrolling and reveal
/// animation re-render the same build.
pub struct BuiltPage {
    blocks: Vec<SectionBlock>,
    total_rows: usize,
}

impl BuiltPage {
    pub fn build(ctx: &SectionCtx) -> Self {
        let mut blocks = Vec::with_capacity(Section::ALL.len());
        let mut row = 0;
        for &section in Section::ALL {
            let lines = sections::build(section, ctx);
            let band = row..row + lines.len();
            row = band.end;
            blocks.push(SectionBlock {
                section,
                band,
                lines,
            });
        }
        Self {
            blocks,
            total_rows: row,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Where `section` landed on this build. `None` only for an empty page.
    pub fn band(&self, section: Section) -> Option<Range<usize>> {
        self.blocks
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.band.clone())
    }

    /// Highest valid scroll offset for a viewport of `viewport_rows`.
    pub fn max_scroll(&self, viewport_rows: usize) -> usize {
        self.total_rows.saturating_sub(viewport_rows)
    }

    /// The section whose band contains `row` (rows past the end map to the
    /// last section).
    pub fn section_at(&self, row: usize) -> Section {
        self.blocks
            .iter()
            .find(|b| b.band.contains(&row))
            .or_else(|| self.blocks.last())
            .map(|b| b.section)
            .unwrap_or(Section::Home)
    }

    fn block_at(&self, row: usize) -> Option<&SectionBlock> {
        self.blocks.iter().find(|b| b.band.contains(&row))
    }
}

/// Widget that renders the visible window of a [`BuiltPage`].
pub struct PageView<'a> {
    page: &'a BuiltPage,
    reveals: &'a HashMap<Section, Reveal>,
    palette: &'a Palette,
    /// First virtual row shown at the top of the area.
    offset: usize,
}

impl<'a> PageView<'a> {
    pub fn new(
        page: &'a BuiltPage,
        reveals: &'a HashMap<Section, Reveal>,
        palette: &'a Palette,
        offset: usize,
    ) -> Self {
        Self {
            page,
            reveals,
            palette,
            offset,
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paint the theme background first; lines only cover their spans.
        buf.set_style(area, ratatui::style::Style::default().bg(self.palette.bg));

        for y in 0..area.height {
            let row = self.offset + y as usize;
            let Some(block) = self.page.block_at(row) else {
                continue;
            };
            let reveal = self.reveals.get(&block.section);
            let slide = reveal.map_or(0, Reveal::slide_rows) as usize;
            let dimmed = reveal.map_or(true, Reveal::is_dimmed);

            // The reveal translation shifts content down inside the band:
            // the first `slide` rows render blank, the rest lag behind.
            let within = row - block.band.start;
            let Some(line) = within
                .checked_sub(slide)
                .and_then(|idx| block.lines.get(idx))
            else {
                continue;
            };

            let line = if dimmed {
                let spans = line
                    .spans
                    .iter()
                    .map(|s| s.clone().add_modifier(Modifier::DIM))
                    .collect::<Vec<_>>();
                Line::from(spans)
            } else {
                line.clone()
            };
            buf.set_line(area.x, area.y + y, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ui::layout::LayoutMode;
    use crate::ui::theme::DARK;

    fn built(width: u16, mode: LayoutMode) -> BuiltPage {
        BuiltPage::build(&SectionCtx {
            palette: &DARK,
            mode,
            width,
        })
    }

    #[test]
    fn bands_are_contiguous_and_cover_the_page() {
        let page = built(100, LayoutMode::Wide);
        let mut expected_start = 0;
        for &section in Section::ALL {
            let band = page.band(section).unwrap();
            assert_eq!(band.start, expected_start, "{section:?}");
            assert!(band.end > band.start);
            expected_start = band.end;
        }
        assert_eq!(expected_start, page.total_rows());
    }

    #[test]
    fn section_at_maps_rows_back_to_their_section() {
        let page = built(80, LayoutMode::Compact);
        for &section in Section::ALL {
            let band = page.band(section).unwrap();
            assert_eq!(page.section_at(band.start), section);
            assert_eq!(page.section_at(band.end - 1), section);
        }
        // Past the end clamps to the last section.
        assert_eq!(page.section_at(page.total_rows() + 10), Section::Contact);
    }

    #[test]
    fn unrevealed_sections_render_dimmed() {
        let page = built(60, LayoutMode::Compact);
        let reveals = HashMap::new(); // nothing revealed yet
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        PageView::new(&page, &reveals, &DARK, 0).render(area, &mut buf);

        let mut content_cells = 0;
        for cell in buf.content() {
            if cell.symbol().trim().is_empty() {
                continue;
            }
            content_cells += 1;
            assert!(cell.style().add_modifier.contains(Modifier::DIM));
        }
        assert!(content_cells > 0, "the window must show some content");
    }

    #[test]
    fn max_scroll_never_underflows() {
        let page = built(80, LayoutMode::Compact);
        assert_eq!(page.max_scroll(page.total_rows() + 100), 0);
        assert!(page.max_scroll(10) > 0);
    }
}
