//! Section renderers — pure builders that turn the static content tables
//! into styled lines for the virtual page.
//!
//! Builders only depend on the palette, the layout mode, and the page
//! width; scrolling and reveal styling are applied later by `ui::page`.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::content::{self, Accent};
use crate::core::section::Section;
use crate::ui::layout::LayoutMode;
use crate::ui::theme::Palette;

/// Everything a section builder needs to lay itself out.
pub struct SectionCtx<'a> {
    pub palette: &'a Palette,
    pub mode: LayoutMode,
    /// Width of the page area in columns.
    pub width: u16,
}

impl SectionCtx<'_> {
    /// Usable content width: the page width minus a one-column margin on
    /// each side, capped so very wide terminals keep readable measure.
    fn content_width(&self) -> usize {
        (self.width.saturating_sub(2) as usize).clamp(20, 110)
    }

    /// Left margin that centres the content band on the page.
    fn margin(&self) -> usize {
        let w = self.width as usize;
        w.saturating_sub(self.content_width()) / 2
    }
}

/// Build one section's lines, including its trailing padding.
pub fn build(section: Section, ctx: &SectionCtx) -> Vec<Line<'static>> {
    let mut lines = match section {
        Section::Home => hero(ctx),
        Section::About => about(ctx),
        Section::Skills => skills(ctx),
        Section::Experience => experience(ctx),
        Section::Projects => projects(ctx),
        Section::Contact => contact(ctx),
    };
    // Breathing room between sections.
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

// ───────────────────────────────────────── hero ──────────────

fn hero(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let id = &content::IDENTITY;

    let mut text = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("✦ {}", id.kicker),
            p.accent_style(Accent::Purple).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            id.name.to_string(),
            p.heading_style().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(id.headline.to_string(), p.body_style().add_modifier(Modifier::BOLD))),
        Line::default(),
    ];
    let intro_width = ctx.content_width().min(64);
    for row in wrap(id.intro, intro_width) {
        text.push(Line::from(Span::styled(row, p.muted_style())));
    }
    text.push(Line::default());
    text.push(Line::from(vec![
        Span::styled(
            "[ Check out my work! ]".to_string(),
            p.accent_style(Accent::Purple).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[ Get in Touch ]".to_string(), p.accent_style(Accent::Cyan)),
    ]));

    let body = if ctx.mode == LayoutMode::Wide {
        let portrait = portrait_card(ctx);
        let left_width = ctx.content_width().saturating_sub(PORTRAIT_WIDTH + 4);
        beside(text, portrait, left_width, 4)
    } else {
        text
    };

    indent(body, ctx.margin())
}

const PORTRAIT_WIDTH: usize = 22;

/// Framed monogram card standing in for the hero photo.
fn portrait_card(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let border = p.accent_style(Accent::Purple);
    let inner = PORTRAIT_WIDTH - 2;
    let monogram = content::IDENTITY.monogram;

    let mut lines = vec![Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(inner)),
        border,
    ))];
    for i in 0..5 {
        let row = if i == 2 {
            let pad = (inner - monogram.len()) / 2;
            format!(
                "│{}{}{}│",
                " ".repeat(pad),
                monogram,
                " ".repeat(inner - pad - monogram.len())
            )
        } else {
            format!("│{}│", " ".repeat(inner))
        };
        lines.push(Line::from(Span::styled(row, border)));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(inner)),
        border,
    )));
    lines
}

// ───────────────────────────────────────── about ─────────────

fn about(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = heading(ctx, "About ", "Me", "Learn more about my background and journey");

    // Professional summary card.
    let mut summary = vec![Line::from(Span::styled(
        "Professional Summary".to_string(),
        p.accent_style(Accent::Purple).add_modifier(Modifier::BOLD),
    ))];
    let text_width = ctx.content_width().saturating_sub(4);
    for paragraph in content::SUMMARY {
        summary.push(Line::default());
        for row in wrap(paragraph, text_width) {
            summary.push(Line::from(Span::styled(row, p.body_style())));
        }
    }
    lines.extend(card(summary, ctx.content_width(), p));
    lines.push(Line::default());

    // Education + competencies.
    let edu = &content::EDUCATION;
    let education = vec![
        Line::from(Span::styled(edu.school.to_string(), p.heading_style())),
        Line::from(Span::styled(edu.degree.to_string(), p.body_style())),
        Line::from(Span::styled(
            edu.gpa.to_string(),
            p.accent_style(Accent::Purple).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(edu.dates.to_string(), p.muted_style())),
    ];
    let mut competencies = vec![Line::from(Span::styled(
        "Core Competencies".to_string(),
        p.accent_style(Accent::Pink).add_modifier(Modifier::BOLD),
    ))];
    for item in content::COMPETENCIES {
        competencies.push(Line::from(vec![
            Span::styled("● ".to_string(), p.accent_style(Accent::Purple)),
            Span::styled((*item).to_string(), p.body_style()),
        ]));
    }

    match ctx.mode {
        LayoutMode::Wide => {
            let half = (ctx.content_width() - 2) / 2;
            lines.extend(beside(
                card(education, half, p),
                card(competencies, half, p),
                half,
                2,
            ));
        }
        LayoutMode::Compact => {
            lines.extend(card(education, ctx.content_width(), p));
            lines.push(Line::default());
            lines.extend(card(competencies, ctx.content_width(), p));
        }
    }

    indent(lines, ctx.margin())
}

// ───────────────────────────────────────── skills ────────────

fn skills(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = heading(
        ctx,
        "Technical ",
        "Stack",
        "Technologies and tools I use to build innovative solutions",
    );

    let cards: Vec<Vec<Line<'static>>> = content::SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let width = match ctx.mode {
                LayoutMode::Wide => (ctx.content_width() - 2) / 2,
                LayoutMode::Compact => ctx.content_width(),
            };
            let mut body = vec![Line::from(vec![
                Span::styled(
                    format!(" {} ", category.icon),
                    p.badge_style(category.accent),
                ),
                Span::raw(" "),
                Span::styled(category.name.to_string(), p.heading_style()),
            ])];
            body.push(Line::default());
            // Pill badges, flowed onto as many rows as needed.
            let mut row: Vec<Span<'static>> = Vec::new();
            let mut used = 0usize;
            for skill in category.skills {
                let pill = format!("• {}", skill.name);
                let cell = pill.chars().count() + 2;
                if used > 0 && used + cell > width.saturating_sub(4) {
                    body.push(Line::from(std::mem::take(&mut row)));
                    used = 0;
                }
                row.push(Span::styled(pill, p.accent_style(category.accent)));
                row.push(Span::raw("  "));
                used += cell;
            }
            if !row.is_empty() {
                body.push(Line::from(row));
            }
            card(body, width, p)
        })
        .collect();

    match ctx.mode {
        LayoutMode::Wide => {
            let half = (ctx.content_width() - 2) / 2;
            for pair in cards.chunks(2) {
                match pair {
                    [left, right] => {
                        lines.extend(beside(left.clone(), right.clone(), half, 2))
                    }
                    [only] => lines.extend(only.clone()),
                    _ => {}
                }
                lines.push(Line::default());
            }
        }
        LayoutMode::Compact => {
            for c in cards {
                lines.extend(c);
                lines.push(Line::default());
            }
        }
    }

    // Stats row.
    let stat_cards: Vec<Vec<Line<'static>>> = content::STATS
        .iter()
        .map(|stat| {
            let width = match ctx.mode {
                LayoutMode::Wide => (ctx.content_width() - 4) / 3,
                LayoutMode::Compact => ctx.content_width(),
            };
            let body = vec![
                Line::from(Span::styled(
                    stat.value.to_string(),
                    p.accent_style(stat.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.label.to_string(), p.body_style())),
            ];
            card(body, width, p)
        })
        .collect();
    match ctx.mode {
        LayoutMode::Wide => {
            let third = (ctx.content_width() - 4) / 3;
            let mut it = stat_cards.into_iter();
            if let (Some(a), Some(b), Some(c)) = (it.next(), it.next(), it.next()) {
                let ab = beside(a, b, third, 2);
                lines.extend(beside(ab, c, third * 2 + 2, 2));
            }
        }
        LayoutMode::Compact => {
            for c in stat_cards {
                lines.extend(c);
            }
        }
    }

    indent(lines, ctx.margin())
}

// ───────────────────────────────────────── experience ────────

fn experience(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = heading(
        ctx,
        "My ",
        "Journey",
        "A timeline of growth and innovation in the world of technology",
    );

    let gutter = matches!(ctx.mode, LayoutMode::Wide);
    let card_width = if gutter {
        ctx.content_width().saturating_sub(4)
    } else {
        ctx.content_width()
    };
    let text_width = card_width.saturating_sub(4);

    for entry in content::EXPERIENCE {
        let mut body = Vec::new();
        if let Some(badge) = entry.badge {
            body.push(Line::from(Span::styled(
                format!(" {badge} "),
                p.badge_style(entry.accent),
            )));
        }
        body.push(Line::from(Span::styled(
            format!("▸ {}", entry.dates),
            p.muted_style(),
        )));
        body.push(Line::from(Span::styled(
            entry.role.to_string(),
            p.accent_style(entry.accent).add_modifier(Modifier::BOLD),
        )));
        body.push(Line::from(Span::styled(entry.org.to_string(), p.body_style())));
        body.push(Line::default());
        for row in wrap(entry.summary, text_width) {
            body.push(Line::from(Span::styled(row, p.body_style())));
        }
        body.push(Line::default());
        body.push(Line::from(Span::styled(
            "Key Achievements".to_string(),
            p.heading_style(),
        )));
        for item in entry.achievements {
            let mut first = true;
            for row in wrap(item, text_width.saturating_sub(2)) {
                let bullet = if first { "• " } else { "  " };
                first = false;
                body.push(Line::from(vec![
                    Span::styled(bullet.to_string(), p.accent_style(Accent::Cyan)),
                    Span::styled(row, p.body_style()),
                ]));
            }
        }

        let mut rendered = card(body, card_width, p);
        if gutter {
            // Timeline gutter: a dot on the first row, a rail below.
            for (i, line) in rendered.iter_mut().enumerate() {
                let marker = if i == 0 { "●" } else { "│" };
                let style = p.accent_style(entry.accent);
                let mut spans = vec![Span::styled(format!(" {marker}  "), style)];
                spans.extend(line.spans.clone());
                *line = Line::from(spans);
            }
        }
        lines.extend(rendered);
        lines.push(Line::default());
    }

    indent(lines, ctx.margin())
}

// ───────────────────────────────────────── projects ──────────

fn projects(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = heading(
        ctx,
        "Featured ",
        "Projects",
        "A selection of my recent work in AI/ML and cloud development",
    );

    let cards: Vec<Vec<Line<'static>>> = content::PROJECTS
        .iter()
        .map(|project| {
            let width = match ctx.mode {
                LayoutMode::Wide => (ctx.content_width() - 2) / 2,
                LayoutMode::Compact => ctx.content_width(),
            };
            let text_width = width.saturating_sub(4);
            let mut body = vec![Line::from(vec![
                Span::styled(
                    format!(" {} ", project.emblem),
                    p.badge_style(project.accent),
                ),
                Span::raw("  "),
                Span::styled(format!("⟨{}⟩", project.badge), p.muted_style()),
            ])];
            body.push(Line::default());
            body.push(Line::from(Span::styled(
                project.name.to_string(),
                p.heading_style(),
            )));
            body.push(Line::from(Span::styled(
                project.subtitle.to_string(),
                p.accent_style(project.accent),
            )));
            body.push(Line::default());
            for row in wrap(project.blurb, text_width) {
                body.push(Line::from(Span::styled(row, p.body_style())));
            }
            body.push(Line::default());
            let pills: Vec<Span<'static>> = project
                .tech
                .iter()
                .flat_map(|tech| {
                    [
                        Span::styled(format!("({tech})"), p.muted_style()),
                        Span::raw(" "),
                    ]
                })
                .collect();
            body.push(Line::from(pills));
            card(body, width, p)
        })
        .collect();

    match ctx.mode {
        LayoutMode::Wide => {
            let half = (ctx.content_width() - 2) / 2;
            for pair in cards.chunks(2) {
                match pair {
                    [left, right] => {
                        lines.extend(beside(left.clone(), right.clone(), half, 2))
                    }
                    [only] => lines.extend(only.clone()),
                    _ => {}
                }
                lines.push(Line::default());
            }
        }
        LayoutMode::Compact => {
            for c in cards {
                lines.extend(c);
                lines.push(Line::default());
            }
        }
    }

    indent(lines, ctx.margin())
}

// ───────────────────────────────────────── contact ───────────

fn contact(ctx: &SectionCtx) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = heading(ctx, "Get in ", "Touch", "");
    for row in wrap(content::CONTACT_PITCH, ctx.content_width().min(56)) {
        lines.push(Line::from(Span::styled(row, p.body_style())));
    }
    lines.push(Line::default());

    let link_cards: Vec<Vec<Line<'static>>> = content::CONTACT_LINKS
        .iter()
        .map(|link| {
            let width = match ctx.mode {
                LayoutMode::Wide => (ctx.content_width() - 2) / 2,
                LayoutMode::Compact => ctx.content_width(),
            };
            let body = vec![
                Line::from(Span::styled(
                    link.label.to_string(),
                    p.accent_style(link.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(link.value.to_string(), p.body_style())),
                Line::from(Span::styled(link.url.to_string(), p.muted_style())),
            ];
            card(body, width, p)
        })
        .collect();
    match ctx.mode {
        LayoutMode::Wide => {
            let half = (ctx.content_width() - 2) / 2;
            for pair in link_cards.chunks(2) {
                match pair {
                    [left, right] => {
                        lines.extend(beside(left.clone(), right.clone(), half, 2))
                    }
                    [only] => lines.extend(only.clone()),
                    _ => {}
                }
                lines.push(Line::default());
            }
        }
        LayoutMode::Compact => {
            for c in link_cards {
                lines.extend(c);
                lines.push(Line::default());
            }
        }
    }

    // Footer.
    lines.push(Line::from(Span::styled(
        "─".repeat(ctx.content_width()),
        p.border_style(),
    )));
    lines.push(Line::from(Span::styled(
        content::FOOTER_CREDIT.to_string(),
        p.muted_style(),
    )));
    let year = chrono::Local::now().format("%Y");
    lines.push(Line::from(Span::styled(
        format!("© {year} All rights reserved."),
        p.muted_style(),
    )));

    indent(lines, ctx.margin())
}

// ───────────────────────────────────────── helpers ───────────

/// Two-tone section heading plus optional subtitle, with padding above.
fn heading(
    ctx: &SectionCtx,
    plain: &str,
    accent: &str,
    subtitle: &str,
) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(format!("═══ {plain}"), p.heading_style()),
            Span::styled(
                accent.to_string(),
                p.accent_style(Accent::Purple).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ═══".to_string(), p.heading_style()),
        ]),
    ];
    for row in wrap(subtitle, ctx.content_width()) {
        lines.push(Line::from(Span::styled(row, p.muted_style())));
    }
    lines.push(Line::default());
    lines
}

/// Greedy word wrap. Overlong words land on their own row unbroken.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Frame `body` in a rounded box of exactly `width` columns.
fn card(body: Vec<Line<'static>>, width: usize, p: &Palette) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2);
    let border = p.border_style();
    let mut lines = vec![Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(inner)),
        border,
    ))];
    for row in body {
        let used = row.width().min(inner.saturating_sub(2));
        let mut spans = vec![Span::styled("│ ".to_string(), border)];
        spans.extend(truncate_spans(row.spans, inner.saturating_sub(2)));
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(2) - used)));
        spans.push(Span::styled(" │".to_string(), border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(inner)),
        border,
    )));
    lines
}

/// Clip spans to at most `width` display columns.
fn truncate_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut used = 0;
    for span in spans {
        let w = span.width();
        if used + w <= width {
            used += w;
            out.push(span);
        } else {
            let take = width.saturating_sub(used);
            if take > 0 {
                let clipped: String = span.content.chars().take(take).collect();
                out.push(Span::styled(clipped, span.style));
            }
            break;
        }
    }
    out
}

/// Place two blocks side by side; the left one is padded to `left_width`.
fn beside(
    left: Vec<Line<'static>>,
    right: Vec<Line<'static>>,
    left_width: usize,
    gap: usize,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let mut spans = Vec::new();
            let used = left.get(i).map_or(0, Line::width);
            if let Some(line) = left.get(i) {
                spans.extend(line.spans.iter().cloned());
            }
            spans.push(Span::raw(" ".repeat(left_width.saturating_sub(used) + gap)));
            if let Some(line) = right.get(i) {
                spans.extend(line.spans.iter().cloned());
            }
            Line::from(spans)
        })
        .collect()
}

/// Shift a block right by `margin` columns.
fn indent(lines: Vec<Line<'static>>, margin: usize) -> Vec<Line<'static>> {
    if margin == 0 {
        return lines;
    }
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(" ".repeat(margin))];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}
