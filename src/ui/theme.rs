//! Colour palettes and text styles — dark and light, toggled at runtime.

use ratatui::style::{Color, Modifier, Style};

use crate::content::Accent;

/// Which palette the page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Central palette — change colours here and they propagate everywhere.
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub card: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub purple: Color,
    pub pink: Color,
    pub cyan: Color,
}

pub static DARK: Palette = Palette {
    bg: Color::Rgb(0x00, 0x00, 0x00),
    surface: Color::Rgb(0x0a, 0x0a, 0x0a),
    card: Color::Rgb(0x1a, 0x1a, 0x1a),
    border: Color::Rgb(0x2a, 0x2a, 0x2a),
    text: Color::Rgb(0xff, 0xff, 0xff),
    text_secondary: Color::Rgb(0xd1, 0xd5, 0xdb),
    text_tertiary: Color::Rgb(0x9c, 0xa3, 0xaf),
    purple: Color::Rgb(0xa7, 0x8b, 0xfa),
    pink: Color::Rgb(0xf4, 0x72, 0xb6),
    cyan: Color::Rgb(0x06, 0xb6, 0xd4),
};

pub static LIGHT: Palette = Palette {
    bg: Color::Rgb(0xff, 0xff, 0xff),
    surface: Color::Rgb(0xf9, 0xfa, 0xfb),
    card: Color::Rgb(0xff, 0xff, 0xff),
    border: Color::Rgb(0xe5, 0xe7, 0xeb),
    text: Color::Rgb(0x11, 0x18, 0x27),
    text_secondary: Color::Rgb(0x37, 0x41, 0x51),
    text_tertiary: Color::Rgb(0x6b, 0x72, 0x80),
    purple: Color::Rgb(0x7c, 0x3a, 0xed),
    pink: Color::Rgb(0xec, 0x48, 0x99),
    cyan: Color::Rgb(0x06, 0xb6, 0xd4),
};

impl Palette {
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Purple => self.purple,
            Accent::Pink => self.pink,
            Accent::Cyan => self.cyan,
        }
    }

    // ── page text ──────────────────────────────────────────────
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self, accent: Accent) -> Style {
        Style::default().fg(self.accent(accent)).bg(self.bg)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.bg)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_tertiary).bg(self.bg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    pub fn badge_style(&self, accent: Accent) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent(accent))
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn navbar_transparent_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn navbar_opaque_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn nav_link_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.purple)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.card).fg(self.text_tertiary)
    }
}
