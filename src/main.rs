//! A single-page portfolio for your terminal.
//!
//! Run the binary to browse the page interactively.
//! Run with `--links` to print the contact links and exit.

mod app;
mod config;
mod content;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::core::section::Section;
use crate::ui::{layout::AppLayout, navbar::NavBar, page::PageView, theme::ThemeMode};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Single-page portfolio TUI")]
struct Cli {
    /// Section to open at, e.g. `projects` or `contact`.
    #[arg(long)]
    section: Option<Section>,

    /// Start with the light palette (overrides the saved preference).
    #[arg(long)]
    light: bool,

    /// Disable smooth scrolling and reveal transitions.
    #[arg(long = "no-motion")]
    no_motion: bool,

    /// Print the contact links and exit.
    #[arg(long)]
    links: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── plain-text mode ───────────────────────────────────────
    if cli.links {
        for link in content::CONTACT_LINKS {
            println!("{:<10} {}", link.label, link.url);
        }
        return Ok(());
    }

    // ── load config, apply CLI overrides ──────────────────────
    let mut user_config = config::AppConfig::load();
    if cli.light {
        user_config.theme = ThemeMode::Light;
    }
    if cli.no_motion {
        user_config.reduce_motion = true;
    }
    let mut state = AppState::new(user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(50));

    // The page is laid out on the first draw; the jump waits until
    // the anchor map exists.
    let mut pending_jump = cli.section;

    // ── event loop ────────────────────────────────────────────
    loop {
        // ── draw first ─────────────────────────────────────────
        // Rendering re-lays-out the page on width changes, so input
        // handlers always see anchors that match what is on screen.
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            state.ensure_page(layout.page_area);

            let palette = state.theme.palette();
            frame.render_widget(
                PageView::new(&state.page, &state.reveals, palette, state.displayed_offset()),
                layout.page_area,
            );
            frame.render_widget(
                NavBar {
                    mode: state.mode,
                    active: state.active_section,
                    scrolled: state.navbar_scrolled(),
                    theme: state.theme,
                },
                layout.navbar_area,
            );

            let hint = state.config.status_bar_hint();
            let status_text = state.status_message.as_deref().unwrap_or(&hint);
            let status = Paragraph::new(status_text).style(palette.status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        if let Some(section) = pending_jump.take() {
            state.scroll_to_section(section);
            state.scroll.snap(); // open directly on the anchor
        }

        tokio::select! {
            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => {
                        state.status_message = None;
                        handler::handle_key(&mut state, k);
                    }
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(_, _) => {}
                    AppEvent::Tick => state.on_tick(Instant::now()),
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
