//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task
//! that forwards them over a channel so the main loop stays non-blocking.
//! Ticks arrive whenever the terminal is idle for one tick interval; they
//! drive the scroll and reveal animations.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

impl AppEvent {
    /// Translate a crossterm event, dropping the ones we never act on
    /// (key releases, focus and paste events).
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns a background task that polls the terminal for events and sends
/// them through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let has_event = event::poll(tick_rate).unwrap_or(false);
            let app_event = if has_event {
                match event::read() {
                    Ok(ev) => match AppEvent::from_crossterm(ev) {
                        Some(ev) => ev,
                        None => continue,
                    },
                    Err(_) => continue,
                }
            } else {
                // Nothing within tick_rate — emit an animation tick.
                AppEvent::Tick
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
