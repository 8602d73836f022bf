//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::section::Section;
use crate::ui::layout::AppLayout;
use crate::ui::navbar;

use super::state::{AppState, SCROLL_STEP};

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Direct anchor jumps: 1 = Home … 6 = Contact.
    if let KeyCode::Char(c @ '1'..='6') = key.code {
        let index = c as usize - '1' as usize;
        if let Some(&section) = Section::ALL.get(index) {
            state.scroll_to_section(section);
        }
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::ScrollUp => state.scroll_by(-(SCROLL_STEP as isize)),
        Action::ScrollDown => state.scroll_by(SCROLL_STEP as isize),
        Action::PageUp => state.scroll_by(-(state.page_rows as isize)),
        Action::PageDown => state.scroll_by(state.page_rows as isize),
        Action::Top => state.scroll_to_section(Section::Home),
        Action::Bottom => {
            let max = state.page.max_scroll(state.page_rows);
            state.scroll_by(max as isize);
        }
        Action::NextSection => state.scroll_to_section(state.active_section.next()),
        Action::PrevSection => state.scroll_to_section(state.active_section.prev()),
        Action::ToggleTheme => state.toggle_theme(),
    }
}

/// Process a mouse event. The wheel scrolls; left-clicking a navbar link
/// navigates to its section.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_by(-(SCROLL_STEP as isize)),
        MouseEventKind::ScrollDown => state.scroll_by(SCROLL_STEP as isize),
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row < AppLayout::NAVBAR_ROWS {
                if let Some(section) = navbar::link_at(mouse.column, state.mode) {
                    state.scroll_to_section(section);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::AppConfig;
    use crate::ui::layout::LayoutMode;
    use ratatui::layout::Rect;

    fn state_with_page() -> AppState {
        let mut state = AppState::new(AppConfig::defaults());
        let layout = AppLayout::from_area(Rect::new(0, 0, 120, 40));
        state.ensure_page(layout.page_area);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = state_with_page();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn digit_keys_jump_to_anchors() {
        let mut state = state_with_page();
        handle_key(&mut state, key(KeyCode::Char('4')));
        let band = state.page.band(Section::Experience).unwrap();
        assert_eq!(
            state.scroll_target,
            band.start.min(state.page.max_scroll(state.page_rows))
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut state = state_with_page();
        let before = state.scroll_target;
        handle_key(&mut state, key(KeyCode::Char('z')));
        assert_eq!(state.scroll_target, before);
        assert!(!state.should_quit);
    }

    #[test]
    fn wheel_scrolls_by_the_step() {
        let mut state = state_with_page();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, wheel);
        assert_eq!(state.scroll_target, SCROLL_STEP);
    }

    #[test]
    fn clicking_a_navbar_link_navigates() {
        let mut state = state_with_page();
        assert_eq!(state.mode, LayoutMode::Wide);
        let cells = navbar::link_cells(LayoutMode::Wide);
        let (section, range) = cells.last().cloned().unwrap();

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: range.start,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, click);
        let band = state.page.band(section).unwrap();
        assert_eq!(
            state.scroll_target,
            band.start.min(state.page.max_scroll(state.page_rows))
        );
    }

    #[test]
    fn clicks_below_the_navbar_do_nothing() {
        let mut state = state_with_page();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, click);
        assert_eq!(state.scroll_target, 0);
    }
}
