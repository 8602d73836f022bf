//! User configuration — keybindings, theme, and motion preferences.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).
//! Anything malformed falls back to the built-in defaults line by line.

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::theme::ThemeMode;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    ToggleTheme,
    Quit,
}

impl Action {
    /// Ordered list of all actions (config serialisation order).
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::NextSection,
        Action::PrevSection,
        Action::ToggleTheme,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::NextSection => "next_section",
            Action::PrevSection => "prev_section",
            Action::ToggleTheme => "toggle_theme",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Named special keys, shared by the parser and the serialiser.
const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Enter", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Tab", KeyCode::Tab),
    ("BackTab", KeyCode::BackTab),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Space", KeyCode::Char(' ')),
];

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event? Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Config/display string, e.g. `"Ctrl+c"`, `"Alt+Up"`, `"g"`.
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        let name = KEY_NAMES
            .iter()
            .find(|(_, code)| *code == self.code)
            .map(|(name, _)| (*name).to_string());
        s.push_str(&name.unwrap_or_else(|| match self.code {
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}"),
        }));
        s
    }

    /// Parse a key string like `"Ctrl+g"`, `"Alt+Down"`, `"t"`, `"End"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let named = KEY_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key_part))
            .map(|(_, code)| *code);
        let code = match named {
            Some(code) => code,
            None if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            None => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings plus page preferences.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Palette the page starts with.
    pub theme: ThemeMode,
    /// Disable smooth scrolling and reveal motion (the reveal still
    /// switches styles, it just snaps).
    pub reduce_motion: bool,
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        // `PageUp`/`PageDown` exist in both enums, so qualify the action.
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(Action::PageDown, vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)]);
        m.insert(Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(Bottom, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), KeyModifiers::SHIFT)]);
        m.insert(NextSection, vec![KeyBind::new(Tab, n), KeyBind::new(Char('n'), n)]);
        m.insert(PrevSection, vec![KeyBind::new(BackTab, KeyModifiers::SHIFT), KeyBind::new(Char('p'), n)]);
        m.insert(ToggleTheme, vec![KeyBind::new(Char('t'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event. When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            " {}/{}: scroll | {}: next section | 1-6: jump | {}: theme | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::ToggleTheme),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse(&contents);
            }
        }
        Self::defaults()
    }

    /// Built-in defaults (no file involved).
    pub fn defaults() -> Self {
        Self {
            bindings: Self::default_bindings(),
            theme: ThemeMode::Dark,
            reduce_motion: false,
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::defaults();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "theme" => {
                    config.theme = match value {
                        "light" => ThemeMode::Light,
                        _ => ThemeMode::Dark,
                    };
                    continue;
                }
                "reduce_motion" => {
                    config.reduce_motion = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };
            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# folio configuration".to_string(),
            String::new(),
            "# Page preferences".to_string(),
            format!("theme = {}", self.theme.label()),
            format!("reduce_motion = {}", self.reduce_motion),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...  (modifiers: Ctrl+, Alt+, Shift+)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::display).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/folio/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio").join("config.toml")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("t", KeyCode::Char('t'), KeyModifiers::NONE)]
    #[case("Ctrl+g", KeyCode::Char('g'), KeyModifiers::CONTROL)]
    #[case("Alt+Down", KeyCode::Down, KeyModifiers::ALT)]
    #[case("space", KeyCode::Char(' '), KeyModifiers::NONE)]
    #[case("end", KeyCode::End, KeyModifiers::NONE)]
    fn keybind_round_trips(
        #[case] input: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        let bind = KeyBind::parse(input).unwrap();
        assert_eq!(bind.code, code);
        assert_eq!(bind.modifiers, modifiers);
        assert_eq!(KeyBind::parse(&bind.display()), Some(bind));
    }

    #[test]
    fn keybind_rejects_garbage() {
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("NotAKey"), None);
    }

    #[test]
    fn parse_reads_preferences_and_overrides() {
        let config = AppConfig::parse(
            "theme = light\nreduce_motion = true\nquit = x\n# comment\nbogus line\n",
        );
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.reduce_motion);
        assert_eq!(
            config.bindings[&Action::Quit],
            vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::NONE)]
        );
        // Untouched actions keep their defaults.
        assert!(!config.bindings[&Action::ScrollUp].is_empty());
    }

    #[test]
    fn serialise_round_trips() {
        let mut config = AppConfig::defaults();
        config.theme = ThemeMode::Light;
        config.reduce_motion = true;

        let parsed = AppConfig::parse(&config.serialise());
        assert_eq!(parsed.theme, ThemeMode::Light);
        assert!(parsed.reduce_motion);
        for &action in Action::ALL {
            assert_eq!(parsed.bindings[&action], config.bindings[&action], "{action:?}");
        }
    }

    #[test]
    fn default_paging_keys_map_to_paging_actions() {
        let config = AppConfig::defaults();
        let page_up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(config.match_key(page_up), Some(Action::PageUp));
        let page_down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(config.match_key(page_down), Some(Action::PageDown));
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(config.match_key(space), Some(Action::PageDown));
    }

    #[test]
    fn match_key_prefers_more_modifiers() {
        let config = AppConfig::defaults();
        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(config.match_key(shift_g), Some(Action::Bottom));
        let plain_g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(config.match_key(plain_g), Some(Action::Top));
    }
}
