//! Named page sections — the in-page anchor vocabulary.
//!
//! Navigation (keys, navbar clicks, `--section`) speaks in terms of these
//! anchors; the page composer reports where each one landed on the
//! current frame.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The anchored sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: &[Section] = &[
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown in the navbar and section headings.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Get in Touch",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .unwrap_or_default()
    }

    /// The section below this one; the last section saturates.
    pub fn next(self) -> Section {
        let i = self.index();
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// The section above this one; the first section saturates.
    pub fn prev(self) -> Section {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognised section name (surfaced through clap).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section `{0}` (expected home, about, skills, experience, projects or contact)")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Section::Home),
            "about" => Ok(Section::About),
            "skills" => Ok(Section::Skills),
            "experience" => Ok(Section::Experience),
            "projects" => Ok(Section::Projects),
            "contact" => Ok(Section::Contact),
            _ => Err(ParseSectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("home", Section::Home)]
    #[case("About", Section::About)]
    #[case("SKILLS", Section::Skills)]
    #[case("experience", Section::Experience)]
    #[case("projects", Section::Projects)]
    #[case("contact", Section::Contact)]
    fn parses_names_case_insensitively(#[case] input: &str, #[case] expected: Section) {
        assert_eq!(input.parse::<Section>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert!(err.to_string().contains("blog"));
    }

    #[test]
    fn ordering_saturates_at_both_ends() {
        assert_eq!(Section::Home.prev(), Section::Home);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.prev(), Section::Projects);
    }

    #[test]
    fn index_matches_scroll_order() {
        for (i, &s) in Section::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}
