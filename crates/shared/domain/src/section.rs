//! Site sections and their navigation identifiers.
//!
//! A section identifier is derived from its menu label: lower-cased, spaces replaced by hyphens
//! ("Working Groups" -> "working-groups"). The identifier doubles as the URL fragment.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The static content blocks the shell can display.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    About,
    Committees,
    Lecturers,
    WorkingGroups,
    Program,
    Registration,
    Venue,
}

impl Section {
    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Committees => "Committees",
            Self::Lecturers => "Lecturers",
            Self::WorkingGroups => "Working Groups",
            Self::Program => "Program",
            Self::Registration => "Registration",
            Self::Venue => "Venue",
        }
    }

    /// Navigation identifier; equals `section_id(self.label())`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Committees => "committees",
            Self::Lecturers => "lecturers",
            Self::WorkingGroups => "working-groups",
            Self::Program => "program",
            Self::Registration => "registration",
            Self::Venue => "venue",
        }
    }

    /// Exact identifier lookup.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::iter().find(|section| section.id() == id)
    }

    /// Identifier lookup with the shell's fallback: anything unknown shows the home page.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::parse(id).unwrap_or_default()
    }

    /// Section named by a menu label ("Working Groups").
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::from_id(&section_id(label))
    }

    /// URL fragment mirroring this section, e.g. `#working-groups`.
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#{}", self.id())
    }

    /// Restores a section from a URL fragment, with or without the leading `#`.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        Self::from_id(fragment.trim().trim_start_matches('#'))
    }

    /// All sections in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derives a navigation identifier from a menu label.
#[must_use]
pub fn section_id(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

/// Number of sections in the menu.
pub const SECTION_COUNT: usize = Section::COUNT;
