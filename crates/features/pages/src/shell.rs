//! Navigation state of the page shell.
//!
//! The visible section and the menu flag live in an explicit [`ShellState`] value that is handed to
//! the renderer. The section is mirrored in the URL fragment so a reload lands on the same section.

use aasm_domain::section::{Section, section_id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShellState {
    pub active: Section,
    pub menu_open: bool,
}

impl ShellState {
    #[must_use]
    pub const fn new(active: Section) -> Self {
        Self { active, menu_open: false }
    }

    /// State restored from a URL fragment; unknown or empty fragments show the home section.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        Self::new(Section::from_fragment(fragment))
    }

    /// Shows `section` and closes the menu.
    pub const fn navigate(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    #[must_use]
    pub fn fragment(&self) -> String {
        self.active.fragment()
    }

    /// Menu entries for `labels`, with the active one marked.
    #[must_use]
    pub fn nav_items(&self, labels: &[String]) -> Vec<NavItem> {
        labels.iter().map(|label| NavItem::new(label, self.active)).collect()
    }

    /// Link that flips the menu while staying on the current section.
    #[must_use]
    pub fn menu_toggle_href(&self) -> String {
        let mut toggled = *self;
        toggled.toggle_menu();
        if toggled.menu_open {
            format!("{}?menu=open", page_path(self.active))
        } else {
            page_path(self.active)
        }
    }
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub id: String,
    pub href: String,
    pub active: bool,
}

impl NavItem {
    fn new(label: &str, active: Section) -> Self {
        let id = section_id(label);
        let section = Section::from_id(&id);
        let href = format!("{}{}", page_path(section), section.fragment());

        Self { label: label.to_owned(), active: section == active, id, href }
    }
}

/// Path under which a section's page is served and exported.
#[must_use]
pub fn page_path(section: Section) -> String {
    format!("/{}", section.id())
}
