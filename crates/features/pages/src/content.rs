//! The content document: event details, navigation, people and working groups.
//!
//! The bundled document is compiled into the binary; a file on disk can replace it.

use crate::error::{PagesError, PagesErrorExt};
use aasm_domain::people::{Lecturer, Roster};
use aasm_domain::section::{Section, section_id};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

const EMBEDDED: &str = include_str!("../content/site.toml");

/// An image reference. Paths are opaque and served from the static directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Short texts shown in place of sections whose details are still pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Notices {
    pub program: String,
    pub registration: String,
    pub venue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventInfo {
    pub title: String,
    pub short_title: String,
    pub dates: String,
    pub location: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub hero: Option<Image>,
    #[serde(default)]
    pub logos: Vec<Image>,
    #[serde(default)]
    pub notices: Notices,
}

/// Everything the site displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub event: EventInfo,
    /// Menu labels in display order.
    pub navigation: Vec<String>,
    #[serde(default)]
    pub lecturers: Vec<Lecturer>,
    #[serde(default)]
    pub directory: Roster,
}

impl SiteContent {
    /// The document bundled with the binary.
    ///
    /// # Errors
    /// Fails only if the bundled document itself is broken.
    pub fn embedded() -> Result<Self, PagesError> {
        Self::from_toml_str(EMBEDDED).context("Bundled content")
    }

    /// Reads and validates a content document from disk.
    ///
    /// # Errors
    /// [`PagesError::Io`] when the file cannot be read, otherwise as [`SiteContent::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PagesError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading site content");

        let raw = std::fs::read_to_string(path).context(path.display().to_string())?;
        Self::from_toml_str(&raw).context(path.display().to_string())
    }

    /// Uses `path` when given, the bundled document otherwise.
    ///
    /// # Errors
    /// As [`SiteContent::from_path`] or [`SiteContent::embedded`].
    pub fn load(path: Option<&Path>) -> Result<Self, PagesError> {
        path.map_or_else(Self::embedded, Self::from_path)
    }

    /// Parses and validates a content document.
    ///
    /// # Errors
    /// [`PagesError::Content`] for malformed TOML, [`PagesError::Validation`] for rule violations.
    pub fn from_toml_str(raw: &str) -> Result<Self, PagesError> {
        let content: Self = toml::from_str(raw)?;
        content.validate()?;

        debug!(
            scientific = content.directory.scientific.len(),
            working_groups = content.directory.working_groups.len(),
            lecturers = content.lecturers.len(),
            "Site content parsed"
        );
        Ok(content)
    }

    /// Checks the rules serde cannot express.
    ///
    /// # Errors
    /// [`PagesError::Validation`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), PagesError> {
        if self.navigation.is_empty() {
            return Err(PagesError::validation("navigation must list at least one section"));
        }
        for label in &self.navigation {
            let id = section_id(label);
            if Section::parse(&id).is_none() {
                return Err(PagesError::validation(format!("navigation label `{label}` names no section")));
            }
        }

        let roster = &self.directory;
        let mut people = roster.organizing.iter().chain(&roster.scientific);
        if let Some(person) = people.find(|p| p.name.trim().is_empty()) {
            return Err(PagesError::validation(format!(
                "committee entry with affiliation `{}` has an empty name",
                person.affiliation
            )));
        }
        if self.lecturers.iter().any(|l| l.name.trim().is_empty()) {
            return Err(PagesError::validation("lecturer with an empty name"));
        }

        for group in &roster.working_groups {
            if group.members.is_empty() {
                return Err(PagesError::validation(format!(
                    "working group `{}` has no members",
                    group.topic
                )));
            }
            if group.members.iter().any(|m| m.trim().is_empty()) {
                return Err(PagesError::validation(format!(
                    "working group `{}` lists an empty member name",
                    group.topic
                )));
            }
        }

        Ok(())
    }

    /// Sections in menu order, as declared by `navigation`.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.navigation.iter().map(|label| Section::from_label(label))
    }
}
