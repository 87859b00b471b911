//! People, committees and working groups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic placeholder for a working group whose subject is not public yet.
pub const TOPIC_TO_BE_ANNOUNCED: &str = "[To be announced]";

/// A committee member or working-group participant.
///
/// `name` is a display name, "[First [Middle]] Last"; `affiliation` is free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
}

impl Person {
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self { name: name.into(), affiliation: affiliation.into() }
    }
}

/// An ordered committee roster. Entries need not be unique.
pub type Committee = Vec<Person>;

/// Variant spelling -> canonical committee name.
pub type AliasTable = BTreeMap<String, String>;

/// How a working group's members are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberOrder {
    /// Ascending by family-name key.
    #[default]
    FamilyName,
    /// Exactly as declared in `members`.
    AsListed,
}

/// A collaboration unit: members (names from the scientific committee) and a topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkingGroup {
    pub members: Vec<String>,
    pub topic: String,
    #[serde(default)]
    pub display_order: MemberOrder,
}

impl WorkingGroup {
    pub fn new<I, S>(members: I, topic: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            topic: topic.into(),
            display_order: MemberOrder::default(),
        }
    }

    /// Pins or releases the member order.
    #[must_use]
    pub const fn with_display_order(mut self, order: MemberOrder) -> Self {
        self.display_order = order;
        self
    }

    /// `false` while the topic is still the placeholder.
    #[must_use]
    pub fn is_announced(&self) -> bool {
        self.topic.trim() != TOPIC_TO_BE_ANNOUNCED
    }
}

/// A school lecturer and the course they give.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    pub name: String,
    pub affiliation: String,
    pub title: String,
}

/// Everything the directory is built from, as declared in the content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub organizing: Committee,
    pub scientific: Committee,
    pub working_groups: Vec<WorkingGroup>,
    pub aliases: AliasTable,
}
