//! Directory feature slice.
//!
//! Orders committee members and working groups by family name and resolves the affiliations shown
//! in working-group bylines. Every operation is pure: inputs are borrowed, results are new values,
//! and a name that cannot be resolved degrades to an empty affiliation.

pub mod affiliation;
#[cfg(feature = "server")]
pub mod api;
mod byline;
pub mod ordering;

pub use crate::affiliation::{AffiliationIndex, AffiliationSource, lookup_affiliation};
pub use crate::byline::{Byline, BylineMember, build_working_group_byline};
pub use crate::ordering::{
    CollationKey, collation_key, family_name_key, sort_by_family_name, sort_names_by_family_name, sort_working_groups,
};
use aasm_domain::people::{Committee, Person, Roster, WorkingGroup};
use aasm_kernel::domain::registry::InitializedSlice;

/// Directory state: sorted committees, sorted working groups and their bylines.
#[aasm_derive::site_slice]
pub struct Directory {
    organizing: Committee,
    scientific: Committee,
    working_groups: Vec<WorkingGroup>,
    bylines: Vec<Byline>,
    index: AffiliationIndex,
}

impl Directory {
    /// Builds the directory from declared content.
    ///
    /// The affiliation index is taken from the scientific committee in declared order, so the
    /// first of two identical names wins.
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        let index = AffiliationIndex::new(&roster.scientific).with_aliases(&roster.aliases);
        let working_groups = sort_working_groups(&roster.working_groups);
        let bylines =
            working_groups.iter().map(|group| build_working_group_byline(group, &index)).collect();

        Self::new(DirectoryInner {
            organizing: sort_by_family_name(&roster.organizing),
            scientific: sort_by_family_name(&roster.scientific),
            working_groups,
            bylines,
            index,
        })
    }

    #[must_use]
    pub fn organizing(&self) -> &[Person] {
        &self.organizing
    }

    #[must_use]
    pub fn scientific(&self) -> &[Person] {
        &self.scientific
    }

    #[must_use]
    pub fn working_groups(&self) -> &[WorkingGroup] {
        &self.working_groups
    }

    /// One byline per entry of [`Directory::working_groups`], same order.
    #[must_use]
    pub fn bylines(&self) -> &[Byline] {
        &self.bylines
    }

    /// Exact (normalized, alias-aware) affiliation lookup in the scientific committee.
    #[must_use]
    pub fn affiliation_of(&self, name: &str) -> &str {
        self.index.resolve(name)
    }
}

/// Registers a built directory as a feature slice.
#[must_use]
pub fn init(directory: Directory) -> InitializedSlice {
    tracing::info!(
        organizing = directory.organizing().len(),
        scientific = directory.scientific().len(),
        working_groups = directory.working_groups().len(),
        "Directory slice initialized"
    );

    InitializedSlice::new(directory)
}
