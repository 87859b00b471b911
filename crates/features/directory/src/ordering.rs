//! Family-name ordering.
//!
//! The family-name key is the lower-cased last whitespace-delimited token of a display name.
//! "De Rossi" therefore keys on `rossi`: compound family names are not recognised. Keys compare
//! by base letter first ("Pérez" sorts with "perez", before "Perry"), then by the exact key. Every
//! sort here is stable, so entries with equal keys keep their input order.

use aasm_domain::people::{Person, WorkingGroup};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sort key for a display name.
///
/// A single token keys on itself. A name with no tokens at all (empty or whitespace only)
/// keys on the whole string, lower-cased.
///
/// ```rust
/// use aasm_directory::ordering::family_name_key;
///
/// assert_eq!(family_name_key("Luisa FERMO"), "fermo");
/// assert_eq!(family_name_key("Plato"), "plato");
/// assert_eq!(family_name_key(""), "");
/// ```
#[must_use]
pub fn family_name_key(name: &str) -> String {
    name.split_whitespace().next_back().unwrap_or(name).to_lowercase()
}

/// Comparison form of a family-name key: base letters first, the exact key as tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey {
    folded: String,
    exact: String,
}

impl CollationKey {
    /// The key with diacritics removed (`"pérez"` becomes `"perez"`).
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// The [`family_name_key`] it was built from.
    #[must_use]
    pub fn exact(&self) -> &str {
        &self.exact
    }
}

/// Collation key the sorts below order by.
///
/// ```rust
/// use aasm_directory::ordering::collation_key;
///
/// assert!(collation_key("Ana Ábalos") < collation_key("Ben Zeta"));
/// assert!(collation_key("Teresa Pérez") < collation_key("Teresa Perry"));
/// ```
#[must_use]
pub fn collation_key(name: &str) -> CollationKey {
    let exact = family_name_key(name);
    let folded = exact.nfd().filter(|c| !is_combining_mark(*c)).collect();
    CollationKey { folded, exact }
}

/// Returns a copy of `people` ordered by family name.
#[must_use]
pub fn sort_by_family_name(people: &[Person]) -> Vec<Person> {
    let mut sorted = people.to_vec();
    sorted.sort_by_cached_key(|person| collation_key(&person.name));
    sorted
}

/// Same ordering as [`sort_by_family_name`], applied to bare names.
#[must_use]
pub fn sort_names_by_family_name<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().map(|name| name.as_ref().to_owned()).collect();
    sorted.sort_by_cached_key(|name| collation_key(name));
    sorted
}

/// Orders groups by the family name of their first declared member.
///
/// The key is taken from `members` as declared, before any per-group member ordering.
/// A group without members keys on the empty string and so sorts first.
#[must_use]
pub fn sort_working_groups(groups: &[WorkingGroup]) -> Vec<WorkingGroup> {
    let mut sorted = groups.to_vec();
    sorted.sort_by_cached_key(|group| {
        collation_key(group.members.first().map_or("", String::as_str))
    });
    sorted
}
