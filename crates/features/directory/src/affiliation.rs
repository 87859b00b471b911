//! Affiliation lookup.
//!
//! [`lookup_affiliation`] keeps the historical substring match. [`AffiliationIndex`] is the exact
//! lookup used for bylines: names are compared after [`normalize_name`], and variant spellings only
//! resolve when the alias table says so.

use aasm_domain::people::{AliasTable, Person};
use fxhash::FxHashMap;
use tracing::debug;

/// Anything that can answer "which institution does this person belong to".
///
/// Unknown names resolve to `""`, never to an error.
pub trait AffiliationSource {
    fn affiliation_of(&self, name: &str) -> &str;
}

/// Affiliation of the first committee entry whose name contains `name`.
///
/// Returns `""` when no entry matches. An empty `name` matches the first entry.
///
/// ```rust
/// use aasm_directory::affiliation::lookup_affiliation;
/// use aasm_domain::people::Person;
///
/// let committee = [Person::new("Alvise Sommariva", "Padua")];
/// assert_eq!(lookup_affiliation(&committee, "Sommariva"), "Padua");
/// assert_eq!(lookup_affiliation(&committee, "Nonexistent"), "");
/// ```
#[must_use]
pub fn lookup_affiliation<'a>(committee: &'a [Person], name: &str) -> &'a str {
    committee
        .iter()
        .find(|person| person.name.contains(name))
        .map_or("", |person| person.affiliation.as_str())
}

impl AffiliationSource for [Person] {
    fn affiliation_of(&self, name: &str) -> &str {
        lookup_affiliation(self, name)
    }
}

/// Comparison form of a name: trimmed, inner whitespace collapsed to one space, lower-cased.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Exact-match affiliation lookup over one committee plus an alias table.
#[derive(Debug, Clone, Default)]
pub struct AffiliationIndex {
    affiliations: FxHashMap<String, String>,
    aliases: FxHashMap<String, String>,
}

impl AffiliationIndex {
    /// Indexes `committee`. When two entries normalize to the same key the first one wins.
    #[must_use]
    pub fn new(committee: &[Person]) -> Self {
        let mut affiliations = FxHashMap::default();
        for person in committee {
            affiliations
                .entry(normalize_name(&person.name))
                .or_insert_with(|| person.affiliation.clone());
        }

        Self { affiliations, aliases: FxHashMap::default() }
    }

    /// Adds variant spellings. Each alias points at a canonical committee name.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &AliasTable) -> Self {
        self.aliases.extend(
            aliases.iter().map(|(variant, canonical)| (normalize_name(variant), normalize_name(canonical))),
        );
        self
    }

    /// Affiliation for `name`, or `""` if neither the name nor an alias of it is indexed.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &str {
        let key = normalize_name(name);

        let found = self.affiliations.get(&key).or_else(|| {
            self.aliases.get(&key).and_then(|canonical| self.affiliations.get(canonical))
        });

        found.map_or_else(
            || {
                debug!(member = name, "No committee entry for working-group member");
                ""
            },
            String::as_str,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.affiliations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.affiliations.is_empty()
    }
}

impl AffiliationSource for AffiliationIndex {
    fn affiliation_of(&self, name: &str) -> &str {
        self.resolve(name)
    }
}
