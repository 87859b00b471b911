use crate::affiliation::AffiliationSource;
use crate::ordering::sort_names_by_family_name;
use aasm_domain::people::{MemberOrder, WorkingGroup};
use serde::Serialize;
use std::fmt;

/// A working-group member next to the institution resolved for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BylineMember {
    pub name: String,
    /// Empty when the name could not be resolved.
    pub affiliation: String,
}

/// Display form of a working group: ordered, affiliated members and the topic.
///
/// Formats as `Name (Affiliation) and Name (Affiliation): topic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Byline {
    pub members: Vec<BylineMember>,
    pub topic: String,
    pub announced: bool,
}

impl fmt::Display for BylineMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.affiliation.trim().is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.affiliation)
        }
    }
}

impl fmt::Display for Byline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, ": {}", self.topic)
    }
}

/// Orders the group's members per its [`MemberOrder`] and pairs each with an affiliation.
///
/// Passing a committee slice resolves by substring; passing an
/// [`AffiliationIndex`](crate::affiliation::AffiliationIndex) resolves by normalized full name.
pub fn build_working_group_byline<S>(group: &WorkingGroup, source: &S) -> Byline
where
    S: AffiliationSource + ?Sized,
{
    let names = match group.display_order {
        MemberOrder::FamilyName => sort_names_by_family_name(group.members.as_slice()),
        MemberOrder::AsListed => group.members.clone(),
    };

    let members = names
        .into_iter()
        .map(|name| {
            let affiliation = source.affiliation_of(&name).to_owned();
            BylineMember { name, affiliation }
        })
        .collect();

    Byline { members, topic: group.topic.clone(), announced: group.is_announced() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affiliation::AffiliationIndex;
    use aasm_domain::people::{Person, TOPIC_TO_BE_ANNOUNCED};

    fn scientific() -> Vec<Person> {
        vec![
            Person::new("Amir Noorizadegan", "Hong Kong Baptist University"),
            Person::new("Roberto Cavoretto", "University of Turin, Italy"),
        ]
    }

    #[test]
    fn members_sort_by_family_name_and_topic_follows_colon() {
        let group = WorkingGroup::new(
            ["Amir Noorizadegan", "Roberto Cavoretto"],
            "Meshless methods and scientific Machine Learning",
        );

        let byline = build_working_group_byline(&group, scientific().as_slice());
        assert_eq!(
            byline.to_string(),
            "Roberto Cavoretto (University of Turin, Italy) and Amir Noorizadegan (Hong Kong Baptist \
             University): Meshless methods and scientific Machine Learning"
        );
    }

    #[test]
    fn as_listed_pins_declared_order() {
        let group = WorkingGroup::new(["Amir Noorizadegan", "Roberto Cavoretto"], "Meshless")
            .with_display_order(MemberOrder::AsListed);

        let byline = build_working_group_byline(&group, &AffiliationIndex::new(&scientific()));
        let order: Vec<_> = byline.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, ["Amir Noorizadegan", "Roberto Cavoretto"]);
    }

    #[test]
    fn unknown_member_renders_without_parentheses() {
        let group = WorkingGroup::new(["Francesco Dell'Accio"], "Approximation by Algebraic Functions");

        let byline = build_working_group_byline(&group, &AffiliationIndex::new(&scientific()));
        assert_eq!(byline.members[0].affiliation, "");
        assert_eq!(byline.to_string(), "Francesco Dell'Accio: Approximation by Algebraic Functions");
    }

    #[test]
    fn placeholder_topic_is_kept_verbatim() {
        let group = WorkingGroup::new(["Nicola Mastronardi", "Francisco Marcellan"], TOPIC_TO_BE_ANNOUNCED);

        let byline = build_working_group_byline(&group, scientific().as_slice());
        assert!(!byline.announced);
        assert!(byline.to_string().ends_with(": [To be announced]"));
        assert_eq!(byline.members[0].name, "Francisco Marcellan");
    }
}
