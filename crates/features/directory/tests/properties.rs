use aasm_directory::{collation_key, sort_by_family_name, sort_names_by_family_name, sort_working_groups};
use aasm_domain::people::{Person, WorkingGroup};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]{1,8}( [A-Za-z]{1,10}){0,2}",
        "[A-Za-z' ]{0,12}",
        "[A-Za-z]{1,8} [A-Za-zÁÉÍÓÚÑáéíóúñàèìòù]{1,10}",
        Just(String::new()),
    ]
}

fn people() -> impl Strategy<Value = Vec<Person>> {
    // Affiliations carry the input position so reordering of equal keys is observable.
    proptest::collection::vec(name(), 0..24).prop_map(|names| {
        names.into_iter().enumerate().map(|(i, n)| Person::new(n, i.to_string())).collect()
    })
}

/// Puts an acute accent on every plain vowel.
fn accented(plain: &str) -> String {
    plain
        .chars()
        .map(|c| match c {
            'a' => 'á',
            'e' => 'é',
            'i' => 'í',
            'o' => 'ó',
            'u' => 'ú',
            other => other,
        })
        .collect()
}

fn position(person: &Person) -> usize {
    person.affiliation.parse().unwrap_or(usize::MAX)
}

proptest! {
    #[test]
    fn output_is_ordered_by_key(input in people()) {
        let sorted = sort_by_family_name(&input);
        for pair in sorted.windows(2) {
            prop_assert!(collation_key(&pair[0].name) <= collation_key(&pair[1].name));
        }
    }

    #[test]
    fn equal_keys_keep_relative_order(input in people()) {
        let sorted = sort_by_family_name(&input);
        for pair in sorted.windows(2) {
            if collation_key(&pair[0].name) == collation_key(&pair[1].name) {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    #[test]
    fn sorting_is_idempotent(input in people()) {
        let once = sort_by_family_name(&input);
        prop_assert_eq!(sort_by_family_name(&once), once);
    }

    #[test]
    fn multiset_is_preserved(input in people()) {
        let mut expected = input.clone();
        let mut actual = sort_by_family_name(&input);
        expected.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.affiliation.cmp(&b.affiliation)));
        actual.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.affiliation.cmp(&b.affiliation)));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn input_is_left_untouched(input in people()) {
        let before = input.clone();
        let _ = sort_by_family_name(&input);
        prop_assert_eq!(input, before);
    }

    #[test]
    fn casing_does_not_change_the_order(input in proptest::collection::vec(name(), 0..16)) {
        let upper: Vec<String> = input.iter().map(|n| n.to_uppercase()).collect();
        let lower: Vec<String> = input.iter().map(|n| n.to_lowercase()).collect();

        let by_upper: Vec<String> =
            sort_names_by_family_name(upper.as_slice()).iter().map(|n| n.to_lowercase()).collect();
        prop_assert_eq!(by_upper, sort_names_by_family_name(lower.as_slice()));
    }

    #[test]
    fn bare_names_match_person_order(input in proptest::collection::vec(name(), 0..16)) {
        let people: Vec<Person> = input.iter().map(|n| Person::new(n.clone(), "")).collect();
        let from_people: Vec<String> = sort_by_family_name(&people).into_iter().map(|p| p.name).collect();
        prop_assert_eq!(sort_names_by_family_name(input.as_slice()), from_people);
    }

    #[test]
    fn group_sort_preserves_groups(members in proptest::collection::vec(proptest::collection::vec(name(), 0..3), 0..10)) {
        let groups: Vec<WorkingGroup> =
            members.iter().enumerate().map(|(i, m)| WorkingGroup::new(m.clone(), i.to_string())).collect();
        let sorted = sort_working_groups(&groups);

        prop_assert_eq!(sorted.len(), groups.len());
        let mut topics: Vec<usize> = sorted.iter().map(|g| g.topic.parse().unwrap_or(usize::MAX)).collect();
        topics.sort_unstable();
        prop_assert_eq!(topics, (0..groups.len()).collect::<Vec<_>>());
    }

    #[test]
    fn accents_do_not_move_a_name_past_another_family(lo in "[a-z]{1,8}", hi in "[a-z]{1,8}") {
        prop_assume!(lo < hi);

        let first = format!("Zoe {}", accented(&lo));
        let second = format!("Ada {hi}");
        let sorted = sort_names_by_family_name(&[second.clone(), first.clone()]);
        prop_assert_eq!(sorted, vec![first, second]);
    }
}
