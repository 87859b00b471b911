//! The directory as the site declares it.

use aasm_directory::{Directory, build_working_group_byline, lookup_affiliation, sort_by_family_name};
use aasm_domain::people::{MemberOrder, Person, Roster, TOPIC_TO_BE_ANNOUNCED, WorkingGroup};

fn scientific() -> Vec<Person> {
    [
        ("Amir Noorizadegan", "Hong Kong Baptist University"),
        ("Alessandra De Rossi", "University of Turin, Italy"),
        ("Alvise Sommarima", "University of Padua, Italy"),
        ("Clemente Cesarano", "Uninettuno University"),
        ("Donatella Occorsio", "University of Basilicata, Italy"),
        ("Francesco Dell'Accio", "University of Calabria, Italy"),
        ("Francisco Marcellan", "University Carlos III Madrid, Spain"),
        ("Giuseppe Rodriguez", "University of Cagliari, Italy"),
        ("Incoronata Notarangelo", "University of Turin, Italy"),
        ("Luisa Fermo", "University of Cagliari, Italy"),
        ("Maria Grazia Russo", "University of Basilicata, Italy"),
        ("Nicola Mastronardi", "IAC - CNR, Italy"),
        ("Praveen Agarwal", "ANAND ICE College, Jaipur, India"),
        ("Roberto Cavoretto", "University of Turin, Italy"),
    ]
    .into_iter()
    .map(|(name, affiliation)| Person::new(name, affiliation))
    .collect()
}

fn roster() -> Roster {
    Roster {
        organizing: vec![
            Person::new("Alessandra De Rossi", "University of Turin, Italy"),
            Person::new("Alvise Sommariva", "University of Padua, Italy"),
            Person::new("Clemente Cesarano", "Uninettuno University, Italy"),
            Person::new("Incoronata Notarangelo", "University of Turin, Italy"),
            Person::new("Roberto Cavoretto", "University of Turin, Italy"),
        ],
        scientific: scientific(),
        working_groups: vec![
            WorkingGroup::new(
                ["Luisa Fermo", "Giuseppe Rodriguez"],
                "Numerical integration and applications to integral equations",
            ),
            WorkingGroup::new(
                ["Clemente Cesarano", "Praveen Agarwal"],
                "Operator theory in describing and analyzing special polynomials",
            ),
            WorkingGroup::new(["Nicola Mastronardi", "Francisco Marcellan"], TOPIC_TO_BE_ANNOUNCED),
            WorkingGroup::new(
                ["Francesco Dell'Accio"],
                "Approximation by Algebraic Functions: From One to Several Variables, with Applications",
            ),
            WorkingGroup::new(
                ["Donatella Occorsio", "Maria Grazia Russo"],
                "Approximation methods for functional equations",
            ),
            WorkingGroup::new(
                ["Amir Noorizadegan", "Roberto Cavoretto"],
                "Meshless methods and scientific Machine Learning",
            ),
        ],
        aliases: Default::default(),
    }
}

#[test]
fn substring_lookup_matches_family_name() {
    let committee = [Person::new("Alvise Sommariva", "Padua")];
    assert_eq!(lookup_affiliation(&committee, "Sommariva"), "Padua");
    assert_eq!(lookup_affiliation(&committee, "Nonexistent"), "");
}

#[test]
fn meshless_group_lists_cavoretto_first() {
    let group = WorkingGroup::new(
        ["Roberto Cavoretto", "Amir Noorizadegan"],
        "Meshless methods and scientific Machine Learning",
    );

    let byline = build_working_group_byline(&group, scientific().as_slice()).to_string();
    let cavoretto = byline.find("Cavoretto").expect("cavoretto");
    let noorizadegan = byline.find("Noorizadegan").expect("noorizadegan");

    assert!(cavoretto < noorizadegan);
    assert!(byline.contains(" and "));
    assert!(byline.ends_with(": Meshless methods and scientific Machine Learning"));
}

#[test]
fn committees_come_out_sorted() {
    let directory = Directory::from_roster(&roster());

    let organizing: Vec<_> = directory.organizing().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        organizing,
        [
            "Roberto Cavoretto",
            "Clemente Cesarano",
            "Incoronata Notarangelo",
            "Alessandra De Rossi",
            "Alvise Sommariva",
        ]
    );

    assert_eq!(directory.scientific(), sort_by_family_name(&scientific()).as_slice());
    assert_eq!(directory.scientific()[0].name, "Praveen Agarwal");
    assert_eq!(directory.scientific().last().map(|p| p.name.as_str()), Some("Alvise Sommarima"));
}

#[test]
fn working_groups_order_by_first_declared_member() {
    let directory = Directory::from_roster(&roster());

    let firsts: Vec<_> = directory.working_groups().iter().map(|g| g.members[0].as_str()).collect();
    assert_eq!(
        firsts,
        [
            "Clemente Cesarano",
            "Francesco Dell'Accio",
            "Luisa Fermo",
            "Nicola Mastronardi",
            "Amir Noorizadegan",
            "Donatella Occorsio",
        ]
    );
    assert_eq!(directory.bylines().len(), directory.working_groups().len());
}

#[test]
fn bylines_carry_affiliations() {
    let directory = Directory::from_roster(&roster());
    let rendered: Vec<String> = directory.bylines().iter().map(ToString::to_string).collect();

    assert_eq!(
        rendered[0],
        "Praveen Agarwal (ANAND ICE College, Jaipur, India) and Clemente Cesarano (Uninettuno \
         University): Operator theory in describing and analyzing special polynomials"
    );
    assert_eq!(
        rendered[4],
        "Roberto Cavoretto (University of Turin, Italy) and Amir Noorizadegan (Hong Kong Baptist \
         University): Meshless methods and scientific Machine Learning"
    );
    assert_eq!(
        rendered[3],
        "Francisco Marcellan (University Carlos III Madrid, Spain) and Nicola Mastronardi (IAC - \
         CNR, Italy): [To be announced]"
    );
}

#[test]
fn pinned_group_keeps_declared_order() {
    let mut roster = roster();
    roster.working_groups[5] = roster.working_groups[5].clone().with_display_order(MemberOrder::AsListed);

    let directory = Directory::from_roster(&roster);
    let meshless = &directory.bylines()[4];
    assert_eq!(meshless.members[0].name, "Amir Noorizadegan");
}

#[test]
fn organizing_spelling_is_not_resolved_against_scientific() {
    let directory = Directory::from_roster(&roster());
    assert_eq!(directory.affiliation_of("Alvise Sommariva"), "");
    assert_eq!(directory.affiliation_of("Alvise Sommarima"), "University of Padua, Italy");

    let mut aliased = roster();
    aliased.aliases.insert("Alvise Sommariva".to_owned(), "Alvise Sommarima".to_owned());
    let directory = Directory::from_roster(&aliased);
    assert_eq!(directory.affiliation_of("Alvise Sommariva"), "University of Padua, Italy");
}

#[test]
fn init_registers_the_directory() {
    let slice = aasm_directory::init(Directory::from_roster(&roster()));
    assert_eq!(slice.id, std::any::TypeId::of::<Directory>());

    let registered = slice.downcast_ref::<Directory>().expect("directory slice");
    assert_eq!(registered.working_groups().len(), roster().working_groups.len());
}
