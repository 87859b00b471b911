use aasm_domain::section::Section;
use aasm_pages::{Renderer, ShellState, SiteContent};

fn render(section: Section) -> String {
    let renderer = Renderer::from_content(SiteContent::embedded().expect("content")).expect("renderer");
    renderer.render(&ShellState::new(section)).expect("page")
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles.iter().map(|n| html.find(n).unwrap_or_else(|| panic!("{n} missing"))).collect()
}

#[test]
fn committees_are_listed_by_family_name() {
    let html = render(Section::Committees);
    let organizing = &html[html.find("committee organizing").expect("organizing list")..];

    let order = positions(organizing, &["Cavoretto", "Cesarano", "Notarangelo", "De Rossi", "Sommariva"]);
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");

    let scientific = &html[html.find("committee scientific").expect("scientific list")..];
    let order = positions(scientific, &["Agarwal", "Cavoretto", "Cesarano", "Fermo", "Sommarima"]);
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
}

#[test]
fn working_groups_are_numbered_bylines() {
    let html = render(Section::WorkingGroups);

    assert!(html.contains(r#"<ol class="working-groups">"#));
    let order = positions(&html, &["Agarwal", "Dell&#x27;Accio", "Fermo", "Marcellan", "Cavoretto", "Occorsio"]);
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");

    assert!(html.contains(
        "<strong>Roberto Cavoretto</strong> <span class=\"affiliation\">(University of Turin, Italy)</span> and \
         <strong>Amir Noorizadegan</strong>"
    ));
    assert!(html.contains(r#"<span class="topic pending">[To be announced]</span>"#));
}

#[test]
fn home_shows_event_details() {
    let html = render(Section::Home);
    assert!(html.contains("Alps Approximation School and Meeting"));
    assert!(html.contains("June 1–5, 2026"));
    assert!(html.contains("Bardonecchia (TO), Italy"));
    assert!(html.contains("University of Padua"));
}

#[test]
fn lecturers_and_notices_are_rendered() {
    assert!(render(Section::Lecturers).contains("Computational Approximation with Cheb."));
    assert!(render(Section::Program).contains("The detailed program will be announced soon."));
    assert!(render(Section::Registration).contains("Registration details will be available"));
}

#[test]
fn fragment_script_knows_every_menu_id() {
    let html = render(Section::About);
    assert!(html.contains(r#"var current = "about";"#));
    assert!(html.contains(r#""working-groups""#));
    assert!(html.contains("About AASM 2026"));
}
