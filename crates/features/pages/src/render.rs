use crate::content::{EventInfo, SiteContent};
use crate::error::{PagesError, PagesErrorExt};
use crate::shell::{NavItem, ShellState};
use aasm_directory::{Byline, Directory};
use aasm_domain::people::{Lecturer, Person};
use aasm_domain::section::Section;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

const TEMPLATES: [(&str, &str); 9] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("committees.html", include_str!("../templates/committees.html")),
    ("lecturers.html", include_str!("../templates/lecturers.html")),
    ("working-groups.html", include_str!("../templates/working-groups.html")),
    ("program.html", include_str!("../templates/program.html")),
    ("registration.html", include_str!("../templates/registration.html")),
    ("venue.html", include_str!("../templates/venue.html")),
];

/// Template context for one page.
#[derive(Serialize)]
struct Page<'a> {
    event: &'a EventInfo,
    nav: Vec<NavItem>,
    section: &'static str,
    title: &'static str,
    menu_open: bool,
    menu_toggle_href: String,
    organizing: &'a [Person],
    scientific: &'a [Person],
    bylines: &'a [Byline],
    lecturers: &'a [Lecturer],
}

/// Renders section pages from the bundled templates.
#[derive(Debug, Clone)]
pub struct Renderer {
    tera: Tera,
    content: SiteContent,
    directory: Directory,
}

impl Renderer {
    /// # Errors
    /// [`PagesError::Render`] if a bundled template does not compile.
    pub fn new(content: SiteContent, directory: Directory) -> Result<Self, PagesError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES).context("Bundled templates")?;

        Ok(Self { tera, content, directory })
    }

    /// Builds the directory from the content's roster.
    ///
    /// # Errors
    /// As [`Renderer::new`].
    pub fn from_content(content: SiteContent) -> Result<Self, PagesError> {
        let directory = Directory::from_roster(&content.directory);
        Self::new(content, directory)
    }

    /// HTML page for the active section of `state`.
    ///
    /// # Errors
    /// [`PagesError::Render`] when the template fails to render.
    pub fn render(&self, state: &ShellState) -> Result<String, PagesError> {
        let section = state.active;
        let page = Page {
            event: &self.content.event,
            nav: state.nav_items(&self.content.navigation),
            section: section.id(),
            title: section.label(),
            menu_open: state.menu_open,
            menu_toggle_href: state.menu_toggle_href(),
            organizing: self.directory.organizing(),
            scientific: self.directory.scientific(),
            bylines: self.directory.bylines(),
            lecturers: &self.content.lecturers,
        };

        debug!(section = section.id(), menu_open = state.menu_open, "Rendering page");

        let context = Context::from_serialize(&page).context("Page context")?;
        self.tera.render(&format!("{}.html", section.id()), &context).context(section.id())
    }

    /// Every section with the menu closed, in menu order.
    ///
    /// # Errors
    /// The first render failure.
    pub fn render_all(&self) -> Result<Vec<(Section, String)>, PagesError> {
        Section::all().map(|section| Ok((section, self.render(&ShellState::new(section))?))).collect()
    }

    #[must_use]
    pub const fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }
}
