use aasm::domain::people::Person;
use aasm::features::directory::Directory;
use aasm::features::pages::{Renderer, SiteContent};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

fn load(content: Option<&Path>) -> Result<SiteContent> {
    SiteContent::load(content).context("Content document is invalid")
}

/// Writes `index.html` plus `<section-id>/index.html` for each section; returns the pages written.
pub(crate) fn render(out: &Path, content: Option<&Path>) -> Result<usize> {
    let renderer = Renderer::from_content(load(content)?).context("Templates failed to compile")?;
    let pages = renderer.render_all().context("Rendering failed")?;

    fs::create_dir_all(out).with_context(|| format!("Cannot create {}", out.display()))?;

    let mut written = 0;
    for (section, html) in &pages {
        if section.id() == "home" {
            fs::write(out.join("index.html"), html).context("Cannot write index.html")?;
            written += 1;
        }

        let dir = out.join(section.id());
        fs::create_dir_all(&dir).with_context(|| format!("Cannot create {}", dir.display()))?;
        fs::write(dir.join("index.html"), html)
            .with_context(|| format!("Cannot write {}/index.html", section.id()))?;
        debug!(section = section.id(), "Page written");
        written += 1;
    }

    info!(out = %out.display(), pages = written, "Site rendered");
    Ok(written)
}

pub(crate) fn sections(content: Option<&Path>, w: &mut impl Write) -> Result<()> {
    let content = load(content)?;
    for (section, label) in content.sections().zip(&content.navigation) {
        writeln!(w, "{}\t{label}", section.id())?;
    }
    Ok(())
}

pub(crate) fn directory(content: Option<&Path>, w: &mut impl Write) -> Result<()> {
    let directory = Directory::from_roster(&load(content)?.directory);

    committee(w, "Organizing Committee", directory.organizing())?;
    committee(w, "Scientific Committee", directory.scientific())?;

    writeln!(w, "Working Groups")?;
    for byline in directory.bylines() {
        writeln!(w, "  {byline}")?;
    }
    Ok(())
}

fn committee(w: &mut impl Write, title: &str, people: &[Person]) -> Result<()> {
    writeln!(w, "{title}")?;
    for person in people {
        if person.affiliation.is_empty() {
            writeln!(w, "  {}", person.name)?;
        } else {
            writeln!(w, "  {} ({})", person.name, person.affiliation)?;
        }
    }
    Ok(())
}
