//! Pages feature slice.
//!
//! Holds the site content and renders one HTML page per section. Navigation state is an explicit
//! [`ShellState`] passed into [`Renderer::render`]; nothing here is global.

pub mod content;
mod error;
mod render;
#[cfg(feature = "server")]
pub mod routes;
pub mod shell;

pub use crate::content::SiteContent;
pub use crate::error::{PagesError, PagesErrorExt};
pub use crate::render::Renderer;
pub use crate::shell::{NavItem, ShellState, page_path};
use aasm_directory::Directory;
use aasm_kernel::domain::registry::InitializedSlice;

/// Pages feature state.
#[aasm_derive::site_slice]
pub struct Pages {
    renderer: Renderer,
}

impl Pages {
    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

/// Initialize the pages feature from loaded content and the directory built from it.
///
/// # Errors
/// [`PagesError::Render`] if the bundled templates fail to compile.
pub fn init(content: SiteContent, directory: Directory) -> Result<InitializedSlice, PagesError> {
    let renderer = Renderer::new(content, directory)?;
    tracing::info!(sections = renderer.content().navigation.len(), "Pages slice initialized");

    Ok(InitializedSlice::new(Pages::new(PagesInner { renderer })))
}
