//! Facade crate for the AASM site features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Binaries depend on `aasm` (with `server` when they serve HTTP).
//! - [`load_content`] resolves the content document named by the config;
//!   [`init`] turns it into the feature slices the server registers.

pub use aasm_domain as domain;
use aasm_domain::config::SiteConfig;
use aasm_domain::registry::InitializedSlice;
pub use aasm_kernel as kernel;
use features::directory::Directory;
use features::pages::{PagesError, SiteContent};

#[cfg(feature = "server")]
pub mod server {
    pub use aasm_kernel::server::{SiteState, SiteStateBuilder};

    pub mod router {
        pub use aasm_directory::api::router as directory_router;
        pub use aasm_kernel::server::router::system_router;
        pub use aasm_pages::routes::{fallback_page, router as pages_router};
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use aasm_directory as directory;
    pub use aasm_pages as pages;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "directory",
        "pages",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Content named by `content.path`, or the bundled document.
///
/// # Errors
/// Returns [`PagesError`] when the override cannot be read, parsed or validated.
pub fn load_content(config: &SiteConfig) -> Result<SiteContent, PagesError> {
    SiteContent::load(config.content.path.as_deref())
}

/// Initialize all features.
///
/// # Errors
/// Returns an error if the content cannot be loaded or the templates fail to compile.
pub fn init(config: &SiteConfig) -> Result<Vec<InitializedSlice>, PagesError> {
    let content = load_content(config)?;
    let directory = Directory::from_roster(&content.directory);

    let slices = vec![
        // Directory
        features::directory::init(directory.clone()),
        // Pages
        features::pages::init(content, directory)?,
    ];

    tracing::info!(count = slices.len(), "Feature slices initialized");
    Ok(slices)
}
