//! Shared axum plumbing: application state with the feature-slice registry and system routes.

mod health;
pub mod router;
mod state;

pub use health::HealthResponse;
pub use state::{SiteState, SiteStateBuilder, SiteStateError, SiteStateErrorExt, SiteStateInner};

/// `OpenAPI` tag for infrastructure endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the committee and working-group endpoints.
pub const DIRECTORY_TAG: &str = "Directory";
