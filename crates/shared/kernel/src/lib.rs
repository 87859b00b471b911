//! Kernel utilities shared across slices: layered configuration loading and, behind the
//! `server` feature, the axum state container and system routes.
//!
//! ```rust,ignore
//! use aasm_kernel::config::load_config;
//! use aasm_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("site")).unwrap_or_default();
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use aasm_domain as domain;
