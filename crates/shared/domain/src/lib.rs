//! # Domain Models
//!
//! Plain data shared by every crate in the workspace: people, committees, working groups,
//! site sections and configuration. Dependencies are limited to `serde` and `strum`.
//! No I/O and no ordering logic here; the ordering engine lives in `aasm-directory`.

pub mod config;
pub mod people;
pub mod registry;
pub mod section;
