use super::{SYSTEM_TAG, SiteState};
use aasm_derive::{api_handler, api_model};
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use std::sync::LazyLock;
use std::time::Instant;

#[api_model]
/// Liveness probe payload.
pub struct HealthResponse {
    /// Always `"up"` when the process answers.
    pub status: String,
    /// Crate version of the running binary.
    pub version: String,
    /// Seconds since the first health request.
    pub uptime: u64,
    /// Feature slices registered at startup; a complete site has all of them.
    pub slices: usize,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Liveness probe", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<SiteState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
        slices: state.slice_count(),
    };

    ([(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"), (header::PRAGMA, "no-cache")], Json(body))
}
