use aasm::server::SiteState;
use aasm::server::router::{directory_router, fallback_page, pages_router, system_router};
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "AASM 2026", description = "Committees and working groups of the Alps Approximation School and Meeting"))]
struct ApiDoc;

/// Full application router: documented JSON routes, section pages, then static files.
///
/// Paths that match neither a route nor a file under `storage.static_dir` render the home page.
#[allow(unreachable_pub)]
pub fn init(state: SiteState) -> Router {
    let api = ApiDoc::openapi();
    let static_dir = state.config.storage.static_dir.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .merge(directory_router())
        .with_state(state.clone())
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);
    let home = get(fallback_page).with_state(state.clone());

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .merge(pages_router().with_state(state))
        .fallback_service(ServeDir::new(static_dir).fallback(home))
        .layer(TraceLayer::new_for_http())
}
