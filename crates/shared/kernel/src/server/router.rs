use super::{SiteState, health};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes served whatever the content: currently the `/health` probe.
pub fn system_router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new().routes(routes!(health::health_handler))
}
