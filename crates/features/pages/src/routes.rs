//! HTML routes: `/` and one path per section.

use crate::{Pages, ShellState, page_path};
use aasm_domain::section::Section;
use aasm_kernel::server::SiteState;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tracing::error;

/// `?menu=open` renders the page with the menu expanded.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub menu: Option<String>,
}

impl PageQuery {
    fn shell(&self, section: Section) -> ShellState {
        let mut shell = ShellState::new(section);
        if self.menu.as_deref() == Some("open") {
            shell.toggle_menu();
        }
        shell
    }
}

fn render(state: &SiteState, shell: &ShellState) -> Response {
    let rendered = state
        .try_get_slice::<Pages>()
        .map_err(|err| err.to_string())
        .and_then(|pages| pages.renderer().render(shell).map_err(|err| err.to_string()));

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(section = shell.active.id(), %err, "Failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

async fn section_page(
    State(state): State<SiteState>,
    Query(query): Query<PageQuery>,
    section: Section,
) -> Response {
    render(&state, &query.shell(section))
}

/// Anything that is neither a section nor a static file shows the home page.
pub async fn fallback_page(State(state): State<SiteState>, Query(query): Query<PageQuery>) -> Response {
    render(&state, &query.shell(Section::Home))
}

/// `/` plus `/{section-id}` for every section.
pub fn router() -> Router<SiteState> {
    Section::all().fold(Router::new().route("/", get(fallback_page)), |router, section| {
        router.route(
            &page_path(section),
            get(move |state: State<SiteState>, query: Query<PageQuery>| section_page(state, query, section)),
        )
    })
}
