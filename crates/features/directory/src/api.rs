//! JSON view of the directory.

use crate::{Byline, Directory};
use aasm_derive::{api_handler, api_model};
use aasm_domain::people::Person;
use aasm_kernel::server::{DIRECTORY_TAG, SiteState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// A committee member or working-group participant.
pub struct PersonView {
    pub name: String,
    /// Empty when unknown.
    pub affiliation: String,
}

#[api_model]
/// Both committees, each sorted by family name.
pub struct CommitteesResponse {
    pub organizing: Vec<PersonView>,
    pub scientific: Vec<PersonView>,
}

#[api_model]
/// One working group with members in display order.
pub struct WorkingGroupView {
    pub members: Vec<PersonView>,
    pub topic: String,
    /// `Name (Affiliation) and Name (Affiliation): topic`.
    pub byline: String,
}

impl From<&Person> for PersonView {
    fn from(person: &Person) -> Self {
        Self { name: person.name.clone(), affiliation: person.affiliation.clone() }
    }
}

impl From<&Byline> for WorkingGroupView {
    fn from(byline: &Byline) -> Self {
        Self {
            members: byline
                .members
                .iter()
                .map(|m| PersonView { name: m.name.clone(), affiliation: m.affiliation.clone() })
                .collect(),
            topic: byline.topic.clone(),
            byline: byline.to_string(),
        }
    }
}

fn with_directory(state: &SiteState, respond: impl FnOnce(&Directory) -> Response) -> Response {
    match state.try_get_slice::<Directory>() {
        Ok(directory) => respond(directory),
        Err(err) => {
            error!(%err, "Directory slice is not registered");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

#[api_handler(
    get,
    path = "/api/directory/committees",
    responses(
        (status = OK, description = "Organizing and scientific committees", body = CommitteesResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Directory unavailable"),
    ),
    tag = DIRECTORY_TAG,
)]
pub(crate) async fn committees_handler(State(state): State<SiteState>) -> Response {
    with_directory(&state, |directory| {
        Json(CommitteesResponse {
            organizing: directory.organizing().iter().map(PersonView::from).collect(),
            scientific: directory.scientific().iter().map(PersonView::from).collect(),
        })
        .into_response()
    })
}

#[api_handler(
    get,
    path = "/api/directory/working-groups",
    responses(
        (status = OK, description = "Working groups in display order", body = Vec<WorkingGroupView>),
        (status = INTERNAL_SERVER_ERROR, description = "Directory unavailable"),
    ),
    tag = DIRECTORY_TAG,
)]
pub(crate) async fn working_groups_handler(State(state): State<SiteState>) -> Response {
    with_directory(&state, |directory| {
        let groups: Vec<WorkingGroupView> = directory.bylines().iter().map(WorkingGroupView::from).collect();
        Json(groups).into_response()
    })
}

/// Directory endpoints under `/api/directory`.
pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(committees_handler))
        .routes(routes!(working_groups_handler))
}
