use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::api;
use crate::models::{AppState, ListState, Role};
use crate::search::filter_members;
use crate::templates::DashboardTemplate;

use super::helpers::{build_template_globals, render_template, TemplateGlobals};

#[derive(Deserialize, Default)]
pub struct DashboardQuery {
    /// Search text; filters the grid by name, email, or role.
    #[serde(default)]
    pub q: String,
    /// "1" opens the add-member modal.
    pub add: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
    // Draft fields round-tripped when creation validation fails, so the
    // reopened modal keeps what the user typed.
    pub draft_name: Option<String>,
    pub draft_email: Option<String>,
    pub draft_role: Option<String>,
}

/// The dashboard. Every render re-reads the directory from the backend;
/// mutations redirect here, which is what makes them visible.
pub async fn dashboard_get(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let mut list = ListState::default();
    list.begin();
    list.finish(api::list_members(&state.api).await);

    let members = filter_members(list.members(), &query.q);

    let mut errors: Vec<String> = Vec::new();
    if let Some(msg) = query.error.as_deref().filter(|s| !s.is_empty()) {
        errors.push(msg.to_string());
    }
    if let Some(msg) = list.error() {
        tracing::error!(error = %msg, "member list fetch failed");
        errors.push(format!("Could not load members: {}", msg));
    }

    let TemplateGlobals {
        api_hostname,
        base_url,
    } = build_template_globals(&state);

    render_template(DashboardTemplate {
        api_hostname,
        base_url,
        members: &members,
        search_query: query.q.clone(),
        modal_open: query.add.as_deref() == Some("1"),
        is_loading: list.is_loading(),
        notice: query.notice.filter(|s| !s.is_empty()),
        errors,
        draft_name: query.draft_name.unwrap_or_default(),
        draft_email: query.draft_email.unwrap_or_default(),
        draft_role: query.draft_role.unwrap_or_default(),
        roles: &Role::ALL,
    })
}
