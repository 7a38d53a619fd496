use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::models::AppState;
use crate::utils::build_query_string;

/// Fields every page template carries.
#[derive(Default)]
pub struct TemplateGlobals {
    pub api_hostname: String,
    pub base_url: String,
}

pub fn build_template_globals(state: &AppState) -> TemplateGlobals {
    TemplateGlobals {
        api_hostname: crate::utils::hostname_from_url(state.api.base_url()),
        base_url: state.public_base_url.clone(),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Redirect back to the dashboard, carrying only the non-empty state
/// (search query, modal flag, banners, preserved draft fields).
pub fn dashboard_redirect(pairs: &[(&str, &str)]) -> Redirect {
    let kept: Vec<(String, String)> = pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if kept.is_empty() {
        Redirect::to("/")
    } else {
        Redirect::to(&format!("/?{}", build_query_string(&kept)))
    }
}
