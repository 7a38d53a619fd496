use crate::api::ApiClient;

/// Shared server state. Cloned per request; nothing here mutates after
/// startup; the directory itself lives behind the backend.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub public_base_url: String,
    pub custom_css: Option<String>,
}
