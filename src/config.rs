use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";

/// Fallback resource root used when `API_BASE_URL` is unset or blank.
pub const LOCAL_API_FALLBACK: &str = "http://localhost:4000/users";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// The members resource root, e.g. `https://api.example.com/users`.
/// List/create go to this URL directly; update/delete append `/{id}`.
pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_public_base_url() -> String {
    let raw = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string());
    raw.trim().trim_end_matches('/').to_string()
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        LOCAL_API_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}
