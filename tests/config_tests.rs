use once_cell::sync::Lazy;
use rosterly::config;
use std::env;
use std::sync::Mutex;

// Serialize the tests that touch process-wide env vars.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.example.com/users/"),
        "https://api.example.com/users"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.example.com/users"),
        "https://api.example.com/users"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://api.example.com/users///"),
        "https://api.example.com/users"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.example.com/users/  "),
        "https://api.example.com/users"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), config::LOCAL_API_FALLBACK);
}

#[test]
fn test_sanitize_base_url_whitespace_only() {
    assert_eq!(config::sanitize_base_url("   "), config::LOCAL_API_FALLBACK);
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "https://api.example.com/users/");

    let result = config::get_api_base_url();

    assert_eq!(result, "https://api.example.com/users");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_without_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "https://api.example.com/users");

    let result = config::get_api_base_url();

    assert_eq!(result, "https://api.example.com/users");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_uses_fallback_when_unset() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("API_BASE_URL");

    let result = config::get_api_base_url();

    assert_eq!(result, config::LOCAL_API_FALLBACK);
}

#[test]
fn test_get_public_base_url_strips_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PUBLIC_BASE_URL", "https://roster.example.com/");

    assert_eq!(config::get_public_base_url(), "https://roster.example.com");

    env::remove_var("PUBLIC_BASE_URL");
}

#[test]
fn test_get_public_base_url_defaults_empty() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("PUBLIC_BASE_URL");

    assert_eq!(config::get_public_base_url(), "");
}
