use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use super::error::ApiError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// A successful (2xx) upstream response. `body` is `Value::Null` when the
/// backend sent an empty body (some DELETE implementations do).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// HTTP client adapter for the members backend. Owns the reqwest client
/// and the configured resource root; every upstream exchange goes through
/// [`ApiClient::request`].
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build and issue a single request against `{base_url}{path}`.
    /// JSON bodies are sent with `Content-Type: application/json`.
    /// Non-2xx statuses come back as `ApiError::Status`, transport and
    /// parse failures as their own variants; a caller can only mistake
    /// failure for success by ignoring the `Result`.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        // --- Curl Logging ---
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)));
        if body.is_some() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
        }
        if let Some(ref d) = body {
            let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
            let escaped_json = json_str.replace("'", "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        tracing::debug!(method, %url, "sending request");

        let mut req = match method {
            "GET" => self.http.get(&url),
            "POST" => self.http.post(&url),
            "PUT" => self.http.put(&url),
            "DELETE" => self.http.delete(&url),
            _ => self.http.get(&url),
        };

        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let raw = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let parsed: Value = if raw.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))?
        };

        // Colorize the response JSON for better readability in the terminal
        let json_str = serde_json::to_string(&parsed).unwrap_or_else(|_| format!("{:?}", parsed));
        let response_str = Paint::new(json_str).rgb(100, 100, 100).to_string();
        log_output(format!("Response ({}):\n{}", status.as_u16(), response_str));

        if !status.is_success() {
            let detail = error_detail(&parsed, &raw);
            tracing::warn!(code = status.as_u16(), %detail, %url, "backend error");
            return Err(ApiError::Status {
                code: status.as_u16(),
                detail,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body: parsed,
        })
    }
}

fn error_detail(parsed: &Value, raw: &str) -> String {
    for key in ["message", "detail", "error"] {
        if let Some(msg) = parsed.get(key).and_then(|v| v.as_str()) {
            if !msg.trim().is_empty() {
                return msg.trim().to_string();
            }
        }
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
