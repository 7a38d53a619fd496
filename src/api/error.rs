use thiserror::Error;

/// Failures an upstream call can produce. Every caller gets one of these
/// back as an `Err` and must handle it; the adapter never hands an error
/// back disguised as a response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, aborted transfer).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {code}: {detail}")]
    Status { code: u16, detail: String },

    /// The response body was not parseable JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(String),

    /// The response was JSON but missing the expected envelope field.
    #[error("response missing expected `{0}` field")]
    MalformedResponse(&'static str),
}
