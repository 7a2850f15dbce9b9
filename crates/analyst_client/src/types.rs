use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,
    pub query: String,
}

/// Body of a successful `POST /api/analyze` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    pub ops_summary: String,
    pub answer: String,
    /// Absent and empty are treated identically by the rendering layer.
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    /// Non-success HTTP status. The response body is dropped, not surfaced.
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape. The message is the
    /// decoder's own text and reaches the user unmasked.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Transport-class errors all collapse to one generic user-facing
    /// message; only decode errors carry their own text through.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Decode(_))
    }
}
