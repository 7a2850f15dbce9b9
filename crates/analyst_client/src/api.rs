use std::time::Duration;

use crate::{AnalysisRequest, AnalysisResponse, ApiError, Endpoint, HealthReport};

/// Client-side knobs for talking to the backend.
///
/// The default leaves the request deadline unset: the backend's automation
/// runs can take a long time and the client waits for the response
/// unboundedly. Tests set a deadline explicitly.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError>;
    async fn health(&self) -> Result<HealthReport, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    endpoint: Endpoint,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(endpoint: Endpoint, settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(deadline) = settings.request_timeout {
            builder = builder.timeout(deadline);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait::async_trait]
impl AnalysisApi for ReqwestApi {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
        let url = self.endpoint.analyze_url()?;
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        decode_body(response).await
    }

    async fn health(&self) -> Result<HealthReport, ApiError> {
        let url = self.endpoint.health_url()?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        decode_body(response).await
    }
}

async fn decode_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let body = response.text().await.map_err(map_reqwest_error)?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
