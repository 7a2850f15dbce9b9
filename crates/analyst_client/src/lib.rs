//! Analyst client: HTTP plumbing for the remote analysis backend.
mod api;
mod endpoint;
mod handle;
mod types;

pub use api::{AnalysisApi, ClientSettings, ReqwestApi};
pub use endpoint::Endpoint;
pub use handle::{ApiEvent, ClientHandle, RequestId};
pub use types::{AnalysisRequest, AnalysisResponse, ApiError, HealthReport};
