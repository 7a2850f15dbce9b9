use url::Url;

use crate::ApiError;

const PRODUCTION_BASE: &str = "https://worker-bee.netlify.app";
const DEVELOPMENT_BASE: &str = "http://localhost:5000";

/// Base-url selection for the analysis backend.
///
/// Which base a build targets is a compile-time decision: debug builds talk
/// to the local development server, release builds to the deployed origin.
/// An explicit base can still be supplied for tests or alternate deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn from_base(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        Ok(Self { base })
    }

    /// The default target for this build profile.
    pub fn default_for_build() -> Self {
        let base = if cfg!(debug_assertions) {
            DEVELOPMENT_BASE
        } else {
            PRODUCTION_BASE
        };
        Self {
            base: Url::parse(base).expect("static base url"),
        }
    }

    pub fn analyze_url(&self) -> Result<Url, ApiError> {
        self.join("/api/analyze")
    }

    pub fn health_url(&self) -> Result<Url, ApiError> {
        self.join("/api/health")
    }

    fn join(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }
}
