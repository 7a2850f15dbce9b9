use crate::view_model::{AppViewModel, ReportView, RequestView};

pub type RequestId = u64;

/// Structured result returned by the analysis backend for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub ops_summary: String,
    pub answer: String,
    pub sources: Vec<String>,
    pub quotes: Vec<String>,
}

/// Why a completed request ended in failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Network failure or non-success HTTP status. The backend's own error
    /// body is never surfaced.
    Transport,
    /// The response body did not match the expected shape. Carries the
    /// decoder's message verbatim.
    Decode(String),
}

/// Lifecycle of the analysis request. Exactly one variant is live; the
/// in-flight indicator is derived from `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Succeeded(AnalysisReport),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url: String,
    query: String,
    request: RequestState,
    issued_requests: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let request = match &self.request {
            RequestState::Idle => RequestView::Idle,
            RequestState::Loading { request_id } => RequestView::Loading {
                request_id: *request_id,
            },
            RequestState::Succeeded(report) => RequestView::Succeeded(ReportView::from(report)),
            RequestState::Failed(message) => RequestView::Failed(message.clone()),
        };
        AppViewModel {
            url: self.url.clone(),
            query: self.query.clone(),
            request,
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    /// The id of the in-flight request, if one is loading.
    pub(crate) fn loading_request_id(&self) -> Option<RequestId> {
        match &self.request {
            RequestState::Loading { request_id } => Some(*request_id),
            _ => None,
        }
    }

    /// Allocates the next request id and enters `Loading`, dropping any
    /// previous terminal payload.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.issued_requests += 1;
        let request_id = self.issued_requests;
        self.request = RequestState::Loading { request_id };
        self.dirty = true;
        request_id
    }

    pub(crate) fn succeed(&mut self, report: AnalysisReport) {
        self.request = RequestState::Succeeded(report);
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.request = RequestState::Failed(message);
        self.dirty = true;
    }
}
