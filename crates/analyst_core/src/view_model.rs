use crate::{AnalysisReport, RequestId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub query: String,
    pub request: RequestView,
    pub dirty: bool,
}

/// Render-side mirror of the request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestView {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Succeeded(ReportView),
    Failed(String),
}

impl RequestView {
    /// Whether the in-flight indicator should be shown.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestView::Loading { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportView {
    pub ops_summary: String,
    pub answer: String,
    /// Suppressed by the renderer when empty.
    pub sources: Vec<String>,
    /// Suppressed by the renderer when empty.
    pub quotes: Vec<String>,
}

impl From<&AnalysisReport> for ReportView {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            ops_summary: report.ops_summary.clone(),
            answer: report.answer.clone(),
            sources: report.sources.clone(),
            quotes: report.quotes.clone(),
        }
    }
}
