//! Analyst core: pure request-lifecycle state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AnalysisReport, AppState, RequestFailure, RequestId, RequestState};
pub use update::{update, MISSING_INPUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
pub use view_model::{AppViewModel, ReportView, RequestView};
