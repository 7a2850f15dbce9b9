use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use app_logging::app_debug;

use crate::{AnalysisApi, AnalysisRequest, AnalysisResponse, ApiError, HealthReport};

pub type RequestId = u64;

enum ClientCommand {
    Analyze {
        request_id: RequestId,
        request: AnalysisRequest,
    },
    CheckHealth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    AnalysisDone {
        request_id: RequestId,
        result: Result<AnalysisResponse, ApiError>,
    },
    HealthDone {
        result: Result<HealthReport, ApiError>,
    },
}

/// Bridges synchronous app code to the async client.
///
/// Owns a worker thread with its own tokio runtime. Each command is spawned
/// as an independent task: concurrent submits proceed with no cancellation,
/// and completions arrive as events in whatever order the backend answers.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ApiEvent>>>,
}

impl ClientHandle {
    pub fn new(api: impl AnalysisApi + 'static) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(api);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn analyze(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
        query: impl Into<String>,
    ) {
        app_debug!("enqueue analyze request_id={}", request_id);
        let _ = self.cmd_tx.send(ClientCommand::Analyze {
            request_id,
            request: AnalysisRequest {
                url: url.into(),
                query: query.into(),
            },
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(ClientCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        let guard = self.event_rx.lock().ok()?;
        guard.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn AnalysisApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    match command {
        ClientCommand::Analyze {
            request_id,
            request,
        } => {
            let result = api.analyze(&request).await;
            let _ = event_tx.send(ApiEvent::AnalysisDone { request_id, result });
        }
        ClientCommand::CheckHealth => {
            let result = api.health().await;
            let _ = event_tx.send(ApiEvent::HealthDone { result });
        }
    }
}
