use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use analyst_client::{
    AnalysisResponse, ApiError, ApiEvent, ClientHandle, ClientSettings, Endpoint, ReqwestApi,
};
use analyst_core::{AnalysisReport, Effect, Msg, RequestFailure};
use app_logging::{app_info, app_warn};

/// Executes core effects against the HTTP client and pumps client events
/// back into the app's message channel.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, notice_tx: mpsc::Sender<String>) -> anyhow::Result<Self> {
        let api = ReqwestApi::new(Endpoint::default_for_build(), ClientSettings::default())?;
        let runner = Self {
            client: ClientHandle::new(api),
        };
        runner.spawn_event_loop(msg_tx, notice_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    request_id,
                    url,
                    query,
                } => {
                    app_info!("SubmitAnalysis request_id={} url={}", request_id, url);
                    self.client.analyze(request_id, url, query);
                }
            }
        }
    }

    pub fn check_health(&self) {
        self.client.check_health();
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>, notice_tx: mpsc::Sender<String>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                match event {
                    ApiEvent::AnalysisDone { request_id, result } => {
                        let outcome = match result {
                            Ok(response) => Ok(map_response(response)),
                            Err(err) => {
                                app_warn!("Request {} failed: {}", request_id, err);
                                Err(map_error(err))
                            }
                        };
                        if msg_tx
                            .send(Msg::RequestCompleted {
                                request_id,
                                outcome,
                            })
                            .is_err()
                        {
                            break;
                        }
                    }
                    ApiEvent::HealthDone { result } => {
                        let notice = match result {
                            Ok(report) => {
                                format!("Backend {}: {}", report.status, report.service)
                            }
                            Err(err) => {
                                app_warn!("Health check failed: {}", err);
                                "Backend unreachable".to_string()
                            }
                        };
                        if notice_tx.send(notice).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_response(response: AnalysisResponse) -> AnalysisReport {
    AnalysisReport {
        ops_summary: response.ops_summary,
        answer: response.answer,
        sources: response.sources,
        quotes: response.quotes,
    }
}

fn map_error(err: ApiError) -> RequestFailure {
    match err {
        ApiError::Decode(message) => RequestFailure::Decode(message),
        _ => RequestFailure::Transport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_keep_their_message() {
        let failure = map_error(ApiError::Decode("missing field `answer`".to_string()));
        assert_eq!(
            failure,
            RequestFailure::Decode("missing field `answer`".to_string())
        );
    }

    #[test]
    fn transport_class_errors_collapse() {
        for err in [
            ApiError::HttpStatus(500),
            ApiError::Timeout,
            ApiError::Network("connection refused".to_string()),
            ApiError::InvalidUrl("bad base".to_string()),
        ] {
            assert_eq!(map_error(err), RequestFailure::Transport);
        }
    }
}
