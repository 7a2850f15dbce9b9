use crate::{AppState, Effect, Msg, RequestFailure};

/// Shown when a submit is attempted with an empty URL or query. Detected
/// locally; no network call is made.
pub const MISSING_INPUT_MESSAGE: &str = "Please provide both URL and query";

/// Shown for any transport-class failure (network error or non-success
/// HTTP status). The underlying cause is deliberately masked.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to analyze website";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::QueryEdited(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::ExampleChosen { url, query } => {
            state.set_url(url);
            state.set_query(query);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.url().is_empty() || state.query().is_empty() {
                state.fail(MISSING_INPUT_MESSAGE.to_string());
                return (state, Vec::new());
            }
            let request_id = state.begin_request();
            vec![Effect::SubmitAnalysis {
                request_id,
                url: state.url().to_string(),
                query: state.query().to_string(),
            }]
        }
        Msg::RequestCompleted {
            request_id,
            outcome,
        } => {
            // Only the latest submit owns the lifecycle; completions for
            // superseded requests are discarded.
            if state.loading_request_id() != Some(request_id) {
                return (state, Vec::new());
            }
            match outcome {
                Ok(report) => state.succeed(report),
                Err(RequestFailure::Transport) => {
                    state.fail(TRANSPORT_FAILURE_MESSAGE.to_string())
                }
                Err(RequestFailure::Decode(message)) => state.fail(message),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
