#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlEdited(String),
    /// User edited the query input box.
    QueryEdited(String),
    /// User picked an example preset; overwrites both form fields without
    /// touching the request lifecycle.
    ExampleChosen { url: String, query: String },
    /// User submitted the current form for analysis.
    SubmitClicked,
    /// The client finished the request tagged with `request_id`.
    RequestCompleted {
        request_id: crate::RequestId,
        outcome: Result<crate::AnalysisReport, crate::RequestFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
