#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the form values to the analysis backend, tagged so the response
    /// can be matched against the latest submit.
    SubmitAnalysis {
        request_id: crate::RequestId,
        url: String,
        query: String,
    },
}
