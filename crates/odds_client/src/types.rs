use odds_form_core::SubmissionId;

/// A 2xx answer from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub status: u16,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Backend answered with a non-success status. Empty messages are stored as `None`.
    #[error("request rejected with http status {status}")]
    RequestRejected { status: u16, message: Option<String> },
    #[error("transport failure: {0}")]
    TransportFailure(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SubmissionCompleted {
        id: SubmissionId,
        result: Result<Accepted, SubmitError>,
    },
}
