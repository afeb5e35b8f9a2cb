use crate::SubmissionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed the submit control.
    SubmitClicked,
    /// Backend answered 2xx. `message` is the server's `message` field, if any.
    SubmissionSucceeded {
        id: SubmissionId,
        message: Option<String>,
    },
    /// The request failed at any stage.
    SubmissionFailed {
        id: SubmissionId,
        failure: FailureKind,
    },
}

/// Why a submission failed. Only `Rejected` surfaces its detail to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Backend answered with a non-2xx status.
    Rejected { status: u16, message: Option<String> },
    /// The request never completed (connect, DNS, TLS...).
    Transport { detail: String },
    /// The response body was not the expected JSON.
    MalformedResponse { detail: String },
}

impl FailureKind {
    /// Text shown after the error prefix in the status banner.
    pub fn display_message(&self) -> &str {
        match self {
            FailureKind::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.as_str(),
            FailureKind::Rejected { .. } => crate::REJECTED_FALLBACK,
            FailureKind::Transport { .. } | FailureKind::MalformedResponse { .. } => {
                crate::UNEXPECTED_ERROR
            }
        }
    }
}
