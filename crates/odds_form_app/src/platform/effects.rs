use std::sync::Arc;
use std::time::Duration;

use odds_client::{ClientEvent, ClientSettings, ReqwestSubmitter, SubmissionHandle, SubmitError};
use odds_form_core::{Effect, FailureKind, Msg};
use odds_logging::odds_warn;

pub struct EffectRunner {
    client: SubmissionHandle,
}

impl EffectRunner {
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let submitter = Arc::new(ReqwestSubmitter::new(settings)?);
        let client = SubmissionHandle::spawn(submitter)?;
        Ok(Self { client })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostFetchRequest { id, url } => self.client.submit(id, url),
            }
        }
    }

    /// Waits up to `timeout` for a completion and turns it into a message.
    pub fn poll(&self, timeout: Duration) -> Option<Msg> {
        self.client.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::SubmissionCompleted { id, result } => match result {
            Ok(accepted) => Msg::SubmissionSucceeded {
                id,
                message: accepted.message,
            },
            Err(err) => {
                odds_warn!("Submission {} failed: {}", id, err);
                Msg::SubmissionFailed {
                    id,
                    failure: map_failure(err),
                }
            }
        },
    }
}

fn map_failure(err: SubmitError) -> FailureKind {
    match err {
        SubmitError::RequestRejected { status, message } => {
            FailureKind::Rejected { status, message }
        }
        SubmitError::TransportFailure(detail) => FailureKind::Transport { detail },
        SubmitError::MalformedResponse(detail) => FailureKind::MalformedResponse { detail },
    }
}
