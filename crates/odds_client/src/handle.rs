use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use odds_form_core::SubmissionId;
use odds_logging::{odds_info, odds_warn};

use crate::{ClientEvent, Submitter};

enum ClientCommand {
    Submit { id: SubmissionId, url: String },
}

/// Runs submissions on a background tokio runtime.
///
/// Completions come back through [`SubmissionHandle::try_recv`] so the caller
/// can apply them on its own thread. Submissions are never cancelled; dropping
/// the handle stops the runtime.
pub struct SubmissionHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl SubmissionHandle {
    pub fn spawn(submitter: Arc<dyn Submitter>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("odds-client".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let submitter = submitter.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(submitter.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, id: SubmissionId, url: impl Into<String>) {
        if self
            .cmd_tx
            .send(ClientCommand::Submit {
                id,
                url: url.into(),
            })
            .is_err()
        {
            odds_warn!("submission {} dropped: client thread has stopped", id);
        }
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { id, url } => {
            let result = submitter.submit(&url).await;
            match &result {
                Ok(accepted) => odds_info!("submission {} accepted ({})", id, accepted.status),
                Err(err) => odds_warn!("submission {} failed: {}", id, err),
            }
            let _ = event_tx.send(ClientEvent::SubmissionCompleted { id, result });
        }
    }
}
