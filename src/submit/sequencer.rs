use crate::app::event::{AppEvent, SequenceId};
use crate::form::submission::Submission;
use crate::submit::MailTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Runs the timed steps of a submission run in the background.
///
/// At most one step is pending at a time. Starting a step aborts the
/// previous one, and dropping the sequencer aborts whatever is left, so a
/// closed form never receives a late transition.
pub struct Sequencer {
    transport: Arc<dyn MailTransport>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl Sequencer {
    pub fn new(transport: Arc<dyn MailTransport>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            transport,
            event_tx,
            pending: None,
        }
    }

    /// Report [`AppEvent::LoadingElapsed`] after `delay`.
    pub fn arm_loading_timer(&mut self, sequence: SequenceId, delay: Duration) {
        let tx = self.event_tx.clone();
        self.replace(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::LoadingElapsed { sequence });
        }));
    }

    /// Wait `delay`, post `submission` once, and report the outcome.
    pub fn deliver(&mut self, sequence: SequenceId, delay: Duration, submission: Submission) {
        let tx = self.event_tx.clone();
        let transport = Arc::clone(&self.transport);
        self.replace(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let event = match transport.send(&submission).await {
                Ok(()) => {
                    info!(sequence, "submission delivered");
                    AppEvent::SubmissionSent { sequence }
                }
                Err(e) => {
                    warn!(sequence, error = %e, "submission failed");
                    AppEvent::SubmissionFailed {
                        sequence,
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn replace(&mut self, handle: JoinHandle<()>) {
        self.cancel();
        self.pending = Some(handle);
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        self.cancel();
    }
}
