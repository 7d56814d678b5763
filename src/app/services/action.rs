#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::sync::Arc;

use crate::backend::ArcBackend;
use crate::models::{Action, Event, NoticeMessage, TurnOutcome};
use eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::ClipboardService;

/// Runs off the UI task and executes whatever the UI asks for. Completion
/// requests each get their own worker; the UI submits at most one at a
/// time, and there is deliberately no abort or timeout for it — a hung
/// request keeps the UI pending until the process exits.
pub struct ActionService {
    event_tx: mpsc::UnboundedSender<Event>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    backend: ArcBackend,
    cancel_token: CancellationToken,
}

impl ActionService {
    pub fn new(
        backend: ArcBackend,
        action_rx: mpsc::UnboundedReceiver<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        cancel_token: CancellationToken,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            backend,
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("action service cancelled");
                    return Ok(());
                }

                action = self.action_rx.recv() => {
                    let Some(action) = action else {
                        continue;
                    };
                    match action {
                        Action::CompletionRequest(prompt) => {
                            let backend = Arc::clone(&self.backend);
                            let event_tx = self.event_tx.clone();
                            tokio::spawn(async move {
                                let outcome = completion_outcome(&backend, &prompt).await;
                                let _ = event_tx.send(Event::TurnCompleted(outcome));
                            });
                        }

                        Action::CopyText(content) => self.copy_text(content),
                    }
                }
            }
        }
    }

    fn copy_text(&self, content: String) {
        if let Err(err) = ClipboardService::set(content) {
            log::error!("failed to copy to clipboard: {err}");
            let _ = self
                .event_tx
                .send(Event::Notice(NoticeMessage::error(format!(
                    "Failed to copy: {err}"
                ))));
            return;
        }
        let _ = self
            .event_tx
            .send(Event::Notice(NoticeMessage::info("Copied to clipboard!")));
    }
}

async fn completion_outcome(backend: &ArcBackend, prompt: &str) -> TurnOutcome {
    match backend.complete(prompt).await {
        Ok(Some(text)) => TurnOutcome::Reply(text),
        Ok(None) => TurnOutcome::Empty,
        Err(err) => TurnOutcome::Failed(format!("{err:#}")),
    }
}
