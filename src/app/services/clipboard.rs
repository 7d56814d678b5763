use eyre::{Result, bail};
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

static SENDER: OnceCell<mpsc::UnboundedSender<String>> = OnceCell::new();

/// arboard wants to live on one thread, so writes are funneled through a
/// channel into a single long-running task.
pub struct ClipboardService;

impl ClipboardService {
    pub fn init() -> Result<()> {
        if SENDER.get().is_none() {
            arboard::Clipboard::new()?;
        }
        Ok(())
    }

    pub async fn start(cancel_token: CancellationToken) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        SENDER
            .set(tx)
            .map_err(|_| eyre::eyre!("clipboard service already started"))?;
        let mut clipboard = arboard::Clipboard::new()?;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    log::debug!("clipboard service cancelled");
                    return Ok(());
                }
                text = rx.recv() => {
                    let Some(text) = text else {
                        continue;
                    };
                    clipboard.set_text(text)?;
                }
            }
        }
    }

    pub fn set(text: impl Into<String>) -> Result<()> {
        if let Some(tx) = SENDER.get() {
            tx.send(text.into())?;
            return Ok(());
        }

        bail!("clipboard service is not initialized")
    }
}
