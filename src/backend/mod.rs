pub mod groq;

pub use groq::Groq;

#[cfg(test)]
use mockall::automock;

use crate::config::BackendConfig;
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;

/// Fixed system instruction injected when `tag_code_blocks` is enabled.
/// The bubble renderer picks its highlighting syntax from the fence tag.
const CODE_TAG_PROMPT: &str = "When you answer with a code block, always open \
the fence with the name of the language, e.g. ```rust.";

/// The completion seam. One prompt in, at most one completion out; the
/// caller never hands over prior turns, so the provider sees each call as
/// a fresh conversation.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait Backend {
    fn name(&self) -> &str;

    /// Returns the first choice's text, `None` when the provider returned
    /// no usable choice, or an error for any transport or provider
    /// failure. No retry, no backoff.
    async fn complete(&self, prompt: &str) -> Result<Option<String>>;
}

pub type ArcBackend = Arc<dyn Backend + Send + Sync>;

pub fn new_backend(config: &BackendConfig) -> Result<ArcBackend> {
    if config.api_key.as_deref().unwrap_or_default().is_empty() {
        eyre::bail!("no API key configured (set backend.api_key)");
    }
    Ok(Arc::new(Groq::from(config)))
}
