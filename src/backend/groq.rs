#[cfg(test)]
#[path = "groq_test.rs"]
mod tests;

use crate::backend::{Backend, CODE_TAG_PROMPT};
use crate::config::constants::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    MAX_COMPLETION_TOKENS};
use crate::config::{BackendConfig, user_agent};
use async_trait::async_trait;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, time};
use thiserror::Error;

/// Client for Groq's OpenAI-compatible chat completion endpoint. Stateless
/// per call; the reqwest client is the only long-lived handle and carries
/// no conversation context.
pub struct Groq {
    alias: String,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: usize,
    temperature: f32,
    timeout: Option<time::Duration>,
    tag_code_blocks: bool,

    client: reqwest::Client,
}

#[async_trait]
impl Backend for Groq {
    fn name(&self) -> &str {
        &self.alias
    }

    async fn complete(&self, prompt: &str) -> Result<Option<String>> {
        let mut messages = Vec::with_capacity(2);
        if self.tag_code_blocks {
            messages.push(MessageRequest {
                role: "system".to_string(),
                content: CODE_TAG_PROMPT.to_string(),
            });
        }
        messages.push(MessageRequest {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        let completion_req = CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        let mut req = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .header("Content-Type", "application/json")
            .header("User-Agent", user_agent());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        if let Some(token) = &self.api_key {
            req = req.bearer_auth(token);
        }

        log::trace!("sending completion request: {:?}", completion_req);

        let res = req
            .json(&completion_req)
            .send()
            .await
            .wrap_err("sending completion request")?;

        if !res.status().is_success() {
            let http_code = res.status().as_u16();
            let resp = res.text().await.wrap_err("reading error response")?;
            log::error!("completion request failed ({}): {}", http_code, resp);
            let err = serde_json::from_str::<ErrorResponse>(&resp)
                .wrap_err(format!("parsing error response: {}", resp))?;
            let mut err = err.error;
            err.http_code = http_code;
            return Err(err.into());
        }

        let res = res
            .json::<CompletionResponse>()
            .await
            .wrap_err("parsing completion response")?;

        // Only the first choice is consumed; a missing choice or a null
        // content both count as "nothing usable".
        Ok(res
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

impl From<&BackendConfig> for Groq {
    fn from(value: &BackendConfig) -> Self {
        let mut groq = Groq::default()
            .with_endpoint(&value.endpoint)
            .with_model(&value.model)
            .with_max_tokens(value.max_tokens)
            .with_temperature(value.temperature)
            .with_tag_code_blocks(value.tag_code_blocks);

        if let Some(api_key) = value.api_key.as_deref() {
            groq.api_key = Some(api_key.to_string());
        }

        if let Some(secs) = value.timeout_secs {
            groq.timeout = Some(time::Duration::from_secs(secs as u64));
        }

        groq
    }
}

impl Groq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_tag_code_blocks(mut self, tag_code_blocks: bool) -> Self {
        self.tag_code_blocks = tag_code_blocks;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Option<time::Duration> {
        self.timeout
    }
}

impl Default for Groq {
    fn default() -> Self {
        Self {
            alias: "Groq".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
            tag_code_blocks: false,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<MessageRequest>,
    max_tokens: usize,
    temperature: f32,
    stream: bool,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct CompletionMessageResponse {
    content: Option<String>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    message: CompletionMessageResponse,
    finish_reason: Option<String>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    id: String,
    choices: Vec<CompletionChoiceResponse>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Default, Error, Debug, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip)]
    pub http_code: u16,
    pub message: String,
    #[serde(rename = "type", default)]
    pub err_type: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "completion API error ({}): {}", self.http_code, self.message)
    }
}
