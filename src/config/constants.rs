use std::time::Duration;

/// Soft cap on the input draft. Enforced by the UI only; the backend
/// accepts prompts of any length.
pub const MAX_DRAFT_LEN: usize = 350;

/// Groq exposes an OpenAI-compatible API under the /openai prefix.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

pub const MAX_COMPLETION_TOKENS: usize = 3000;

pub const DEFAULT_TEMPERATURE: f32 = 0.5;

pub const LOG_FILE_PATH: &str = "/tmp/parley.log";

/// Redraw cadence of the UI loop when no input arrives.
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

pub const MIN_WIDTH: u16 = 80;

/// A bubble never grows wider than this share of the viewport.
pub const BUBBLE_WIDTH_PERCENT: usize = 70;
