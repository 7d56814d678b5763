use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_TEMPERATURE, LOG_FILE_PATH, MAX_COMPLETION_TOKENS};
use super::defaults::*;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogConfig {
    #[serde(default = "log_level")]
    pub level: Option<String>,

    #[serde(default)]
    pub filters: Option<Vec<LogFilter>>,

    #[serde(default)]
    pub file: LogFile,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFilter {
    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFile {
    #[serde(default = "log_file_path")]
    pub path: String,

    #[serde(default)]
    pub append: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ThemeConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub folder_path: Option<String>,
}

/// Completion API settings. Everything the request carries besides the
/// prompt itself lives here; nothing is baked into the backend.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BackendConfig {
    #[serde(default = "endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "model")]
    pub model: String,

    #[serde(default = "max_tokens")]
    pub max_tokens: usize,

    #[serde(default = "temperature")]
    pub temperature: f32,

    #[serde(default)]
    pub timeout_secs: Option<u16>,

    /// Ask the provider to open code fences with a language name so the
    /// highlighter can pick the right syntax.
    #[serde(default = "default_true")]
    pub tag_code_blocks: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
            filters: None,
            file: LogFile::default(),
        }
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: LOG_FILE_PATH.to_string(),
            append: false,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: Some("base16-ocean.dark".to_string()),
            folder_path: None,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: endpoint(),
            api_key: None,
            model: model(),
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: None,
            tag_code_blocks: true,
        }
    }
}
