use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Timeout for `GET /status`. Other device requests rely on the transport default.
pub const STATUS_TIMEOUT_MS: u64 = 3000;
/// Delay between a power command and the status refresh that confirms it.
pub const REFRESH_DELAY_MS: u64 = 500;
pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-2.5-flash";

/// Runtime configuration handed over by the shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    #[validate(minimum = 100)]
    #[validate(maximum = 60000)]
    pub status_timeout_ms: u64,
    #[validate(maximum = 10000)]
    pub refresh_delay_ms: u64,
    #[validate(min_length = 1)]
    pub assistant_model: String,
    pub assistant_api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            status_timeout_ms: STATUS_TIMEOUT_MS,
            refresh_delay_ms: REFRESH_DELAY_MS,
            assistant_model: DEFAULT_ASSISTANT_MODEL.to_string(),
            assistant_api_key: None,
        }
    }
}

impl ClientConfig {
    /// API key, if one is configured and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.assistant_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
