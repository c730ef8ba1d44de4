//! Outbound Telegram Bot API client.

use serde::Serialize;

/// Default Telegram Bot API host.
const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from the Telegram client.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bot API returned an error status
    #[error("Telegram API error {status}: {message}")]
    Api { status: u16, message: String },
}

/// Configuration for the Telegram client.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot token issued by BotFather
    pub token: String,
    /// API host (defaults to api.telegram.org)
    pub api_base: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BotConfig {
    /// Create a new config with the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom API host (for testing).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Telegram Bot API client.
///
/// Cheap to clone; holds only the HTTP client and the resolved
/// `sendMessage` URL.
#[derive(Debug, Clone)]
pub struct BotClient {
    http: reqwest::Client,
    send_message_url: String,
}

impl BotClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BotConfig) -> Result<Self, BotError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            send_message_url: format!("{}/bot{}/sendMessage", config.api_base, config.token),
        })
    }

    /// Send a text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let response = self
            .http
            .post(&self.send_message_url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}
