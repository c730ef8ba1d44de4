//! Application state for the webhook layer.

use crate::titsa::TitsaApi;

use super::client::BotClient;

/// Shared application state.
///
/// Both clients are cheap to clone; per-stop state lives in a fresh
/// `StopQuery` built inside each request, never here.
#[derive(Debug, Clone)]
pub struct AppState {
    /// TITSA stop info client
    pub api: TitsaApi,

    /// Telegram Bot API client
    pub bot: BotClient,
}

impl AppState {
    /// Create a new app state.
    pub fn new(api: TitsaApi, bot: BotClient) -> Self {
        Self { api, bot }
    }
}
