//! Telegram webhook layer.
//!
//! Receives updates pushed by Telegram, runs them through the stop
//! info pipeline and posts the reply back over the Bot API.

mod client;
mod routes;
mod state;
mod types;

pub use client::{BotClient, BotConfig, BotError};
pub use routes::create_router;
pub use state::AppState;
pub use types::{Chat, IncomingMessage, Update};
