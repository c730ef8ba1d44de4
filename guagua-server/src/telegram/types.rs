//! Telegram webhook DTOs.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! update payload is ignored. Telegram omits fields rather than
//! sending nulls, hence the `Option`s.

use serde::Deserialize;

/// An inbound webhook update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// The new message, if this update carries one.
    pub message: Option<IncomingMessage>,
}

/// A chat message inside an update.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    /// Chat the message was sent in.
    pub chat: Option<Chat>,

    /// Message text. Absent for stickers, photos and the like.
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Unique chat identifier, used to route the reply.
    pub id: i64,
}
