//! Reply composition.
//!
//! Turns the outcome of a stop lookup into the Spanish reply text sent
//! back to the chat. Every fetch-layer problem resolves to one of a
//! few fixed strings; only a malformed line entry from the provider
//! escapes to the caller.

use crate::domain::StopId;
use crate::titsa::{ConversionError, StopQuery, TitsaApi, stop_description, stop_lines};

/// Help text for messages that do not reference a stop.
const HELP_TEXT: &str = "Lo siento, no entiendo tu mensaje. Prueba a incluir la \
                         palabra \"parada\" seguido del número de parada.";

/// Fallback when the upstream fetch fails.
const FETCH_FAILED_TEXT: &str = "No hay información de guaguas cercanas a esta parada. \
                                 Inténtalo en unos minutos.";

/// Reply for stop ids the provider does not know.
const STOP_NOT_FOUND_TEXT: &str = "El número de parada no parece correcto. \
                                   Compruébalo e inténtalo de nuevo.";

/// Board line when the stop exists but has no upcoming buses.
const NO_LINES_TEXT: &str = "No hay información de guaguas cercanas...";

/// A composed reply, ready for the transport layer.
///
/// `Text` is a terminal one-liner (help or fallback); `Lines` is a
/// successful arrival board that the transport joins with newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Single fixed message.
    Text(String),
    /// Header plus one line per upcoming bus.
    Lines(Vec<String>),
}

impl Answer {
    /// Flatten to the text that gets sent to the chat.
    pub fn into_text(self) -> String {
        match self {
            Answer::Text(text) => text,
            Answer::Lines(lines) => lines.join("\n"),
        }
    }
}

/// Compose the reply for one inbound message.
///
/// `stop_id` is `None` when the message did not reference a stop; that
/// produces the help text without touching the network. Fetch failures
/// (timeouts included) are logged and answered with the fixed fallback
/// text. Only [`ConversionError`] propagates: the provider sent a line
/// entry we refuse to guess about.
pub async fn compose_answer(
    api: &TitsaApi,
    stop_id: Option<StopId>,
) -> Result<Answer, ConversionError> {
    let Some(stop_id) = stop_id else {
        return Ok(Answer::Text(HELP_TEXT.to_string()));
    };

    let query = StopQuery::new(api.clone(), stop_id);

    let info = match query.fetch_info().await {
        Ok(info) => info,
        Err(e) => {
            tracing::error!(stop_id = %query.stop_id(), error = %e, "failed to fetch stop info");
            return Ok(Answer::Text(FETCH_FAILED_TEXT.to_string()));
        }
    };

    let description = stop_description(info);
    if description.is_empty() {
        return Ok(Answer::Text(STOP_NOT_FOUND_TEXT.to_string()));
    }

    let mut reply = vec![format!(
        "Las próximas guaguas en la parada {} ({description}) son:",
        query.stop_id()
    )];

    let lines = stop_lines(info)?;

    if lines.is_empty() {
        reply.push(NO_LINES_TEXT.to_string());
    } else {
        for line in &lines {
            reply.push(format!(
                "{} {} ({} minutos) con destino {}",
                line.urgency().glyph(),
                line.id,
                line.wait_minutes,
                line.destination
            ));
        }
    }

    Ok(Answer::Lines(reply))
}
