//! Stop id extraction from free-form message text.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::StopId;

/// Matches the word "parada" followed by a run of digits, anywhere in
/// the message, any case.
static STOP_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)parada\s+(\d+)").unwrap_or_else(|e| panic!("invalid stop regex: {e}"))
});

/// Extract a stop identifier from a chat message.
///
/// Returns `None` when the message does not reference a stop. That is
/// a normal outcome, not an error; the composer answers it with a help
/// message.
///
/// # Examples
///
/// ```
/// use guagua_server::parser::stop_id_from_message;
///
/// let stop = stop_id_from_message("¿cuándo pasa por la parada 1234?").unwrap();
/// assert_eq!(stop.as_str(), "1234");
///
/// assert!(stop_id_from_message("hola").is_none());
/// ```
pub fn stop_id_from_message(message: &str) -> Option<StopId> {
    let captures = STOP_REF.captures(message)?;
    let digits = captures.get(1)?.as_str();

    // The capture group is all digits, so this cannot fail.
    StopId::parse(digits).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_stop_id() {
        let stop = stop_id_from_message("guaguas en la parada 123 por favor").unwrap();
        assert_eq!(stop.as_str(), "123");
    }

    #[test]
    fn match_is_case_insensitive() {
        let stop = stop_id_from_message("PARADA 42").unwrap();
        assert_eq!(stop.as_str(), "42");

        let stop = stop_id_from_message("Parada 7").unwrap();
        assert_eq!(stop.as_str(), "7");
    }

    #[test]
    fn first_match_wins() {
        let stop = stop_id_from_message("parada 11 o parada 22").unwrap();
        assert_eq!(stop.as_str(), "11");
    }

    #[test]
    fn no_digits_means_absent() {
        assert!(stop_id_from_message("parada").is_none());
        assert!(stop_id_from_message("la parada de siempre").is_none());
    }

    #[test]
    fn no_stop_reference_means_absent() {
        assert!(stop_id_from_message("").is_none());
        assert!(stop_id_from_message("hola, ¿qué tal?").is_none());
        assert!(stop_id_from_message("1234").is_none());
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let stop = stop_id_from_message("parada   901").unwrap();
        assert_eq!(stop.as_str(), "901");
    }
}
