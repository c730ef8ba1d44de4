//! TITSA API response DTOs.
//!
//! These types map directly to the `xGetInfoParada` JSON response.
//! Every field is an `Option` because the endpoint omits whole sections
//! rather than sending empty ones: a stop with no upcoming buses has no
//! `lineas` key at all, and an unknown stop id comes back with an empty
//! `parada` object. Missing data is data here, not an error.

use std::fmt;

use serde::Deserialize;

/// Response from `xGetInfoParada.php`.
///
/// Top-level keys other than the two below are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StopInfoResponse {
    /// Stop metadata section.
    pub parada: Option<StopSection>,

    /// Upcoming buses at this stop, in provider order.
    pub lineas: Option<Vec<LineEntry>>,
}

/// The `parada` section of the response.
#[derive(Debug, Clone, Deserialize)]
pub struct StopSection {
    /// Human-readable stop description. Subject to the Latin-1/UTF-8
    /// double encoding; see [`crate::encoding::clean_str`].
    pub descripcion: Option<String>,
}

/// One entry of the `lineas` list.
#[derive(Debug, Clone, Deserialize)]
pub struct LineEntry {
    /// Line identifier.
    pub id: Option<TextOrNumber>,

    /// Minutes until arrival.
    pub tiempo: Option<TextOrNumber>,

    /// Destination name.
    pub destino: Option<String>,
}

/// A JSON value the provider emits sometimes as a string and sometimes
/// as a bare number, depending on the field and the day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    /// Bare JSON number.
    Number(i64),
    /// JSON string, possibly numeric inside.
    Text(String),
}

impl TextOrNumber {
    /// Interpret the value as a whole number of minutes.
    pub fn as_minutes(&self) -> Option<i64> {
        match self {
            TextOrNumber::Number(n) => Some(*n),
            TextOrNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Number(n) => write!(f, "{n}"),
            TextOrNumber::Text(s) => f.write_str(s),
        }
    }
}
