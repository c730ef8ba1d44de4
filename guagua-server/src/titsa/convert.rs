//! Conversion from TITSA DTOs to domain types.
//!
//! Absent sections of the response normalize to empty values: a missing
//! `parada.descripcion` becomes the empty string (the upstream signal
//! for "no such stop") and a missing `lineas` becomes an empty list.
//! A line entry that is present but incomplete is a provider contract
//! violation and fails the whole conversion instead of being skipped.

use crate::domain::BusLine;
use crate::encoding::clean_str;

use super::types::{LineEntry, StopInfoResponse};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// A line entry is missing a required field
    #[error("line entry missing required field: {0}")]
    MissingField(&'static str),

    /// A line entry's waiting time is not a whole number of minutes
    #[error("line entry has unusable waiting time: {0:?}")]
    BadWaitTime(String),
}

/// Extract the stop description, repaired and defaulted.
///
/// An empty result means the provider does not know this stop.
pub fn stop_description(info: &StopInfoResponse) -> String {
    let raw = info
        .parada
        .as_ref()
        .and_then(|p| p.descripcion.as_deref())
        .unwrap_or_default();

    clean_str(raw)
}

/// Extract the upcoming buses in provider order.
///
/// A missing or null `lineas` section is an empty board, not an error.
pub fn stop_lines(info: &StopInfoResponse) -> Result<Vec<BusLine>, ConversionError> {
    let entries = info.lineas.as_deref().unwrap_or(&[]);

    entries.iter().map(convert_line).collect()
}

fn convert_line(entry: &LineEntry) -> Result<BusLine, ConversionError> {
    let id = entry
        .id
        .as_ref()
        .ok_or(ConversionError::MissingField("id"))?;

    let tiempo = entry
        .tiempo
        .as_ref()
        .ok_or(ConversionError::MissingField("tiempo"))?;

    let destino = entry
        .destino
        .as_deref()
        .ok_or(ConversionError::MissingField("destino"))?;

    let wait_minutes = tiempo
        .as_minutes()
        .ok_or_else(|| ConversionError::BadWaitTime(tiempo.to_string()))?;

    Ok(BusLine {
        id: id.to_string(),
        wait_minutes,
        destination: clean_str(destino),
    })
}
