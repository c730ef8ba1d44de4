//! Stop identifier type.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A TITSA bus stop identifier.
///
/// Stop identifiers are a non-empty run of ASCII digits, as printed on
/// the physical stop signs. This type guarantees that any `StopId`
/// value is valid by construction.
///
/// # Examples
///
/// ```
/// use guagua_server::domain::StopId;
///
/// let stop = StopId::parse("1234").unwrap();
/// assert_eq!(stop.as_str(), "1234");
///
/// // Non-digit input is rejected
/// assert!(StopId::parse("12a4").is_err());
/// assert!(StopId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier from a string.
    ///
    /// The input must be one or more ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopId {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the stop identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StopId::parse("1").is_ok());
        assert!(StopId::parse("1234").is_ok());
        assert!(StopId::parse("0007").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StopId::parse("").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(StopId::parse("12a4").is_err());
        assert!(StopId::parse("12 34").is_err());
        assert!(StopId::parse("-123").is_err());
        assert!(StopId::parse("１２３").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let stop = StopId::parse("4242").unwrap();
        assert_eq!(stop.to_string(), "4242");
        assert_eq!(stop.as_str(), "4242");
    }
}
