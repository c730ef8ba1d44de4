//! Normalized bus line arrival data.

use super::Urgency;

/// A single upcoming bus at a stop, normalized from provider data.
///
/// Field text has already been through encoding repair; the waiting
/// time has been parsed from whatever string-or-number shape the
/// provider sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusLine {
    /// Line identifier as printed on the bus (e.g. "014").
    pub id: String,

    /// Minutes until the bus is due at the stop.
    pub wait_minutes: i64,

    /// Cleaned destination name.
    pub destination: String,
}

impl BusLine {
    /// Urgency tier for this arrival.
    pub fn urgency(&self) -> Urgency {
        Urgency::from_minutes(self.wait_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_follows_wait_time() {
        let line = BusLine {
            id: "014".to_string(),
            wait_minutes: 3,
            destination: "La Laguna".to_string(),
        };
        assert_eq!(line.urgency(), Urgency::Calm);

        let line = BusLine {
            wait_minutes: 25,
            ..line
        };
        assert_eq!(line.urgency(), Urgency::Urgent);
    }
}
