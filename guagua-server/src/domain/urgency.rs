//! Waiting-time urgency tiers.

/// How soon a bus is due, bucketed coarsely for display.
///
/// The tier is derived from the waiting time alone: each tier covers a
/// 5-minute bucket, and everything from 10 minutes up (as well as any
/// value the provider reports as negative) renders as `Urgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Bus is due within 5 minutes.
    Calm,
    /// Bus is due within 5 to 10 minutes.
    Warning,
    /// Anything else, including provider oddities like negative times.
    Urgent,
}

impl Urgency {
    /// Classify a waiting time in minutes.
    ///
    /// Total over all integers: out-of-range buckets fall through to
    /// `Urgent` rather than erroring.
    pub fn from_minutes(minutes: i64) -> Self {
        match minutes.div_euclid(5) {
            0 => Urgency::Calm,
            1 => Urgency::Warning,
            _ => Urgency::Urgent,
        }
    }

    /// The marker shown in front of a reply line for this tier.
    pub fn glyph(self) -> &'static str {
        match self {
            Urgency::Calm => "🟢",
            Urgency::Warning => "🟠",
            Urgency::Urgent => "🔴",
        }
    }
}
