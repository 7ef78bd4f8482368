// TimeParts model
// Calendar breakdown of the span between two instants

use serde::{Deserialize, Serialize};

/// Breakdown of a time span into calendar units: whole calendar years and
/// months first, then the fixed-length remainder as days, hours, minutes and
/// seconds.
///
/// `years` and `months` together describe a single run of whole calendar
/// months measured from the start instant (`total = years * 12 + months`),
/// so `months` stays in `0..=11`. The remaining fields decompose what is
/// left after stepping over those months: `hours` in `0..=23`, `minutes`
/// and `seconds` in `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeParts {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeParts {
    /// The all-zero breakdown shown once the target instant has passed.
    pub const ZERO: TimeParts = TimeParts {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// True when every field is zero, i.e. the countdown has expired.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total whole calendar months covered by the `years`/`months` fields.
    pub fn total_months(&self) -> u32 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }
}
