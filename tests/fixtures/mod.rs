// Test fixtures
// Reusable instants shared across integration tests

use chrono::{DateTime, TimeZone, Utc};

pub mod dates {
    use super::*;

    /// The built-in countdown target: 3 October 2029, midnight.
    pub fn target_2029() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2029, 10, 3, 0, 0, 0).unwrap()
    }

    /// Exactly four years before the built-in target.
    pub fn four_years_before_target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 3, 0, 0, 0).unwrap()
    }

    /// One second before the built-in target.
    pub fn last_second() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2029, 10, 2, 23, 59, 59).unwrap()
    }

    /// Leap day 2024 at noon, the awkward anchor for month stepping.
    pub fn leap_day_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }
}
