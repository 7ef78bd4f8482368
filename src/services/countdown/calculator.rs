// Countdown breakdown calculator

use chrono::{DateTime, TimeZone};

use crate::models::time_parts::TimeParts;
use crate::utils::date::{add_months_clamped, add_years_clamped, truncate_to_second};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Decompose the span from `from` to `to` into whole calendar years and
/// months plus a fixed-length remainder of days, hours, minutes and seconds.
///
/// Returns [`TimeParts::ZERO`] whenever `from` is at or past `to`; the
/// countdown saturates instead of going negative. Otherwise `from` is
/// truncated to its whole second and used as the anchor for two greedy
/// passes: first whole calendar years, then whole calendar months, each
/// counted while the next probe still lands at or before `to`.
///
/// Every probe is a single step from the anchor (`anchor + n years`, then
/// `anchor + years + m months`), with the day of month clamped to the last
/// valid day (see [`add_months_clamped`]). Probing from the anchor rather
/// than compounding one-month steps keeps the clamp from drifting on
/// day-29/31 anchors; the month pass therefore stops before 12 by the same
/// comparison that ended the year pass, and the parts reconstruct the
/// original span exactly.
///
/// The remainder `to - pivot` is shorter than one calendar month by
/// construction, so it splits into days, hours, minutes and seconds by plain
/// integer division on milliseconds.
pub fn compute_breakdown<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> TimeParts {
    if from >= to {
        return TimeParts::ZERO;
    }

    let anchor = truncate_to_second(from);
    let mut pivot = anchor.clone();

    let mut years: u32 = 0;
    while let Some(candidate) = add_years_clamped(&anchor, years + 1) {
        if candidate > *to {
            break;
        }
        pivot = candidate;
        years += 1;
    }

    let mut months: u32 = 0;
    while let Some(candidate) = add_months_clamped(&anchor, years * 12 + months + 1) {
        if candidate > *to {
            break;
        }
        pivot = candidate;
        months += 1;
    }

    let remaining_ms = (to.clone() - pivot).num_milliseconds().max(0);
    let days = remaining_ms / MILLIS_PER_DAY;
    let hours = (remaining_ms % MILLIS_PER_DAY) / MILLIS_PER_HOUR;
    let minutes = (remaining_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let seconds = (remaining_ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;

    TimeParts {
        years,
        months,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}
