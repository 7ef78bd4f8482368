// Date utility functions
// Calendar arithmetic shared by the countdown calculator

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// True for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-indexed). Months outside `1..=12`
/// yield 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Add whole calendar months to a datetime, clamping the day of month to the
/// last valid day of the resulting month (Jan 31 + 1 month = Feb 28, or
/// Feb 29 in a leap year). The wall-clock time of day is preserved and the
/// result is re-resolved in the datetime's timezone.
///
/// Returns `None` when the result falls outside chrono's representable range.
pub fn add_months_clamped<Tz: TimeZone>(dt: &DateTime<Tz>, months: u32) -> Option<DateTime<Tz>> {
    if months == 0 {
        return Some(dt.clone());
    }

    let naive = dt.naive_local();
    let date = naive.date();
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    let shifted = NaiveDate::from_ymd_opt(year, month, day)?.and_time(naive.time());
    resolve_local(&dt.timezone(), shifted)
}

/// Add whole calendar years, clamping Feb 29 anchors to Feb 28 in common
/// years. Equivalent to adding `years * 12` months.
pub fn add_years_clamped<Tz: TimeZone>(dt: &DateTime<Tz>, years: u32) -> Option<DateTime<Tz>> {
    add_months_clamped(dt, years.checked_mul(12)?)
}

/// Drop the sub-second component, keeping the instant's whole second.
pub fn truncate_to_second<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    dt.with_nanosecond(0).unwrap_or_else(|| dt.clone())
}

/// Resolve a wall-clock datetime in `tz`. Ambiguous local times (DST
/// fall-back) take the earlier instant; nonexistent ones (spring-forward
/// gaps) roll forward in half-hour steps until the calendar accepts them.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    let mut candidate = naive;
    loop {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(instant) => return Some(instant),
            LocalResult::Ambiguous(earlier, _) => return Some(earlier),
            LocalResult::None => {
                candidate = candidate.checked_add_signed(Duration::minutes(30))?;
            }
        }
    }
}
