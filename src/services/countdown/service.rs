// Countdown service state

use chrono::{DateTime, Local};

use super::calculator::compute_breakdown;
use crate::models::time_parts::TimeParts;

/// One evaluation of the countdown: the freshly computed breakdown, whether
/// the target instant has been reached, and whether the visible value differs
/// from the previous evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    pub parts: TimeParts,
    pub reached: bool,
    pub changed: bool,
}

/// Tracks a single fixed target and recomputes the remaining span on demand.
///
/// The caller supplies the current instant on every [`tick`](Self::tick), so
/// tests can drive the service with synthetic clocks instead of waiting on
/// the real one.
pub struct CountdownService {
    target: DateTime<Local>,
    last_parts: Option<TimeParts>,
    reached_logged: bool,
}

impl CountdownService {
    pub fn new(target: DateTime<Local>) -> Self {
        Self {
            target,
            last_parts: None,
            reached_logged: false,
        }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    /// Breakdown from the previous tick, if any.
    pub fn last_parts(&self) -> Option<TimeParts> {
        self.last_parts
    }

    /// Recompute the breakdown for `now`.
    ///
    /// `reached` flips at the exact target instant, independently of the
    /// parts. Truncating `now` to its whole second keeps the last second on
    /// display right up to a whole-second target; only a target with a
    /// sub-second component can read all zeros while `reached` is false.
    pub fn tick(&mut self, now: DateTime<Local>) -> CountdownTick {
        let parts = compute_breakdown(&now, &self.target);
        let reached = now >= self.target;
        let changed = self.last_parts != Some(parts);
        self.last_parts = Some(parts);

        if reached && !self.reached_logged {
            log::info!("Countdown target {} reached", self.target);
            self.reached_logged = true;
        }

        CountdownTick {
            parts,
            reached,
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn target() -> DateTime<Local> {
        local(2029, 10, 3, 0, 0, 0)
    }

    #[test]
    fn test_first_tick_reports_change() {
        let mut service = CountdownService::new(target());
        let tick = service.tick(local(2029, 10, 2, 23, 59, 57));

        assert!(tick.changed);
        assert!(!tick.reached);
        assert_eq!(tick.parts.seconds, 3);
    }

    #[test]
    fn test_same_instant_twice_reports_no_change() {
        let mut service = CountdownService::new(target());
        let now = local(2029, 10, 2, 23, 59, 57);

        let first = service.tick(now);
        let second = service.tick(now);

        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(first.parts, second.parts);
    }

    #[test]
    fn test_sub_second_advance_reports_no_change() {
        let mut service = CountdownService::new(target());
        let now = local(2029, 10, 2, 23, 59, 57);

        service.tick(now);
        let tick = service.tick(now + Duration::milliseconds(400));

        assert!(!tick.changed);
        assert_eq!(tick.parts.seconds, 3);
    }

    #[test]
    fn test_each_new_second_reports_change() {
        let mut service = CountdownService::new(target());
        let base = local(2029, 10, 2, 23, 59, 55);

        service.tick(base);
        for step in 1..5 {
            let tick = service.tick(base + Duration::seconds(step));
            assert!(tick.changed, "second {step} should differ from the last");
        }
    }

    #[test]
    fn test_final_fraction_still_counts_one_second() {
        // 300 ms before a whole-second target truncates to a full second
        // short of it; the display holds at one second, not zero.
        let mut service = CountdownService::new(target());
        let tick = service.tick(target() - Duration::milliseconds(300));

        assert_eq!(tick.parts.seconds, 1);
        assert!(!tick.parts.is_zero());
        assert!(!tick.reached);
    }

    #[test]
    fn test_sub_second_target_reads_zero_before_reached() {
        // A target with a sub-second component is the one case where the
        // parts all read zero while reached is still false.
        let target = target() + Duration::milliseconds(500);
        let mut service = CountdownService::new(target);
        let tick = service.tick(target - Duration::milliseconds(400));

        assert!(tick.parts.is_zero());
        assert!(!tick.reached);
    }

    #[test]
    fn test_reached_exactly_at_target() {
        let mut service = CountdownService::new(target());
        let tick = service.tick(target());

        assert!(tick.reached);
        assert!(tick.parts.is_zero());
    }

    #[test]
    fn test_stays_reached_after_target() {
        let mut service = CountdownService::new(target());
        service.tick(target());
        let tick = service.tick(target() + Duration::seconds(5));

        assert!(tick.reached);
        assert!(tick.parts.is_zero());
        assert!(!tick.changed);
    }

    #[test]
    fn test_last_parts_tracks_previous_tick() {
        let mut service = CountdownService::new(target());
        assert_eq!(service.last_parts(), None);

        let tick = service.tick(local(2029, 10, 2, 23, 59, 59));
        assert_eq!(service.last_parts(), Some(tick.parts));
    }
}
