// Unit label presets

use chrono::{DateTime, Local};

use crate::models::time_parts::TimeParts;

/// Display strings for one locale: the six unit labels plus the caption and
/// reached-message texts. The built-in presets are the two label sets the
/// countdown has shipped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub name: String,
    pub years: String,
    pub months: String,
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Prefix for the caption naming the target, e.g. "Target".
    pub target_prefix: String,
    /// Parenthesized note appended to the caption, e.g. "local time".
    pub local_time_note: String,
    /// Line shown once the target instant has passed.
    pub reached_message: String,
    /// chrono format string used to print the target in the caption.
    pub date_format: String,
}

impl LabelSet {
    /// Default English labels.
    pub fn english() -> Self {
        Self {
            name: "english".to_string(),
            years: "Years".to_string(),
            months: "Months".to_string(),
            days: "Days".to_string(),
            hours: "Hours".to_string(),
            minutes: "Minutes".to_string(),
            seconds: "Seconds".to_string(),
            target_prefix: "Target".to_string(),
            local_time_note: "local time".to_string(),
            reached_message: "The target date has arrived!".to_string(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }

    /// Czech labels, matching the countdown page this tool grew out of.
    pub fn czech() -> Self {
        Self {
            name: "czech".to_string(),
            years: "Roky".to_string(),
            months: "Měsíce".to_string(),
            days: "Dny".to_string(),
            hours: "Hodiny".to_string(),
            minutes: "Minuty".to_string(),
            seconds: "Sekundy".to_string(),
            target_prefix: "Cíl".to_string(),
            local_time_note: "místní čas".to_string(),
            reached_message: "Je čas voleb. Nezapomeňte jít volit!".to_string(),
            date_format: "%-d. %-m. %Y, %H:%M".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" => Some(Self::english()),
            "czech" => Some(Self::czech()),
            _ => None,
        }
    }

    /// Caption naming the target instant, e.g.
    /// `Target: 2029-10-03 00:00 (local time)`.
    pub fn format_target(&self, target: &DateTime<Local>) -> String {
        format!(
            "{}: {} ({})",
            self.target_prefix,
            target.format(&self.date_format),
            self.local_time_note
        )
    }

    /// The six label/value pairs in display order, years first.
    pub fn unit_pairs<'a>(&'a self, parts: &TimeParts) -> [(&'a str, u32); 6] {
        [
            (self.years.as_str(), parts.years),
            (self.months.as_str(), parts.months),
            (self.days.as_str(), parts.days),
            (self.hours.as_str(), parts.hours),
            (self.minutes.as_str(), parts.minutes),
            (self.seconds.as_str(), parts.seconds),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_by_name_finds_presets() {
        assert_eq!(LabelSet::by_name("english"), Some(LabelSet::english()));
        assert_eq!(LabelSet::by_name("CZECH"), Some(LabelSet::czech()));
        assert_eq!(LabelSet::by_name("french"), None);
    }

    #[test]
    fn test_english_target_caption() {
        let target = Local.with_ymd_and_hms(2029, 10, 3, 0, 0, 0).unwrap();
        assert_eq!(
            LabelSet::english().format_target(&target),
            "Target: 2029-10-03 00:00 (local time)"
        );
    }

    #[test]
    fn test_czech_target_caption_uses_day_month_order() {
        let target = Local.with_ymd_and_hms(2029, 10, 3, 0, 0, 0).unwrap();
        assert_eq!(
            LabelSet::czech().format_target(&target),
            "Cíl: 3. 10. 2029, 00:00 (místní čas)"
        );
    }

    #[test]
    fn test_unit_pairs_follow_display_order() {
        let labels = LabelSet::english();
        let parts = TimeParts {
            years: 4,
            months: 3,
            days: 2,
            hours: 1,
            minutes: 0,
            seconds: 59,
        };

        let pairs = labels.unit_pairs(&parts);
        assert_eq!(pairs[0], ("Years", 4));
        assert_eq!(pairs[5], ("Seconds", 59));
    }
}
