use chrono::{DateTime, NaiveDate, Utc};

/// Normalize a timestamp to its UTC calendar day.
///
/// Every component that compares or groups log dates goes through this
/// helper, so two entries on the same day with different times always land
/// on the same key.
pub fn day_key(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Format a calendar day as the canonical `YYYY-MM-DD` key.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Inclusive day count between the first and last day of a history.
///
/// A single day spans 1; an empty history has no span and callers treat the
/// averages as 0.
pub fn span_days_inclusive(first: NaiveDate, last: NaiveDate) -> i64 {
    (last - first).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_key_strips_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 5, 6, 15, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();

        assert_eq!(day_key(morning), day_key(evening));
        assert_eq!(format_day(day_key(morning)), "2024-03-05");
    }

    #[test]
    fn day_key_separates_adjacent_days() {
        let before_midnight = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();
        let after_midnight = Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 1).unwrap();

        assert_ne!(day_key(before_midnight), day_key(after_midnight));
    }

    #[test]
    fn span_is_inclusive_of_both_endpoints() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        assert_eq!(span_days_inclusive(first, last), 10);
        assert_eq!(span_days_inclusive(first, first), 1);
    }
}
