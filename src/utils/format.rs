use chrono::{DateTime, NaiveDate, Utc};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_date_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Calendar days covered by a leave request, both endpoints included.
/// An inverted range counts as zero rather than going negative.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }
    (end - start).num_days() + 1
}

pub fn format_day_count(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_leave_counts_one() {
        assert_eq!(inclusive_days(date(2024, 3, 4), date(2024, 3, 4)), 1);
    }

    #[test]
    fn range_is_inclusive_of_both_endpoints() {
        assert_eq!(inclusive_days(date(2024, 3, 4), date(2024, 3, 8)), 5);
    }

    #[test]
    fn inverted_range_is_zero() {
        assert_eq!(inclusive_days(date(2024, 3, 8), date(2024, 3, 4)), 0);
    }

    #[test]
    fn day_count_labels_pluralize() {
        assert_eq!(format_day_count(1), "1 day");
        assert_eq!(format_day_count(3), "3 days");
    }

    #[test]
    fn dates_format_iso_like() {
        assert_eq!(format_date(date(2024, 12, 1)), "2024-12-01");
    }
}
