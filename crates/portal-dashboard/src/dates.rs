//! Date display helpers for the dashboard cards

use chrono::{DateTime, NaiveDate, Utc};

/// Long-form date, e.g. "January 20, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Rough relative age of a record, rounded up like the original widget
pub fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().unsigned_abs();
    let days = seconds.div_ceil(86_400);
    if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        format!("{} weeks ago", days.div_ceil(7))
    } else {
        format!("{} months ago", days.div_ceil(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn long_date() {
        assert_eq!(
            format_long_date(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
            "January 20, 2024"
        );
    }

    #[test]
    fn relative_ages() {
        let now = at(2024, 1, 31);
        assert_eq!(time_ago(now, at(2024, 1, 30)), "Yesterday");
        assert_eq!(time_ago(now, at(2024, 1, 28)), "3 days ago");
        assert_eq!(time_ago(now, at(2024, 1, 17)), "2 weeks ago");
        assert_eq!(time_ago(now, at(2023, 10, 1)), "5 months ago");
    }
}
