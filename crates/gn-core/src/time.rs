//! Clock arithmetic shared by the zoom engine and the readout display.

use chrono::{DateTime, Datelike, Timelike};

use crate::numeric::lenient_i64;

/// Truncate a unix timestamp to the start of its minute.
pub fn truncate_to_minute(secs: i64) -> i64 {
    secs - secs.rem_euclid(60)
}

/// Resolve a graph start/end token against the current time.
///
/// `now` maps to the current time truncated to the minute, `now<delta>`
/// (for example `now-3600`) offsets it by the signed delta, and anything
/// else is read as a literal unix timestamp. Returns `None` for tokens
/// nothing can be made of; callers keep their previous value in that case.
pub fn parse_relative_time(token: &str, now: i64) -> Option<i64> {
    if token == "now" {
        return Some(truncate_to_minute(now));
    }
    if let Some(delta) = token.strip_prefix("now") {
        return lenient_i64(delta).map(|d| truncate_to_minute(now) + d);
    }
    lenient_i64(token)
}

/// Fixed `day.month.year hour:minute` readout format, in UTC. Timestamps
/// outside the calendar range fall back to the raw second count.
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(at) => format!(
            "{}.{}.{} {}:{:02}",
            at.day(),
            at.month(),
            at.year(),
            at.hour(),
            at.minute()
        ),
        None => secs.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_drops_seconds() {
        assert_eq!(truncate_to_minute(1_288_888_888), 1_288_888_860);
        assert_eq!(truncate_to_minute(120), 120);
    }

    #[test]
    fn truncation_floors_negative_timestamps() {
        assert_eq!(truncate_to_minute(-61), -120);
    }

    #[test]
    fn now_token_is_the_truncated_clock() {
        assert_eq!(parse_relative_time("now", 125), Some(120));
    }

    #[test]
    fn now_with_delta_offsets_the_truncated_clock() {
        assert_eq!(parse_relative_time("now-3600", 7_265), Some(3_660));
        assert_eq!(parse_relative_time("now+600", 7_265), Some(7_860));
    }

    #[test]
    fn literal_timestamps_pass_through() {
        assert_eq!(parse_relative_time("1288888888", 0), Some(1_288_888_888));
        assert_eq!(parse_relative_time("123abc", 0), Some(123));
    }

    #[test]
    fn unusable_tokens_are_none() {
        assert_eq!(parse_relative_time("abc", 0), None);
        assert_eq!(parse_relative_time("nowhere", 0), None);
        assert_eq!(parse_relative_time("", 0), None);
    }

    #[test]
    fn readout_format_is_day_month_year_hour_minute() {
        assert_eq!(format_timestamp(1_288_888_888), "4.11.2010 16:41");
        assert_eq!(format_timestamp(0), "1.1.1970 0:00");
    }

    #[test]
    fn readout_minutes_are_zero_padded() {
        assert_eq!(format_timestamp(18_420), "1.1.1970 5:07");
    }

    #[test]
    fn out_of_range_timestamps_fall_back_to_seconds() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
