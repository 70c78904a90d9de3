//! Date arithmetic helpers.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Number of days in `weeks` whole weeks.
pub fn weeks_to_days(weeks: u32) -> i64 {
    i64::from(weeks) * 7
}

/// `date` moved forward by `weeks` whole weeks, `None` past the last
/// representable date.
pub fn add_weeks(date: NaiveDate, weeks: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(weeks_to_days(weeks).unsigned_abs()))
}

/// `date` moved by `days` days in either direction, `None` out of range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let step = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(step)
    } else {
        date.checked_add_days(step)
    }
}

/// `date` moved forward by calendar months, clamping to the end of shorter
/// months (Aug 31 + 6 months = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Monday of the week containing `date`.
///
/// Saturates at the first representable date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(offset).unwrap_or(NaiveDate::MIN)
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}
