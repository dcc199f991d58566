//! Calendar helpers for birthday arithmetic.

use chrono::{Datelike, Local, NaiveDate};

/// Format used for birthdays on input, display and disk.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The anniversary of `date` in `year`.
///
/// Feb 29 falls on Mar 1 in non-leap years.
pub fn anniversary_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The first anniversary of `date` on or after `today`.
pub fn next_anniversary(date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(date, today.year())?;
    if this_year < today {
        anniversary_in(date, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Whole days from `today` until the next anniversary of `date`.
pub fn days_until_anniversary(date: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_anniversary(date, today).map(|next| (next - today).num_days())
}
