use chrono::{Datelike, Local, NaiveDate};

/// The day after `today`. The last representable date maps to itself.
pub fn tomorrow_of(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Earliest date a booking can be made for, as the `min` of a date input.
pub fn earliest_booking_date() -> String {
    format_iso(tomorrow_of(Local::now().date_naive()))
}

pub fn current_year() -> i32 {
    Local::now().year()
}
