//! Date parsing and display for test-plan periods.
//!
//! The API stores datetimes (`2024-05-01T00:00:00Z`); the create form works
//! with `<input type="date">` values (`2024-05-01`); the dashboard shows
//! `01.05.2024`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const INPUT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day].[month].[year]");

/// Placeholder for a missing side of a period.
pub const OPEN_END: &str = "...";
pub const NO_DATES: &str = "No dates";

/// Parse a `YYYY-MM-DD` form value.
pub fn parse_input_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), INPUT_FORMAT).ok()
}

/// Parse the date part of an API datetime.
pub fn parse_api_date(raw: &str) -> Option<Date> {
    raw.trim().get(..10).and_then(parse_input_date)
}

/// Midnight UTC datetime string accepted by the create endpoint.
pub fn to_api_datetime(date: Date) -> Option<String> {
    date.format(INPUT_FORMAT).ok().map(|day| format!("{day}T00:00:00Z"))
}

/// `DD.MM.YYYY`, or the raw text when the server sent something unexpected.
pub fn display_date(raw: &str) -> String {
    parse_api_date(raw)
        .and_then(|date| date.format(DISPLAY_FORMAT).ok())
        .unwrap_or_else(|| raw.trim().to_owned())
}

/// Human-readable plan period such as `01.05.2024 - 14.05.2024`.
pub fn format_plan_period(start: Option<&str>, end: Option<&str>) -> String {
    let side = |raw: Option<&str>| raw.map(str::trim).filter(|s| !s.is_empty()).map(display_date);
    match (side(start), side(end)) {
        (None, None) => NO_DATES.to_owned(),
        (start, end) => format!(
            "{} - {}",
            start.as_deref().unwrap_or(OPEN_END),
            end.as_deref().unwrap_or(OPEN_END)
        ),
    }
}
