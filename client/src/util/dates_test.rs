use super::*;
use time::Month;

#[test]
fn parse_input_date_accepts_iso_day() {
    let date = parse_input_date(" 2024-05-01 ").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, Month::May, 1));
}

#[test]
fn parse_input_date_rejects_other_shapes() {
    assert!(parse_input_date("01.05.2024").is_none());
    assert!(parse_input_date("2024-13-01").is_none());
    assert!(parse_input_date("").is_none());
}

#[test]
fn parse_api_date_reads_datetime_prefix() {
    let date = parse_api_date("2024-05-01T13:45:00Z").unwrap();
    assert_eq!(date.day(), 1);
    assert!(parse_api_date("short").is_none());
}

#[test]
fn to_api_datetime_is_midnight_utc() {
    let date = parse_input_date("2024-02-29").unwrap();
    assert_eq!(to_api_datetime(date).as_deref(), Some("2024-02-29T00:00:00Z"));
}

#[test]
fn format_plan_period_both_dates() {
    assert_eq!(
        format_plan_period(Some("2024-05-01T00:00:00Z"), Some("2024-05-14T00:00:00Z")),
        "01.05.2024 - 14.05.2024"
    );
}

#[test]
fn format_plan_period_open_ends() {
    assert_eq!(format_plan_period(Some("2024-05-01"), None), "01.05.2024 - ...");
    assert_eq!(format_plan_period(None, Some("2024-05-14")), "... - 14.05.2024");
    assert_eq!(format_plan_period(Some("  "), None), NO_DATES);
    assert_eq!(format_plan_period(None, None), NO_DATES);
}

#[test]
fn display_date_passes_through_unparsable_text() {
    assert_eq!(display_date("next sprint"), "next sprint");
}
