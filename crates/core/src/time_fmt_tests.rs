// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn pacific() -> Zone {
    Zone::from_hours(-8.0).unwrap()
}

#[test]
fn parses_timestamp_with_fraction_quirk() {
    let t = parse_timestamp("2014-11-05T12:45:43.0188", pacific()).unwrap();
    assert_eq!(t.trunc() as i64, 1_415_220_343);
    assert!((t.fract() - 0.0188).abs() < 1e-6);
}

#[test]
fn fraction_is_divided_by_ten_thousand() {
    let a = parse_timestamp("2016-03-10T04:15:02.0036", Zone::utc()).unwrap();
    let b = parse_timestamp("2016-03-10T04:15:02.0000", Zone::utc()).unwrap();
    assert!((a - b - 0.0036).abs() < 1e-6);
}

#[yare::parameterized(
    bom      = { "\u{feff}2014-11-05T12:45:43.0188" },
    stray    = { "x2014-11-05T12:45:43.0188" },
    trailing = { "2014-11-05T12:45:43.0188 " },
)]
fn leading_byte_is_dropped(text: &str) {
    let t = parse_timestamp(text, pacific()).unwrap();
    assert_eq!(t.trunc() as i64, 1_415_220_343);
}

#[yare::parameterized(
    no_fraction  = { "2014-11-05T12:45:43" },
    bad_fraction = { "2014-11-05T12:45:43.ab" },
    bad_date     = { "2014-13-05T12:45:43.0188" },
    garbage      = { "Job Scheduler" },
    empty        = { "" },
)]
fn rejects_malformed_timestamps(text: &str) {
    assert!(matches!(parse_timestamp(text, Zone::utc()), Err(LineError::Timestamp(_))));
}

#[test]
fn fixed_zone_shifts_epoch() {
    let utc = parse_timestamp("2014-11-05T12:45:43.0000", Zone::utc()).unwrap();
    let pst = parse_timestamp("2014-11-05T12:45:43.0000", pacific()).unwrap();
    assert_eq!(pst - utc, 8.0 * 3600.0);
}

#[yare::parameterized(
    tie_down      = { 7.5, "0.12" },
    tie_up        = { 22.5, "0.38" },
    tie_down_odd  = { 37.5, "0.62" },
    above_tie     = { 2.7, "0.05" },
    negative_tie  = { -7.5, "-0.12" },
)]
fn minute_ties_round_to_even(seconds: f64, expected: &str) {
    assert_eq!(interval_to_string_m(Some(seconds)), expected);
}

#[test]
fn elapsed_tie_rounds_to_even() {
    assert_eq!(format_elapsed(15.0), "0.2 min. / 0.0 hr.");
    assert_eq!(interval_to_float_m(Some(22.5)), 0.38);
}

#[test]
fn interval_string_minutes() {
    assert_eq!(interval_to_string_m(Some(60.0)), "1.0");
    assert_eq!(interval_to_string_m(Some(24.0)), "0.4");
    assert_eq!(interval_to_string_m(Some(10.8)), "0.18");
    assert_eq!(interval_to_string_m(None), "NA");
    assert_eq!(interval_to_string_m(Some(f64::NAN)), "NA");
}

#[test]
fn interval_float_minutes() {
    assert_eq!(interval_to_float_m(Some(90.0)), 1.5);
    assert!(interval_to_float_m(None).is_nan());
}

#[test]
fn elapsed_strings() {
    assert_eq!(format_elapsed(4200.0), "70.0 min. / 1.17 hr.");
    assert_eq!(format_elapsed_str("4200"), "70.0 min. / 1.17 hr.");
    assert_eq!(format_elapsed_str("foo"), "illegal time str <foo>");
    assert_eq!(format_elapsed_str("4.2"), "illegal time str <4.2>");
}

#[test]
fn date_hour_day_breakdown() {
    let zone = Zone::utc();
    let t = parse_timestamp("2014-01-01T12:45:00.0000", zone).unwrap();
    let (date, hour, day) = zone.date_hour_day(Some(t));
    assert_eq!(date, "2014-01-01");
    assert_eq!(hour, "12");
    assert_eq!(day, "Wednesday");
}

#[test]
fn unknown_epoch_breaks_down_to_na() {
    let (date, hour, day) = Zone::utc().date_hour_day(None);
    assert_eq!((date.as_str(), hour.as_str(), day.as_str()), ("NA", "NA", "NA"));
    assert_eq!(Zone::utc().short_stamp(None), "");
}

#[test]
fn short_stamp_format() {
    let zone = Zone::utc();
    let t = parse_timestamp("2014-11-05T12:45:43.0188", zone).unwrap();
    assert_eq!(zone.short_stamp(Some(t)), "141105 12:45:43");
}

#[test]
fn from_hours_rejects_out_of_range() {
    assert!(Zone::from_hours(30.0).is_none());
    assert!(Zone::from_hours(f64::NAN).is_none());
    assert_eq!(Zone::from_hours(0.0), Some(Zone::utc()));
}
