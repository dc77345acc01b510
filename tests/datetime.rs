use chatclock::constants::DEFAULT_WEEKDAY_NAMES;
use chatclock::utils::datetime::*;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};

fn gmt8() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    gmt8().with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

#[test]
fn test_parse_date_ignores_trailing_time() {
    let expected = NaiveDate::from_ymd_opt(2016, 6, 28).unwrap();
    assert_eq!(parse_date("2016-06-28").unwrap(), expected);
    assert_eq!(parse_date("2016-06-28 10:10:30").unwrap(), expected);
    assert!(parse_date("28/06/2016").is_err());
}

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_short_date_str() {
    assert_eq!(short_date_str("1561910400", &gmt8()).as_deref(), Some("2019-07-01"));
    assert_eq!(short_date_str("1561910400", &Utc).as_deref(), Some("2019-06-30"));
    assert_eq!(short_date_str("-86400", &Utc).as_deref(), Some("1969-12-31"));
}

#[test]
fn test_short_date_str_empty_is_epoch() {
    assert_eq!(short_date_str("", &Utc).as_deref(), Some("1970-01-01"));
}

#[test]
fn test_short_date_str_not_a_number() {
    assert_eq!(short_date_str("not-a-number", &Utc), None);
    assert_eq!(short_date_str("12.5", &Utc), None);
    assert_eq!(short_date_str("99999999999999999", &Utc), None);
}

#[test]
fn test_parse_time() {
    let now = at(2021, 5, 1, 8, 30);
    // 2021-05-01 08:00:00 GMT+8
    assert_eq!(parse_time("08:00:00", &now), 1_619_827_200_000);
    assert_eq!(parse_time("08:00:01", &now), 1_619_827_201_000);
}

#[test]
fn test_parse_time_invalid() {
    let now = at(2021, 5, 1, 8, 30);
    assert_eq!(parse_time("", &now), 0);
    assert_eq!(parse_time("   ", &now), 0);
    assert_eq!(parse_time("08:00", &now), 0);
    assert_eq!(parse_time("eight", &now), 0);
}

#[test]
fn test_is_today() {
    let now = at(2021, 5, 1, 8, 30);
    assert!(is_today("2021-05-01", &now));
    assert!(is_today("2021-05-01 23:59:59", &now));
    assert!(!is_today("2021-04-30", &now));
    assert!(!is_today("2020-05-01", &now));
    assert!(!is_today("garbage", &now));
    assert!(!is_today("", &now));
}

#[test]
fn test_is_yesterday() {
    let now = at(2021, 5, 1, 8, 30);
    assert!(is_yesterday("2021-04-30", &now));
    assert!(is_yesterday("2021-04-30 10:10:30", &now));
    assert!(!is_yesterday("2021-05-01", &now));
    assert!(!is_yesterday("2021-04-29", &now));
    assert!(!is_yesterday("garbage", &now));
}

#[test]
fn test_is_yesterday_across_new_year() {
    let now = at(2022, 1, 1, 0, 5);
    assert!(is_yesterday("2021-12-31", &now));
    assert!(!is_today("2021-12-31", &now));
}

#[test]
fn test_is_today_with_real_clock() {
    let now = Local::now();
    let today = now.format("%Y-%m-%d").to_string();
    assert!(is_today(&today, &now));
    assert!(!is_yesterday(&today, &now));
}

#[test]
fn test_format_iso8601_time() {
    assert_eq!(format_iso8601_time("2021-05-01T08:30"), "2021-05-01 08:30");
    assert_eq!(format_iso8601_time("2021-05-01T08:30:45"), "2021-05-01 08:30");
    assert_eq!(format_iso8601_time("2021-05-01 08:30"), "");
    assert_eq!(format_iso8601_time("yesterday"), "");
    assert_eq!(format_iso8601_time(""), "");
}

#[test]
fn test_hour_and_minute() {
    assert_eq!(hour_and_minute("12:00:00"), "12:00");
    assert_eq!(hour_and_minute("08:30:15"), "08:30");
    assert_eq!(hour_and_minute(""), "");
    assert_eq!(hour_and_minute("ab"), "");
    assert_eq!(hour_and_minute(":00"), "");
}

#[test]
fn test_current_and_last_day() {
    let now = at(2021, 5, 1, 8, 30);
    assert_eq!(current_day(&now), "20210501");
    assert_eq!(last_day(&now), "20210430");

    let march = at(2021, 3, 1, 0, 10);
    assert_eq!(last_day(&march), "20210228");
}

#[test]
fn test_time_by_timestamp() {
    assert_eq!(time_by_timestamp(0, &Utc), "1970-01-01 00:00:00");
    assert_eq!(time_by_timestamp(1_561_910_400_000, &gmt8()), "2019-07-01 00:00:00");
    assert_eq!(time_by_timestamp(i64::MAX, &Utc), "");
}

#[test]
fn test_hour_minute_and_meridiem() {
    let morning = at(2021, 5, 1, 8, 5);
    assert_eq!(hour_minute(&morning), "08:05");
    assert!(is_am(&morning));
    assert_eq!(meridiem_label(&morning, "上午", "下午"), "上午");

    let noon = at(2021, 5, 1, 12, 0);
    assert_eq!(hour_minute(&noon), "12:00");
    assert!(!is_am(&noon));
    assert_eq!(meridiem_label(&noon, "AM", "PM"), "PM");

    let late = at(2021, 5, 1, 11, 59);
    assert!(is_am(&late));
}

#[test]
fn test_week_day_str() {
    assert_eq!(week_day_str(1, &DEFAULT_WEEKDAY_NAMES), Some("星期日"));
    assert_eq!(week_day_str(4, &DEFAULT_WEEKDAY_NAMES), Some("星期三"));
    assert_eq!(week_day_str(7, &DEFAULT_WEEKDAY_NAMES), Some("星期六"));
}

#[test]
fn test_week_day_str_out_of_range() {
    assert_eq!(week_day_str(0, &DEFAULT_WEEKDAY_NAMES), None);
    assert_eq!(week_day_str(8, &DEFAULT_WEEKDAY_NAMES), None);
    assert_eq!(week_day_str(-1, &DEFAULT_WEEKDAY_NAMES), None);
}

#[test]
fn test_week_day_index() {
    let saturday = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2021, 5, 2).unwrap();
    assert_eq!(week_day_index(saturday), 7);
    assert_eq!(week_day_index(sunday), 1);
    assert_eq!(week_day_str(week_day_index(sunday), &DEFAULT_WEEKDAY_NAMES), Some("星期日"));
}

#[test]
fn test_sync_gate() {
    let cutoff = sync_cutoff_millis().unwrap();
    assert_eq!(cutoff, gmt8().with_ymd_and_hms(2019, 7, 1, 0, 0, 0).unwrap().timestamp_millis());
    assert!(!is_time_synced_at(cutoff));
    assert!(!is_time_synced_at(cutoff - 1));
    assert!(is_time_synced_at(cutoff + 1));
    assert!(is_time_synced_at(Utc::now().timestamp_millis()));
}
