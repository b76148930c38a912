#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{America::New_York, Tz};
use intraday_levels::{Bar, BarSeries};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// New York wall time on `day`.
pub fn at(day: NaiveDate, h: u32, m: u32) -> DateTime<Tz> {
    let t = NaiveTime::from_hms_opt(h, m, 0).expect("valid time");
    New_York
        .from_local_datetime(&day.and_time(t))
        .single()
        .expect("unambiguous local time")
}

pub fn ohlcv(day: NaiveDate, h: u32, m: u32, o: f64, hi: f64, lo: f64, c: f64, v: u64) -> Bar {
    Bar::new(at(day, h, m), o, hi, lo, c, v)
}

/// Bar where only the range matters; opens at the low, closes at the high.
pub fn range(day: NaiveDate, h: u32, m: u32, hi: f64, lo: f64) -> Bar {
    ohlcv(day, h, m, lo, hi, lo, hi, 1_000)
}

/// Mon 2024-01-08 .. Thu 2024-01-11, with Tue trading pre-market only.
///
/// Thursday is "today": its short and long opening ranges share the same
/// high but not the same low.
pub fn four_day_week() -> BarSeries {
    let mon = date(2024, 1, 8);
    let tue = date(2024, 1, 9);
    let wed = date(2024, 1, 10);
    let thu = date(2024, 1, 11);
    BarSeries::new(vec![
        range(mon, 10, 0, 104.0, 101.5),
        range(tue, 7, 0, 110.75, 108.25),
        range(wed, 8, 0, 120.5, 100.0),
        range(wed, 9, 30, 105.25, 100.75),
        range(wed, 12, 0, 104.5, 99.75),
        range(wed, 16, 0, 103.25, 102.5),
        range(wed, 17, 0, 130.5, 90.25),
        ohlcv(thu, 4, 0, 101.5, 102.25, 101.25, 102.0, 800),
        ohlcv(thu, 8, 0, 102.0, 103.75, 101.75, 103.5, 1_200),
        ohlcv(thu, 9, 30, 102.25, 102.5, 101.5, 102.0, 5_000),
        ohlcv(thu, 9, 35, 102.0, 102.75, 101.75, 102.5, 4_000),
        ohlcv(thu, 9, 40, 102.5, 102.5, 100.25, 100.75, 3_500),
        ohlcv(thu, 9, 45, 100.75, 102.25, 101.0, 102.0, 3_000),
        ohlcv(thu, 10, 0, 102.0, 104.0, 102.0, 103.75, 2_500),
    ])
    .expect("ordered fixture")
}
