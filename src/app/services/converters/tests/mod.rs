//! Test utilities for value converter testing

use chrono::{DateTime, Local, NaiveDate, TimeZone};

mod date_tests;

/// Local instant for a wall-clock time, independent of the host zone
pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Local> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap();
    Local.from_local_datetime(&naive).earliest().unwrap()
}
