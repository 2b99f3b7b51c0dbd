#![allow(dead_code)]

mod mock_repositories;

pub use mock_repositories::*;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// 2024-06-04 is a Tuesday.
pub fn tuesday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 4)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// 2024-06-01 is a Saturday.
pub fn saturday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn local(naive: NaiveDateTime) -> DateTime<Local> {
    Local.from_local_datetime(&naive).earliest().unwrap()
}
