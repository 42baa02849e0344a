use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::holidayerror::{HolidayError, Result};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

pub fn days_of_month (year: i32, month: u32) -> Result<u32> {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if !(1..=12).contains(&month) {
        return Err(HolidayError::InvalidMonth { year, month });
    }

    if is_leap(year) {
        Ok(LEAP_EOM[month as usize])
    } else {
        Ok(NO_LEAP_EOM[month as usize])
    }
}

/// Builds a date the way a lenient calendar does: a day past the end of the
/// month rolls over into the following month.
pub fn lenient_ymd (year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

#[inline]
pub fn is_weekend (d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}
