use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::holidayerror::{HolidayError, Result};
use super::recurringholiday::RecurringHoliday;

/// The last given weekday strictly before an anchor day of the year.
///
/// When the anchor itself falls on that weekday the holiday is one full week
/// earlier. Repentance Day is the Wednesday before November 23 in this sense.
#[derive(Clone, Copy, Debug)]
pub struct WeekdayBeforeHoliday {
    month: u32,
    day: u32,
    weekday: Weekday
}

impl WeekdayBeforeHoliday {
    pub const fn new(month: u32, day: u32, weekday: Weekday) -> WeekdayBeforeHoliday {
        WeekdayBeforeHoliday { month, day, weekday }
    }
}

impl RecurringHoliday for WeekdayBeforeHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        let anchor = NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(HolidayError::YearOutOfRange(year))?;

        let days_back = (anchor.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        let days_back = if days_back == 0 { 7 } else { days_back };

        anchor
            .checked_sub_days(Days::new(u64::from(days_back)))
            .ok_or(HolidayError::YearOutOfRange(year))
    }
}
