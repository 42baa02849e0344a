use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};
use super::recurringholiday::RecurringHoliday;

/// A holiday on the same month and day every year, never moved off a weekend.
#[derive(Clone, Copy, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(HolidayError::YearOutOfRange(year))
    }
}
