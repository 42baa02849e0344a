use chrono::NaiveDate;

use crate::holidayerror::Result;


pub trait RecurringHoliday: Send + Sync {

    /// The date this holiday falls on in `year`.
    fn get_holiday(&self, year: i32) -> Result<NaiveDate>;
}
