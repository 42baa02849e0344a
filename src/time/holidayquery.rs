use chrono::{Local, NaiveDate};

use crate::holidayerror::{HolidayError, Result};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::regionalcalendar::{observed_holiday, RegionalCalendar};
use crate::time::holidayname::HolidayName;
use crate::time::region::Region;

pub use crate::time::utility::is_weekend;

pub fn is_holiday(date: NaiveDate, region: Region) -> bool {
    observed_holiday(date, region).is_some()
}

pub fn is_working_day(date: NaiveDate, region: Region) -> bool {
    !(is_weekend(date) || is_holiday(date, region))
}

/// First working day on or after `date`.
pub fn next_working_day(date: NaiveDate, region: Region) -> Result<NaiveDate> {
    RegionalCalendar::new(region).next_working_day(date)
}

/// A date together with the federal state it is evaluated for.
///
/// The region defaults to Nordrhein-Westfalen.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HolidayQuery {
    date: NaiveDate,
    region: Region
}

impl HolidayQuery {
    pub fn new(date: NaiveDate) -> HolidayQuery {
        HolidayQuery::with_region(date, Region::default())
    }

    pub fn with_region(date: NaiveDate, region: Region) -> HolidayQuery {
        HolidayQuery { date, region }
    }

    /// January 1 of `year`.
    pub fn for_year(year: i32) -> Result<HolidayQuery> {
        let date = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or(HolidayError::YearOutOfRange(year))?;
        Ok(HolidayQuery::new(date))
    }

    pub fn today() -> HolidayQuery {
        HolidayQuery::new(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn is_holiday(&self) -> bool {
        is_holiday(self.date, self.region)
    }

    pub fn holiday_name(&self) -> Option<HolidayName> {
        observed_holiday(self.date, self.region)
    }

    pub fn is_weekend(&self) -> bool {
        is_weekend(self.date)
    }

    pub fn is_working_day(&self) -> bool {
        is_working_day(self.date, self.region)
    }

    pub fn next_working_day(&self) -> Result<NaiveDate> {
        next_working_day(self.date, self.region)
    }
}
