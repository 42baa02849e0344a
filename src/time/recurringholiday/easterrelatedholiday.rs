use chrono::{NaiveDate, TimeDelta};
use tracing::trace;

use crate::holidayerror::{HolidayError, Result};
use crate::time::utility::lenient_ymd;
use super::recurringholiday::RecurringHoliday;

/// Last year whose Easter is computed with the Julian Computus.
pub const LAST_JULIAN_EASTER_YEAR: i32 = 1583;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum EasterType {
    Julian,
    Gregorian
}

impl EasterType {
    pub fn for_year(year: i32) -> EasterType {
        if year <= LAST_JULIAN_EASTER_YEAR {
            EasterType::Julian
        } else {
            EasterType::Gregorian
        }
    }

    /// Month and day of Easter Sunday. The day may exceed the month length
    /// for negative years; callers roll it over.
    fn month_day(&self, year: i32) -> (u32, u32) {
        let x = match self {
            EasterType::Julian => {
                let a = year % 4;
                let b = year % 7;
                let c = year % 19;
                let d = (19 * c + 15) % 30;
                let e = (2 * a + 4 * b - d + 34) % 7;
                d + e + 114
            },
            EasterType::Gregorian => {
                let a = year % 19;
                let b = year / 100;
                let c = year % 100;
                let d = b / 4;
                let e = b % 4;
                let f = (b + 8) / 25;
                let g = (b - f + 1) / 3;
                let h = (19 * a + b - d - g + 15) % 30;
                let i = c / 4;
                let j = c % 4;
                let k = (32 + 2 * e + 2 * i - h - j) % 7;
                let l = (a + 11 * h + 22 * k) / 451;
                h + k - 7 * l + 114
            }
        };

        // x stays within 79..=149 for every i32 year
        ((x / 31) as u32, (x % 31 + 1) as u32)
    }
}

/// Easter Sunday of `year`, Julian Computus up to 1583 and Gregorian after.
///
/// The result is always a proleptic Gregorian date. Julian Easter dates before
/// the 1582 reform keep their Julian month and day, so they are not Sundays.
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    let easter_type = EasterType::for_year(year);
    let (month, day) = easter_type.month_day(year);
    trace!(year, ?easter_type, month, day, "computed easter sunday");
    lenient_ymd(year, month, day).ok_or(HolidayError::YearOutOfRange(year))
}

/// A movable feast a fixed number of days away from Easter Sunday.
#[derive(Clone, Copy, Debug)]
pub struct EasterRelatedHoliday {
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub const fn new(shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        let easter_day = easter_sunday(year)?;
        easter_day
            .checked_add_signed(TimeDelta::days(self.shift_days))
            .ok_or(HolidayError::YearOutOfRange(year))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_easter_dates() {
        assert_eq!(easter_sunday(2000).unwrap(), ymd(2000, 4, 23));
        assert_eq!(easter_sunday(2019).unwrap(), ymd(2019, 4, 21));
        assert_eq!(easter_sunday(2023).unwrap(), ymd(2023, 4, 9));
        assert_eq!(easter_sunday(2024).unwrap(), ymd(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), ymd(2025, 4, 20));
    }

    #[test]
    fn year_1583_still_uses_julian_branch() {
        assert_eq!(EasterType::for_year(1583), EasterType::Julian);
        assert_eq!(EasterType::for_year(1584), EasterType::Gregorian);
        assert_eq!(easter_sunday(1583).unwrap(), ymd(1583, 3, 31));
        assert_eq!(easter_sunday(1584).unwrap(), ymd(1584, 4, 1));
    }

    #[test]
    fn pre_reform_julian_easter_is_not_rebased() {
        // Julian Sunday, April 19 1500; a Thursday on the proleptic Gregorian calendar
        let easter = easter_sunday(1500).unwrap();
        assert_eq!(easter, ymd(1500, 4, 19));
        assert_eq!(easter.weekday(), Weekday::Thu);
    }

    #[test]
    fn shifted_feast_follows_easter() {
        let ascension = EasterRelatedHoliday::new(39);
        assert_eq!(ascension.get_holiday(2024).unwrap(), ymd(2024, 5, 9));
        let good_friday = EasterRelatedHoliday::new(-2);
        assert_eq!(good_friday.get_holiday(2023).unwrap(), ymd(2023, 4, 7));
    }

    #[test]
    fn year_beyond_date_range_is_an_error() {
        assert!(matches!(easter_sunday(i32::MAX), Err(HolidayError::YearOutOfRange(_))));
    }
}
