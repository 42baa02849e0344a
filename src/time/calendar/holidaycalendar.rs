use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::trace;

use crate::holidayerror::{HolidayError, Result};
use crate::time::utility::{days_of_month, is_weekend};

fn succ(d: NaiveDate) -> Result<NaiveDate> {
    d.succ_opt().ok_or(HolidayError::DateOverflow(d))
}

fn pred(d: NaiveDate) -> Result<NaiveDate> {
    d.pred_opt().ok_or(HolidayError::DateOverflow(d))
}

/// A set of public holidays on top of the Saturday/Sunday weekend.
///
/// `Send + Sync` is a supertrait so calendars can be shared behind `Arc`.
pub trait HolidayCalendar: Send + Sync {
    /// Whether `d` is an observed public holiday. Weekends are not holidays
    /// by themselves.
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Observed holidays of `year`, sorted.
    fn holiday_set(&self, year: i32) -> Result<BTreeSet<NaiveDate>>;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        is_weekend(d)
    }

    fn is_working_day(&self, d: NaiveDate) -> bool {
        !(self.is_weekend(d) || self.is_holiday(d))
    }

    /// First working day on or after `d`.
    fn next_working_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        let mut current = d;
        while !self.is_working_day(current) {
            current = succ(current)?;
        }
        trace!(from = %d, to = %current, "next working day");
        Ok(current)
    }

    /// Last working day on or before `d`.
    fn previous_working_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        let mut current = d;
        while !self.is_working_day(current) {
            current = pred(current)?;
        }
        Ok(current)
    }

    /// Moves `n` working days away from `horizon`; `n = 0` returns `horizon`.
    fn shift_n_working_days(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate> {
        let shift_one_day: fn(NaiveDate) -> Result<NaiveDate> = if n >= 0 { succ } else { pred };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_working_day(d) as u32;
        }
        Ok(d)
    }

    /// Working days in `[from, to)`.
    fn working_days_between(&self, from: NaiveDate, to: NaiveDate) -> usize {
        from.iter_days()
            .take_while(|d| *d < to)
            .filter(|d| self.is_working_day(*d))
            .count()
    }

    fn first_working_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(HolidayError::InvalidMonth { year, month })?;
        self.next_working_day(fom)
    }

    fn last_working_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        let eom = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month)?)
            .ok_or(HolidayError::YearOutOfRange(year))?;
        self.previous_working_day(eom)
    }
}
