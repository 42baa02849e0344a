use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::holidayerror::Result;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::regionmatrix::{is_observed, region_matrix};
use crate::time::holidayname::{HolidayDate, HolidayName, HOLIDAY_COUNT};
use crate::time::region::Region;

/// All fifteen candidate holidays of `year` in canonical order, whether or
/// not any region observes them.
pub fn candidate_holidays(year: i32) -> Result<Vec<HolidayDate>> {
    let mut holidays = Vec::with_capacity(HOLIDAY_COUNT);
    for name in HolidayName::ALL {
        holidays.push(HolidayDate::new(name, name.rule().get_holiday(year)?));
    }
    debug!(year, count = holidays.len(), "computed candidate holidays");
    Ok(holidays)
}

/// The candidate holiday falling on `d`, if the region observes it.
///
/// Matching is on the full date: a holiday only counts for its own year.
pub fn observed_holiday(d: NaiveDate, region: Region) -> Option<HolidayName> {
    let candidates = candidate_holidays(d.year()).ok()?;
    let position = candidates.iter().position(|holiday| holiday.date() == d)?;
    if region_matrix(region)[position] {
        Some(candidates[position].name())
    } else {
        None
    }
}

/// One line of a year listing. Additional holidays carry no name.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub struct ListedHoliday {
    name: Option<HolidayName>,
    date: NaiveDate
}

impl ListedHoliday {
    pub fn name(&self) -> Option<HolidayName> {
        self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Holiday calendar of one federal state, with optional one-off overrides.
///
/// Additional working days win over weekends and holidays alike.
#[derive(Clone, Debug, Default)]
pub struct RegionalCalendar {
    region: Region,
    additional_holidays: BTreeSet<NaiveDate>,
    additional_working_days: BTreeSet<NaiveDate>
}

impl RegionalCalendar {
    pub fn new(region: Region) -> RegionalCalendar {
        RegionalCalendar {
            region,
            additional_holidays: BTreeSet::new(),
            additional_working_days: BTreeSet::new()
        }
    }

    /// # Arguments
    /// * `region` - Federal state whose inclusion vector applies
    /// * `additional_holidays` - One-time holidays
    /// * `additional_working_days` - Dates forced to be working days
    pub fn with_overrides(
        region: Region,
        additional_holidays: Vec<NaiveDate>,
        additional_working_days: Vec<NaiveDate>
    ) -> RegionalCalendar {
        RegionalCalendar {
            region,
            additional_holidays: additional_holidays.into_iter().collect(),
            additional_working_days: additional_working_days.into_iter().collect()
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn additional_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.additional_holidays
    }

    pub fn additional_working_days(&self) -> &BTreeSet<NaiveDate> {
        &self.additional_working_days
    }

    /// Named holidays the region observes in `year`, in canonical order,
    /// minus those overridden as working days.
    pub fn observed_holidays(&self, year: i32) -> Result<Vec<HolidayDate>> {
        let mut holidays = candidate_holidays(year)?;
        holidays.retain(|holiday| {
            is_observed(self.region, holiday.name())
                && !self.additional_working_days.contains(&holiday.date())
        });
        Ok(holidays)
    }

    /// Observed named holidays in canonical order, followed by the additional
    /// holidays of `year` that neither coincide with one nor are forced open.
    pub fn listed_holidays(&self, year: i32) -> Result<Vec<ListedHoliday>> {
        let named = self.observed_holidays(year)?;
        let additional: Vec<ListedHoliday> = self
            .additional_holidays
            .iter()
            .filter(|d| d.year() == year && !self.additional_working_days.contains(*d))
            .filter(|d| !named.iter().any(|holiday| holiday.date() == **d))
            .map(|d| ListedHoliday { name: None, date: *d })
            .collect();

        Ok(named
            .into_iter()
            .map(|holiday| ListedHoliday { name: Some(holiday.name()), date: holiday.date() })
            .chain(additional)
            .collect())
    }

    pub fn holiday_name(&self, d: NaiveDate) -> Option<HolidayName> {
        if self.additional_working_days.contains(&d) {
            return None;
        }
        observed_holiday(d, self.region)
    }
}

impl HolidayCalendar for RegionalCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        if self.additional_working_days.contains(&d) {
            return false;
        }
        if self.additional_holidays.contains(&d) {
            return true;
        }
        observed_holiday(d, self.region).is_some()
    }

    fn is_working_day(&self, d: NaiveDate) -> bool {
        if self.additional_working_days.contains(&d) {
            return true;
        }
        !(self.is_weekend(d) || self.is_holiday(d))
    }

    fn holiday_set(&self, year: i32) -> Result<BTreeSet<NaiveDate>> {
        let mut holiday_set: BTreeSet<NaiveDate> = self
            .observed_holidays(year)?
            .iter()
            .map(HolidayDate::date)
            .collect();

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied()
        );

        for working_day in self.additional_working_days.iter().filter(|d| d.year() == year) {
            holiday_set.remove(working_day);
        }

        Ok(holiday_set)
    }
}
