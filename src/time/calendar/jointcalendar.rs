use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::holidayerror::Result;
use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// Combines two calendars using logical operations (union or intersection).
///
/// # Union
/// A date is a holiday if it's a holiday in EITHER calendar, and a working
/// day only if it is one in both. Use case: a business with sites in two
/// federal states that closes whenever either site is closed.
///
/// # Intersection
/// A date is a holiday only if it's a holiday in BOTH calendars.
pub struct JointCalendar {
    c1: Arc<dyn HolidayCalendar>,
    c2: Arc<dyn HolidayCalendar>,
    logical_operator: fn(bool, bool) -> bool
}

impl JointCalendar {
    pub fn union(c1: Arc<dyn HolidayCalendar>, c2: Arc<dyn HolidayCalendar>) -> JointCalendar {
        JointCalendar {
            c1,
            c2,
            logical_operator: |b1, b2| b1 || b2
        }
    }

    pub fn intersection(c1: Arc<dyn HolidayCalendar>, c2: Arc<dyn HolidayCalendar>) -> JointCalendar {
        JointCalendar {
            c1,
            c2,
            logical_operator: |b1, b2| b1 && b2
        }
    }

    pub fn is_union(&self) -> bool {
        (self.logical_operator)(true, false)
    }

    pub fn is_intersection(&self) -> bool {
        !self.is_union()
    }

    pub fn c1(&self) -> &Arc<dyn HolidayCalendar> {
        &self.c1
    }

    pub fn c2(&self) -> &Arc<dyn HolidayCalendar> {
        &self.c2
    }
}

impl fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JointCalendar")
            .field("union", &self.is_union())
            .finish_non_exhaustive()
    }
}

impl HolidayCalendar for JointCalendar {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        (self.logical_operator)(self.c1.is_holiday(d), self.c2.is_holiday(d))
    }

    // Combined on non-working days so that either side's overrides survive.
    fn is_working_day(&self, d: NaiveDate) -> bool {
        !(self.logical_operator)(!self.c1.is_working_day(d), !self.c2.is_working_day(d))
    }

    fn holiday_set(&self, year: i32) -> Result<BTreeSet<NaiveDate>> {
        let s1 = self.c1.holiday_set(year)?;
        let s2 = self.c2.holiday_set(year)?;

        if self.is_union() {
            Ok(s1.union(&s2).copied().collect())
        } else {
            Ok(s1.intersection(&s2).copied().collect())
        }
    }
}
