//! Working-day queries, the `HolidayQuery` facade and calendar navigation.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use proptest::prelude::*;

use feiertage::time::calendar::holidaycalendar::HolidayCalendar;
use feiertage::time::calendar::jointcalendar::JointCalendar;
use feiertage::time::calendar::regionalcalendar::RegionalCalendar;
use feiertage::{
    candidate_holidays, easter_sunday, is_holiday, is_weekend, is_working_day, next_working_day,
    region_matrix, HolidayError, HolidayQuery, Region
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn region_strategy() -> impl Strategy<Value = Region> {
    (0..Region::ALL.len()).prop_map(|i| Region::ALL[i])
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1600i32..2400, 1u32..=365).prop_map(|(year, ordinal)| NaiveDate::from_yo_opt(year, ordinal).unwrap())
}

// ─── Weekends and working days ────────────────────────────────────────────────

#[test]
fn test_weekend_sweep() {
    let start = date(2025, 3, 10);
    assert_eq!(start.weekday(), Weekday::Mon);
    for d in start.iter_days().take(14) {
        let expected = matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(is_weekend(d), expected, "{}", d);
    }
}

#[test]
fn test_working_day_excludes_weekends_and_holidays() {
    // Good Friday 2023
    assert!(!is_working_day(date(2023, 4, 7), Region::Berlin));
    // Saturday
    assert!(!is_working_day(date(2023, 4, 8), Region::Berlin));
    // Tuesday after Easter Monday
    assert!(is_working_day(date(2023, 4, 11), Region::Berlin));
}

#[test]
fn test_next_working_day_over_easter() {
    // Good Friday 2024 through Easter Monday
    assert_eq!(next_working_day(date(2024, 3, 29), Region::Bayern).unwrap(), date(2024, 4, 2));
}

#[test]
fn test_next_working_day_over_repentance_day_only_in_nordrhein_westfalen() {
    let repentance_day = date(2024, 11, 20);
    assert_eq!(next_working_day(repentance_day, Region::NordrheinWestfalen).unwrap(), date(2024, 11, 21));
    assert_eq!(next_working_day(repentance_day, Region::Sachsen).unwrap(), repentance_day);
}

#[test]
fn test_next_working_day_crosses_year_end() {
    // 2022-12-31 Saturday, 2023-01-01 Sunday and New Year's Day
    assert_eq!(next_working_day(date(2022, 12, 31), Region::Hamburg).unwrap(), date(2023, 1, 2));
}

#[test]
fn test_search_past_the_last_date_overflows() {
    let last = NaiveDate::MAX;
    assert!(is_working_day(last, Region::Bremen));
    assert_eq!(next_working_day(last, Region::Bremen).unwrap(), last);

    let calendar = RegionalCalendar::with_overrides(Region::Bremen, vec![last], vec![]);
    assert!(matches!(calendar.next_working_day(last), Err(HolidayError::DateOverflow(d)) if d == last));
    assert!(matches!(calendar.shift_n_working_days(last, 1), Err(HolidayError::DateOverflow(d)) if d == last));
}

#[test]
fn test_search_before_the_first_date_overflows() {
    let first = NaiveDate::MIN;
    // January 1 of the earliest year is New Year's Day
    assert!(is_holiday(first, Region::Bremen));

    let calendar = RegionalCalendar::new(Region::Bremen);
    assert!(matches!(calendar.previous_working_day(first), Err(HolidayError::DateOverflow(d)) if d == first));
    assert!(matches!(calendar.shift_n_working_days(first, -1), Err(HolidayError::DateOverflow(d)) if d == first));
    assert!(calendar.next_working_day(first).unwrap() > first);
}

// ─── Query object ─────────────────────────────────────────────────────────────

#[test]
fn test_query_follows_free_functions() {
    let easter_monday = date(2023, 4, 10);
    let query = HolidayQuery::with_region(easter_monday, Region::Saarland);
    assert!(query.is_holiday());
    assert!(!query.is_weekend());
    assert!(!query.is_working_day());
    assert_eq!(query.next_working_day().unwrap(), date(2023, 4, 11));
}

#[test]
fn test_query_for_year_out_of_range() {
    assert!(matches!(HolidayQuery::for_year(i32::MAX), Err(HolidayError::YearOutOfRange(_))));
}

// ─── Calendar navigation ──────────────────────────────────────────────────────

#[test]
fn test_shift_n_working_days() {
    let calendar = RegionalCalendar::new(Region::NordrheinWestfalen);
    // Thursday before Good Friday 2024
    let thursday = date(2024, 3, 28);
    assert_eq!(calendar.shift_n_working_days(thursday, 0).unwrap(), thursday);
    assert_eq!(calendar.shift_n_working_days(thursday, 1).unwrap(), date(2024, 4, 2));
    assert_eq!(calendar.shift_n_working_days(date(2024, 4, 2), -1).unwrap(), thursday);
}

#[test]
fn test_previous_working_day() {
    let calendar = RegionalCalendar::new(Region::Hessen);
    assert_eq!(calendar.previous_working_day(date(2024, 4, 1)).unwrap(), date(2024, 3, 28));
    assert_eq!(calendar.previous_working_day(date(2024, 4, 2)).unwrap(), date(2024, 4, 2));
}

#[test]
fn test_working_days_between() {
    let calendar = RegionalCalendar::new(Region::NordrheinWestfalen);
    // December 2024: 22 weekdays, Christmas and Boxing Day fall on Wed/Thu
    assert_eq!(calendar.working_days_between(date(2024, 12, 1), date(2025, 1, 1)), 20);
    assert_eq!(calendar.working_days_between(date(2025, 1, 1), date(2024, 12, 1)), 0);
}

#[test]
fn test_first_and_last_working_day_of_month() {
    let calendar = RegionalCalendar::new(Region::Berlin);
    assert_eq!(calendar.first_working_day_of_month(2023, 1).unwrap(), date(2023, 1, 2));
    // 2024-03-31 Sunday, 03-30 Saturday, 03-29 Good Friday
    assert_eq!(calendar.last_working_day_of_month(2024, 3).unwrap(), date(2024, 3, 28));
    assert!(matches!(
        calendar.last_working_day_of_month(2024, 13),
        Err(HolidayError::InvalidMonth { year: 2024, month: 13 })
    ));
}

#[test]
fn test_joint_calendar_of_two_regions() {
    let nw: Arc<dyn HolidayCalendar> = Arc::new(RegionalCalendar::new(Region::NordrheinWestfalen));
    let by: Arc<dyn HolidayCalendar> = Arc::new(RegionalCalendar::new(Region::Bayern));
    let joint = JointCalendar::union(nw, by);
    // Corpus Christi 2025 is Thursday June 19
    assert_eq!(joint.next_working_day(date(2025, 6, 19)).unwrap(), date(2025, 6, 20));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_fifteen_candidates_in_canonical_order(year in -4000i32..10000) {
        let holidays = candidate_holidays(year).unwrap();
        prop_assert_eq!(holidays.len(), 15);
        for (position, holiday) in holidays.iter().enumerate() {
            prop_assert_eq!(holiday.name().index(), position);
            prop_assert_eq!(holiday.date().year(), year);
        }
    }

    #[test]
    fn prop_good_friday_and_easter_monday_bracket_easter(year in -4000i32..10000) {
        let easter = easter_sunday(year).unwrap();
        let holidays = candidate_holidays(year).unwrap();
        prop_assert_eq!(holidays[2].date(), easter - TimeDelta::days(2));
        prop_assert_eq!(holidays[3].date(), easter + TimeDelta::days(1));
    }

    #[test]
    fn prop_gregorian_easter_is_a_sunday_in_spring(year in 1584i32..10000) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!(easter >= date(year, 3, 22));
        prop_assert!(easter <= date(year, 4, 25));
    }

    #[test]
    fn prop_candidates_round_trip_through_is_holiday(year in 1600i32..2400, region in region_strategy()) {
        let holidays = candidate_holidays(year).unwrap();
        let matrix = region_matrix(region);
        for (position, holiday) in holidays.iter().enumerate() {
            // a later candidate on the same date resolves to the earlier position
            let first = holidays.iter().position(|h| h.date() == holiday.date()).unwrap();
            prop_assert_eq!(is_holiday(holiday.date(), region), matrix[first]);
            if first == position {
                prop_assert_eq!(is_holiday(holiday.date(), region), matrix[position]);
            }
        }
    }

    #[test]
    fn prop_next_working_day_is_identity_on_working_days(d in date_strategy(), region in region_strategy()) {
        if is_working_day(d, region) {
            prop_assert_eq!(next_working_day(d, region).unwrap(), d);
        }
    }

    #[test]
    fn prop_next_working_day_lands_on_working_day(d in date_strategy(), region in region_strategy()) {
        let next = next_working_day(d, region).unwrap();
        prop_assert!(next >= d);
        prop_assert!(next - d <= TimeDelta::days(7));
        prop_assert!(is_working_day(next, region));
        for skipped in d.iter_days().take_while(|x| *x < next) {
            prop_assert!(!is_working_day(skipped, region));
        }
    }
}
