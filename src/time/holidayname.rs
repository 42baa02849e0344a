use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::weekdaybeforeholiday::WeekdayBeforeHoliday;

pub const HOLIDAY_COUNT: usize = 15;

/// The candidate holidays in canonical order.
///
/// The discriminant is the position used by every region's inclusion vector,
/// so variants must never be reordered on their own.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize)]
pub enum HolidayName {
    NewYearsDay = 0,
    Epiphany,
    GoodFriday,
    EasterMonday,
    LabourDay,
    AscensionDay,
    WhitMonday,
    CorpusChristi,
    AssumptionDay,
    GermanUnityDay,
    ReformationDay,
    AllSaintsDay,
    RepentanceDay,
    ChristmasDay,
    BoxingDay
}

static NEW_YEARS_DAY: FixedDateHoliday = FixedDateHoliday::new(1, 1);
static EPIPHANY: FixedDateHoliday = FixedDateHoliday::new(1, 6);
static GOOD_FRIDAY: EasterRelatedHoliday = EasterRelatedHoliday::new(-2);
static EASTER_MONDAY: EasterRelatedHoliday = EasterRelatedHoliday::new(1);
static LABOUR_DAY: FixedDateHoliday = FixedDateHoliday::new(5, 1);
static ASCENSION_DAY: EasterRelatedHoliday = EasterRelatedHoliday::new(39);
static WHIT_MONDAY: EasterRelatedHoliday = EasterRelatedHoliday::new(50);
static CORPUS_CHRISTI: EasterRelatedHoliday = EasterRelatedHoliday::new(60);
static ASSUMPTION_DAY: FixedDateHoliday = FixedDateHoliday::new(8, 15);
static GERMAN_UNITY_DAY: FixedDateHoliday = FixedDateHoliday::new(10, 3);
static REFORMATION_DAY: FixedDateHoliday = FixedDateHoliday::new(10, 31);
static ALL_SAINTS_DAY: FixedDateHoliday = FixedDateHoliday::new(11, 1);
static REPENTANCE_DAY: WeekdayBeforeHoliday = WeekdayBeforeHoliday::new(11, 23, Weekday::Wed);
static CHRISTMAS_DAY: FixedDateHoliday = FixedDateHoliday::new(12, 25);
static BOXING_DAY: FixedDateHoliday = FixedDateHoliday::new(12, 26);

impl HolidayName {
    pub const ALL: [HolidayName; HOLIDAY_COUNT] = [
        HolidayName::NewYearsDay,
        HolidayName::Epiphany,
        HolidayName::GoodFriday,
        HolidayName::EasterMonday,
        HolidayName::LabourDay,
        HolidayName::AscensionDay,
        HolidayName::WhitMonday,
        HolidayName::CorpusChristi,
        HolidayName::AssumptionDay,
        HolidayName::GermanUnityDay,
        HolidayName::ReformationDay,
        HolidayName::AllSaintsDay,
        HolidayName::RepentanceDay,
        HolidayName::ChristmasDay,
        HolidayName::BoxingDay
    ];

    /// Zero-based position in the canonical order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn rule(self) -> &'static dyn RecurringHoliday {
        match self {
            HolidayName::NewYearsDay    => &NEW_YEARS_DAY,
            HolidayName::Epiphany       => &EPIPHANY,
            HolidayName::GoodFriday     => &GOOD_FRIDAY,
            HolidayName::EasterMonday   => &EASTER_MONDAY,
            HolidayName::LabourDay      => &LABOUR_DAY,
            HolidayName::AscensionDay   => &ASCENSION_DAY,
            HolidayName::WhitMonday     => &WHIT_MONDAY,
            HolidayName::CorpusChristi  => &CORPUS_CHRISTI,
            HolidayName::AssumptionDay  => &ASSUMPTION_DAY,
            HolidayName::GermanUnityDay => &GERMAN_UNITY_DAY,
            HolidayName::ReformationDay => &REFORMATION_DAY,
            HolidayName::AllSaintsDay   => &ALL_SAINTS_DAY,
            HolidayName::RepentanceDay  => &REPENTANCE_DAY,
            HolidayName::ChristmasDay   => &CHRISTMAS_DAY,
            HolidayName::BoxingDay      => &BOXING_DAY
        }
    }

    /// Whether the date moves with Easter Sunday.
    pub fn is_movable(self) -> bool {
        matches!(
            self,
            HolidayName::GoodFriday
                | HolidayName::EasterMonday
                | HolidayName::AscensionDay
                | HolidayName::WhitMonday
                | HolidayName::CorpusChristi
        )
    }

    pub fn english_name(self) -> &'static str {
        match self {
            HolidayName::NewYearsDay    => "New Year's Day",
            HolidayName::Epiphany       => "Epiphany",
            HolidayName::GoodFriday     => "Good Friday",
            HolidayName::EasterMonday   => "Easter Monday",
            HolidayName::LabourDay      => "Labour Day",
            HolidayName::AscensionDay   => "Ascension Day",
            HolidayName::WhitMonday     => "Whit Monday",
            HolidayName::CorpusChristi  => "Corpus Christi",
            HolidayName::AssumptionDay  => "Assumption Day",
            HolidayName::GermanUnityDay => "German Unity Day",
            HolidayName::ReformationDay => "Reformation Day",
            HolidayName::AllSaintsDay   => "All Saints' Day",
            HolidayName::RepentanceDay  => "Repentance Day",
            HolidayName::ChristmasDay   => "Christmas Day",
            HolidayName::BoxingDay      => "Boxing Day"
        }
    }

    pub fn german_name(self) -> &'static str {
        match self {
            HolidayName::NewYearsDay    => "Neujahr",
            HolidayName::Epiphany       => "Heilige Drei Könige",
            HolidayName::GoodFriday     => "Karfreitag",
            HolidayName::EasterMonday   => "Ostermontag",
            HolidayName::LabourDay      => "Tag der Arbeit",
            HolidayName::AscensionDay   => "Christi Himmelfahrt",
            HolidayName::WhitMonday     => "Pfingstmontag",
            HolidayName::CorpusChristi  => "Fronleichnam",
            HolidayName::AssumptionDay  => "Mariä Himmelfahrt",
            HolidayName::GermanUnityDay => "Tag der Deutschen Einheit",
            HolidayName::ReformationDay => "Reformationstag",
            HolidayName::AllSaintsDay   => "Allerheiligen",
            HolidayName::RepentanceDay  => "Buß- und Bettag",
            HolidayName::ChristmasDay   => "1. Weihnachtstag",
            HolidayName::BoxingDay      => "2. Weihnachtstag"
        }
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.english_name())
    }
}

/// A candidate holiday resolved to a concrete date.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub struct HolidayDate {
    name: HolidayName,
    date: NaiveDate
}

impl HolidayDate {
    pub fn new(name: HolidayName, date: NaiveDate) -> HolidayDate {
        HolidayDate { name, date }
    }

    pub fn name(&self) -> HolidayName {
        self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
