use crate::time::holidayname::{HolidayName, HOLIDAY_COUNT};
use crate::time::region::{Region, REGION_COUNT};

/// Which of the canonical holidays a region observes, by position.
pub type InclusionVector = [bool; HOLIDAY_COUNT];

const fn from_flags(flags: [u8; HOLIDAY_COUNT]) -> InclusionVector {
    let mut vector = [false; HOLIDAY_COUNT];
    let mut i = 0;
    while i < HOLIDAY_COUNT {
        vector[i] = flags[i] == 1;
        i += 1;
    }
    vector
}

// Columns: NewYear, Epiphany, GoodFriday, EasterMonday, Labour, Ascension,
// WhitMonday, CorpusChristi, Assumption, Unity, Reformation, AllSaints,
// Repentance, Christmas, BoxingDay
const COMMON: InclusionVector = from_flags([1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1]);
const NORDRHEIN_WESTFALEN: InclusionVector = from_flags([1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1]);

/// Rows follow `Region::ALL`. The table is reproduced literally and does not
/// track the current statutes of each state.
static REGION_MATRIX: [InclusionVector; REGION_COUNT] = [
    COMMON,              // Baden-Württemberg
    COMMON,              // Bayern
    COMMON,              // Berlin
    COMMON,              // Brandenburg
    COMMON,              // Bremen
    COMMON,              // Hamburg
    COMMON,              // Hessen
    COMMON,              // Mecklenburg-Vorpommern
    COMMON,              // Niedersachsen
    NORDRHEIN_WESTFALEN, // Nordrhein-Westfalen
    COMMON,              // Rheinland-Pfalz
    COMMON,              // Saarland
    COMMON,              // Sachsen
    COMMON,              // Sachsen-Anhalt
    COMMON,              // Schleswig-Holstein
    COMMON               // Thüringen
];

pub fn region_matrix(region: Region) -> &'static InclusionVector {
    &REGION_MATRIX[region.index()]
}

#[inline]
pub fn is_observed(region: Region, name: HolidayName) -> bool {
    region_matrix(region)[name.index()]
}
