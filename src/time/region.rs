use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::holidayerror::HolidayError;

pub const REGION_COUNT: usize = 16;

/// The sixteen German federal states.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub enum Region {
    BadenWuerttemberg = 0,
    Bayern,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    #[default]
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen
}

impl Region {
    pub const ALL: [Region; REGION_COUNT] = [
        Region::BadenWuerttemberg,
        Region::Bayern,
        Region::Berlin,
        Region::Brandenburg,
        Region::Bremen,
        Region::Hamburg,
        Region::Hessen,
        Region::MecklenburgVorpommern,
        Region::Niedersachsen,
        Region::NordrheinWestfalen,
        Region::RheinlandPfalz,
        Region::Saarland,
        Region::Sachsen,
        Region::SachsenAnhalt,
        Region::SchleswigHolstein,
        Region::Thueringen
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Official two-letter abbreviation.
    pub fn code(self) -> &'static str {
        match self {
            Region::BadenWuerttemberg     => "BW",
            Region::Bayern                => "BY",
            Region::Berlin                => "BE",
            Region::Brandenburg           => "BB",
            Region::Bremen                => "HB",
            Region::Hamburg               => "HH",
            Region::Hessen                => "HE",
            Region::MecklenburgVorpommern => "MV",
            Region::Niedersachsen         => "NI",
            Region::NordrheinWestfalen    => "NW",
            Region::RheinlandPfalz        => "RP",
            Region::Saarland              => "SL",
            Region::Sachsen               => "SN",
            Region::SachsenAnhalt         => "ST",
            Region::SchleswigHolstein     => "SH",
            Region::Thueringen            => "TH"
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::BadenWuerttemberg     => "Baden-Württemberg",
            Region::Bayern                => "Bayern",
            Region::Berlin                => "Berlin",
            Region::Brandenburg           => "Brandenburg",
            Region::Bremen                => "Bremen",
            Region::Hamburg               => "Hamburg",
            Region::Hessen                => "Hessen",
            Region::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Region::Niedersachsen         => "Niedersachsen",
            Region::NordrheinWestfalen    => "Nordrhein-Westfalen",
            Region::RheinlandPfalz        => "Rheinland-Pfalz",
            Region::Saarland              => "Saarland",
            Region::Sachsen               => "Sachsen",
            Region::SachsenAnhalt         => "Sachsen-Anhalt",
            Region::SchleswigHolstein     => "Schleswig-Holstein",
            Region::Thueringen            => "Thüringen"
        }
    }

    pub fn from_code(code: &str) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Accepts the two-letter code or the full name, ignoring case.
impl FromStr for Region {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Region::from_code(trimmed)
            .or_else(|| {
                Region::ALL
                    .into_iter()
                    .find(|region| region.name().to_lowercase() == trimmed.to_lowercase())
            })
            .ok_or_else(|| HolidayError::UnknownRegion(trimmed.to_owned()))
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
