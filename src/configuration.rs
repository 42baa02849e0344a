use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::holidayerror::Result;
use crate::time::calendar::regionalcalendar::RegionalCalendar;
use crate::time::holidayquery::HolidayQuery;
use crate::time::region::Region;

/// Region selection and calendar overrides, read from JSON.
///
/// ```json
/// { "region": "NW", "additional_holidays": ["2025-06-20"], "additional_working_days": [] }
/// ```
/// Every field is optional; the region defaults to Nordrhein-Westfalen.
#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    region: Region,
    additional_holidays: Vec<NaiveDate>,
    additional_working_days: Vec<NaiveDate>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn with_region(region: Region) -> Configuration {
        Configuration { region, ..Configuration::default() }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn additional_holidays(&self) -> &[NaiveDate] {
        &self.additional_holidays
    }

    pub fn additional_working_days(&self) -> &[NaiveDate] {
        &self.additional_working_days
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration> {
        let configuration: Configuration = serde_json::from_reader(reader)?;
        debug!(
            region = configuration.region.code(),
            additional_holidays = configuration.additional_holidays.len(),
            additional_working_days = configuration.additional_working_days.len(),
            "parsed configuration"
        );
        Ok(configuration)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Configuration> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let configuration = Configuration::from_reader(BufReader::new(file))?;
        info!(path = %file_path.display(), region = %configuration.region, "loaded configuration");
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration> {
        Configuration::from_reader(json.as_bytes())
    }

    pub fn calendar(&self) -> RegionalCalendar {
        RegionalCalendar::with_overrides(
            self.region,
            self.additional_holidays.clone(),
            self.additional_working_days.clone()
        )
    }

    pub fn query(&self, date: NaiveDate) -> HolidayQuery {
        HolidayQuery::with_region(date, self.region)
    }
}
