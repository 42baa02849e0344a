use std::io;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    #[error("no representable date follows or precedes {0}")]
    DateOverflow(NaiveDate),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("month {month} of year {year} does not exist")]
    InvalidMonth { year: i32, month: u32 },

    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HolidayError>;
