pub mod configuration;

pub mod holidayerror;

pub mod time {
    pub mod utility;
    pub mod region;
    pub mod holidayname;
    pub mod holidayquery;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod weekdaybeforeholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod regionmatrix;
        pub mod regionalcalendar;
        pub mod jointcalendar;
    }
}

pub use holidayerror::{HolidayError, Result};
pub use time::calendar::regionalcalendar::candidate_holidays;
pub use time::calendar::regionmatrix::region_matrix;
pub use time::holidayquery::{is_holiday, is_weekend, is_working_day, next_working_day, HolidayQuery};
pub use time::holidayname::{HolidayDate, HolidayName};
pub use time::recurringholiday::easterrelatedholiday::easter_sunday;
pub use time::region::Region;
