use chrono::{Datelike, Local, Timelike};
use serde::Serialize;

use crate::consts::HOURS_PER_HALF_DAY;
use crate::types::{Meridiem, millisecond};

/// Date components, each padded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddedDate {
    pub year: i32,
    /// 1-based, two digits
    pub month: String,
    pub date: String,
}

/// Time components on the 24-hour clock, each padded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddedTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Three digits
    pub milliseconds: String,
}

/// Time components on the 12-hour clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CivilianTime {
    /// `hour % 12`, two digits
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Unpadded
    pub milliseconds: u32,
    pub meridiem: Meridiem,
}

/// An instant broken into its scalar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateParts {
    pub full_year: i32,
    /// 0-11
    pub month_index: u32,
    /// Day of month, 1-31
    pub date: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl DateParts {
    /// `AM` or `PM` for [`Self::hours`]
    pub const fn meridiem(&self) -> Meridiem {
        Meridiem::of_hour(self.hours)
    }

    pub fn padded_date(&self) -> PaddedDate {
        PaddedDate {
            year: self.full_year,
            month: format!("{:02}", self.month_index + 1),
            date: format!("{:02}", self.date),
        }
    }

    pub fn padded_time(&self) -> PaddedTime {
        PaddedTime {
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
            milliseconds: format!("{:03}", self.milliseconds),
        }
    }

    /// Segments in 12-hour time. Noon and midnight read `00`.
    pub fn civilian_time(&self) -> CivilianTime {
        CivilianTime {
            hours: format!("{:02}", self.hours % HOURS_PER_HALF_DAY),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
            milliseconds: self.milliseconds,
            meridiem: self.meridiem(),
        }
    }
}

/// Splits `instant` into its components.
pub fn split_date<T: Datelike + Timelike>(instant: &T) -> DateParts {
    DateParts {
        full_year: instant.year(),
        month_index: instant.month0(),
        date: instant.day(),
        hours: instant.hour(),
        minutes: instant.minute(),
        seconds: instant.second(),
        milliseconds: millisecond(instant),
    }
}

/// Splits the current local time.
pub fn split_now() -> DateParts {
    split_date(&Local::now())
}
