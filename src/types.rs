use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::consts::HOURS_PER_HALF_DAY;
use crate::getters::{day_of_year, quarter_of_year, week_of_year};
use crate::prelude::*;

/// Nanoseconds per millisecond
const NANOS_PER_MILLI: u32 = 1_000_000;
/// Largest millisecond value; leap seconds are folded into it
const MAX_MILLI: u32 = 999;

/// Half of the day an hour falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridiem {
    /// Meridiem for a 24-hour clock hour (0-23)
    pub const fn of_hour(hour: u32) -> Self {
        if hour < HOURS_PER_HALF_DAY {
            Self::Am
        } else {
            Self::Pm
        }
    }

    /// `"AM"` or `"PM"`
    pub const fn uppercase(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }

    /// `"am"` or `"pm"`
    pub const fn lowercase(self) -> &'static str {
        match self {
            Self::Am => "am",
            Self::Pm => "pm",
        }
    }
}

/// Converts a 24-hour clock hour to the 12-hour clock (1-12).
pub const fn twelve_hour(hour: u32) -> u32 {
    match hour % HOURS_PER_HALF_DAY {
        0 => HOURS_PER_HALF_DAY,
        h => h,
    }
}

/// Milliseconds of an instant (0-999).
pub fn millisecond<T: Timelike>(instant: &T) -> u32 {
    (instant.nanosecond() / NANOS_PER_MILLI).min(MAX_MILLI)
}

/// Snapshot of every calendar scalar an instant exposes.
///
/// Read once so formatting never goes back to the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year: i32,
    /// 0-11
    pub month0: u32,
    /// 1-31
    pub day: u32,
    /// 0 = Sunday
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub week: u32,
    pub quarter: u32,
    pub day_of_year: u32,
}

impl Fields {
    pub(crate) fn of<T: Datelike + Timelike>(instant: &T) -> Self {
        Self {
            year: instant.year(),
            month0: instant.month0(),
            day: instant.day(),
            weekday: instant.weekday().num_days_from_sunday(),
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
            millisecond: millisecond(instant),
            week: week_of_year(instant),
            quarter: quarter_of_year(instant),
            day_of_year: day_of_year(instant),
        }
    }

    pub(crate) const fn meridiem(&self) -> Meridiem {
        Meridiem::of_hour(self.hour)
    }
}
