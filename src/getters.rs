use chrono::Datelike;

use crate::consts::{
    DAYS_OF_WEEK, DAYS_OF_WEEK_ABBR, DAYS_PER_WEEK, ISO_WEEK_ONE_ANCHOR, MONDAY_TO_THURSDAY,
    MONTHS_OF_YEAR, MONTHS_OF_YEAR_ABBR, MONTHS_PER_QUARTER,
};
use crate::prelude::*;

/// Names the calendar table an index was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Table {
    #[display(fmt = "day of week")]
    DayOfWeek,
    #[display(fmt = "month of year")]
    MonthOfYear,
}

/// Error type for calendar table lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The index does not name an entry of the table.
    #[error("Invalid {table} index: {index} (must be 0-{max})")]
    OutOfRange { table: Table, index: usize, max: usize },
}

fn lookup(
    table: Table,
    names: &'static [&'static str],
    index: usize,
) -> Result<&'static str, CalendarError> {
    names.get(index).copied().ok_or(CalendarError::OutOfRange {
        table,
        index,
        max: names.len() - 1,
    })
}

/// Returns the full weekday name for a zero-based index (0 = Sunday).
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `index` > 6.
pub fn day_of_week(index: usize) -> Result<&'static str, CalendarError> {
    lookup(Table::DayOfWeek, &DAYS_OF_WEEK, index)
}

/// Returns the three-letter weekday abbreviation for a zero-based index (0 = Sunday).
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `index` > 6.
pub fn day_of_week_abbr(index: usize) -> Result<&'static str, CalendarError> {
    lookup(Table::DayOfWeek, &DAYS_OF_WEEK_ABBR, index)
}

/// Returns the full month name for a zero-based index (0 = January).
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `index` > 11.
pub fn month_of_year(index: usize) -> Result<&'static str, CalendarError> {
    lookup(Table::MonthOfYear, &MONTHS_OF_YEAR, index)
}

/// Returns the three-letter month abbreviation for a zero-based index (0 = January).
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `index` > 11.
pub fn month_of_year_abbr(index: usize) -> Result<&'static str, CalendarError> {
    lookup(Table::MonthOfYear, &MONTHS_OF_YEAR_ABBR, index)
}

/// ISO-8601 week number (1-53).
///
/// The date is shifted to the Thursday of its ISO week, and the week count is
/// taken from the first Thursday of that Thursday's year.
pub fn week_of_year<D: Datelike>(date: &D) -> u32 {
    let days = i64::from(date.num_days_from_ce());
    let thursday = iso_thursday(days);

    let year = date.year();
    let year = if thursday < jan1(year) {
        year - 1
    } else if thursday >= jan1(year + 1) {
        year + 1
    } else {
        year
    };

    let first_thursday = iso_thursday(jan1(year) + i64::from(ISO_WEEK_ONE_ANCHOR - 1));
    let week = 1 + (thursday - first_thursday).div_euclid(DAYS_PER_WEEK);
    // 1..=53 by construction
    u32::try_from(week).unwrap_or(1)
}

/// Quarter of the year (1-4).
pub fn quarter_of_year<D: Datelike>(date: &D) -> u32 {
    date.month0() / MONTHS_PER_QUARTER + 1
}

/// Day of the year (1-366), January 1st being day 1.
///
/// Counted on calendar dates rather than elapsed time, so a daylight saving
/// transition between January 1st and the date never shifts the result.
pub fn day_of_year<D: Datelike>(date: &D) -> u32 {
    date.ordinal()
}

/// Days from the common era (chrono numbering, 0001-01-01 = 1) of the
/// Thursday in the ISO week containing `days`.
const fn iso_thursday(days: i64) -> i64 {
    // 0001-01-01 was a Monday
    let from_monday = (days - 1).rem_euclid(DAYS_PER_WEEK);
    days - from_monday + MONDAY_TO_THURSDAY
}

/// Days from the common era of January 1st of `year`.
const fn jan1(year: i32) -> i64 {
    let y = year as i64 - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_weekday_names_agree() {
        let expected = [
            ("Sunday", "Sun"),
            ("Monday", "Mon"),
            ("Tuesday", "Tue"),
            ("Wednesday", "Wed"),
            ("Thursday", "Thu"),
            ("Friday", "Fri"),
            ("Saturday", "Sat"),
        ];
        for (i, (full, abbr)) in expected.iter().enumerate() {
            assert_eq!(day_of_week(i).unwrap(), *full);
            assert_eq!(day_of_week_abbr(i).unwrap(), *abbr);
            assert!(full.starts_with(abbr), "{full} should start with {abbr}");
        }
    }

    #[test]
    fn test_month_names_agree() {
        assert_eq!(month_of_year(0).unwrap(), "January");
        assert_eq!(month_of_year_abbr(0).unwrap(), "Jan");
        assert_eq!(month_of_year(11).unwrap(), "December");
        assert_eq!(month_of_year_abbr(11).unwrap(), "Dec");
        for i in 0..12 {
            let full = month_of_year(i).unwrap();
            let abbr = month_of_year_abbr(i).unwrap();
            assert!(full.starts_with(abbr), "{full} should start with {abbr}");
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(
            day_of_week(7),
            Err(CalendarError::OutOfRange {
                table: Table::DayOfWeek,
                index: 7,
                max: 6
            })
        );
        assert!(day_of_week_abbr(100).is_err());
        assert!(month_of_year(12).is_err());
        let err = month_of_year_abbr(12).unwrap_err();
        assert_eq!(err.to_string(), "Invalid month of year index: 12 (must be 0-11)");
    }

    #[test]
    fn test_week_of_year_new_year_boundary() {
        // Sunday, belongs to the last ISO week of 2022
        assert_eq!(week_of_year(&date(2023, 1, 1)), 52);
        // Monday
        assert_eq!(week_of_year(&date(2023, 1, 2)), 1);
        // Monday 2024-12-30 is already in week 1 of 2025
        assert_eq!(week_of_year(&date(2024, 12, 30)), 1);
        // 2020 has 53 ISO weeks
        assert_eq!(week_of_year(&date(2020, 12, 31)), 53);
        assert_eq!(week_of_year(&date(2021, 1, 3)), 53);
    }

    #[test]
    fn test_week_of_year_matches_chrono() {
        let mut day = date(1999, 12, 1);
        let end = date(2031, 2, 1);
        while day < end {
            assert_eq!(
                week_of_year(&day),
                day.iso_week().week(),
                "ISO week mismatch for {day}"
            );
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_quarter_of_year() {
        for month in 1..=3 {
            assert_eq!(quarter_of_year(&date(2024, month, 15)), 1);
        }
        for month in 4..=6 {
            assert_eq!(quarter_of_year(&date(2024, month, 15)), 2);
        }
        for month in 7..=9 {
            assert_eq!(quarter_of_year(&date(2024, month, 15)), 3);
        }
        for month in 10..=12 {
            assert_eq!(quarter_of_year(&date(2024, month, 15)), 4);
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(&date(2023, 1, 1)), 1);
        assert_eq!(day_of_year(&date(2024, 1, 1)), 1);
        assert_eq!(day_of_year(&date(2023, 12, 31)), 365);
        assert_eq!(day_of_year(&date(2024, 12, 31)), 366);
        assert_eq!(day_of_year(&date(2024, 3, 1)), 61);
    }

    #[test]
    fn test_day_of_year_ignores_time_of_day() {
        let late = date(2024, 3, 31).and_hms_opt(23, 59, 59).unwrap();
        let early = date(2024, 3, 31).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(day_of_year(&late), day_of_year(&early));
    }

    #[test]
    fn test_jan1_matches_chrono() {
        for year in [1, 4, 100, 400, 1900, 2000, 2023, 2024] {
            assert_eq!(
                jan1(year),
                i64::from(date(year, 1, 1).num_days_from_ce()),
                "January 1st of {year}"
            );
        }
    }
}
