//! Small standalone helpers.
//!
//! - [`format_date`]: a token-substitution date formatting mini-language,
//!   backed by the calendar getters ([`week_of_year`], [`day_of_year`], ...).
//! - [`split_date`]: an instant broken into padded date and time segments.
//! - [`Console`]: severity-colored output with a pid/date/time prefix.
//! - [`exists`], [`is_file`], [`is_directory`], [`read_file`]: file helpers,
//!   the last one with exit-on-error semantics.
//!
//! Instants are any `chrono` value implementing `Datelike + Timelike`.
//!
//! ```
//! use chrono::NaiveDate;
//! use toolbelt::format_date;
//!
//! let instant = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .and_then(|d| d.and_hms_opt(14, 5, 9))
//!     .ok_or("invalid date")?;
//! assert_eq!(format_date(&instant, "YYYY-MM-DD hh:mm:ss A"), "2024-03-05 02:05:09 PM");
//! # Ok::<(), &str>(())
//! ```

mod console;
mod consts;
mod format;
mod fs;
mod getters;
mod prefix;
mod prelude;
mod split;
mod types;

pub use console::{Console, Level, render_value};
pub use consts::*;
pub use format::{format_date, format_now};
pub use fs::{
    FsError, ReadFileOptions, ReadOutcome, exists, is_directory, is_file, read_file, try_read_file,
};
pub use getters::{
    CalendarError, Table, day_of_week, day_of_week_abbr, day_of_year, month_of_year,
    month_of_year_abbr, quarter_of_year, week_of_year,
};
pub use prefix::{LogPrefix, PrefixConfig, log_prefix};
pub use split::{CivilianTime, DateParts, PaddedDate, PaddedTime, split_date, split_now};
pub use types::{Meridiem, millisecond, twelve_hour};
