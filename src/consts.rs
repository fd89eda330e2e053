/// Full weekday names, indexed from Sunday (0) to Saturday (6)
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Three-letter weekday abbreviations, indexed like [`DAYS_OF_WEEK`]
pub const DAYS_OF_WEEK_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full month names, indexed from January (0) to December (11)
pub const MONTHS_OF_YEAR: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month abbreviations, indexed like [`MONTHS_OF_YEAR`]
pub const MONTHS_OF_YEAR_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Months per quarter
pub(crate) const MONTHS_PER_QUARTER: u32 = 3;
/// Days per week
pub(crate) const DAYS_PER_WEEK: i64 = 7;
/// Offset from an ISO Monday to the Thursday of the same week
pub(crate) const MONDAY_TO_THURSDAY: i64 = 3;
/// Day of January that always falls in ISO week 1
pub(crate) const ISO_WEEK_ONE_ANCHOR: u32 = 4;
/// Hours on a 12-hour clock face
pub(crate) const HOURS_PER_HALF_DAY: u32 = 12;

/// Environment variable toggling the pid part of the log prefix
pub const ENV_LOG_PID: &str = "log_pid";
/// Environment variable toggling the date part of the log prefix
pub const ENV_LOG_DATE: &str = "log_date";
/// Environment variable toggling the time part of the log prefix
pub const ENV_LOG_TIME: &str = "log_time";

/// Template used for the date part of the log prefix
pub const PREFIX_DATE_FORMAT: &str = "MM/DD/YYYY";
/// Template used for the time part of the log prefix
pub const PREFIX_TIME_FORMAT: &str = "hh:mm:ss A";
/// Separator placed between log prefix parts
pub const PREFIX_SEPARATOR: &str = " │ ";

/// Indent used when pretty-printing structured console values
pub(crate) const JSON_INDENT: &[u8] = b"   ";
