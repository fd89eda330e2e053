use std::fmt;

use chrono::{Datelike, Timelike};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::consts::{
    ENV_LOG_DATE, ENV_LOG_PID, ENV_LOG_TIME, PREFIX_DATE_FORMAT, PREFIX_SEPARATOR,
    PREFIX_TIME_FORMAT,
};
use crate::format::format_date;

/// Which parts the console log prefix carries.
///
/// Built once (usually from the environment) and handed to every prefix call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixConfig {
    pub pid: bool,
    pub date: bool,
    pub time: bool,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            pid: true,
            date: true,
            time: true,
        }
    }
}

impl PrefixConfig {
    /// Reads `log_pid`, `log_date` and `log_time`.
    ///
    /// A part is enabled when its variable is unset or exactly `true`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).is_none_or(|value| value == "true");
        Self {
            pid: flag(ENV_LOG_PID),
            date: flag(ENV_LOG_DATE),
            time: flag(ENV_LOG_TIME),
        }
    }
}

/// A rendered log prefix, e.g. `4242 │ 03/05/2024 │ 02:05:09 PM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPrefix {
    styled: String,
    plain: String,
}

impl LogPrefix {
    /// Prefix without color codes
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Spaces as wide as the visible prefix
    pub fn indent(&self) -> String {
        " ".repeat(self.plain.chars().count())
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }
}

impl fmt::Display for LogPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.styled)
    }
}

/// Builds the prefix for a log line written at `now`.
pub fn log_prefix<T: Datelike + Timelike>(config: &PrefixConfig, now: &T) -> LogPrefix {
    let pid = std::process::id().to_string();
    let parts = [
        config.pid.then(|| (pid.green().to_string(), pid.clone())),
        config.date.then(|| {
            let date = format_date(now, PREFIX_DATE_FORMAT);
            (date.clone(), date)
        }),
        config.time.then(|| {
            let time = format_date(now, PREFIX_TIME_FORMAT);
            (time.clone(), time)
        }),
    ];
    let (styled, plain): (Vec<String>, Vec<String>) = parts.into_iter().flatten().unzip();

    LogPrefix {
        styled: styled.join(PREFIX_SEPARATOR.bright_black().to_string().as_str()),
        plain: plain.join(PREFIX_SEPARATOR),
    }
}
