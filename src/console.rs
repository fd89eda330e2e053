//! A console that colors messages by severity and prefixes them with the
//! process id and a timestamp.

use std::error::Error;
use std::io::{self, Write};

use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::consts::JSON_INDENT;
use crate::prefix::{LogPrefix, PrefixConfig, log_prefix};
use crate::prelude::*;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Level {
    #[display(fmt = "debug")]
    Debug,
    #[display(fmt = "info")]
    Info,
    #[display(fmt = "warn")]
    Warn,
    #[display(fmt = "error")]
    Error,
}

impl Level {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Debug => text.bright_black(),
            Self::Info => text.cyan(),
            Self::Warn => text.yellow(),
            Self::Error => text.red(),
        }
    }

    /// Warnings and errors go to stderr
    pub const fn is_stderr(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

/// Renders one console value. Strings pass through unquoted; other scalars
/// use their JSON text; arrays and objects are pretty-printed.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => pretty(value),
        scalar => scalar.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Console {
    config: PrefixConfig,
}

impl Console {
    pub const fn new(config: PrefixConfig) -> Self {
        Self { config }
    }

    /// Console whose prefix follows `log_pid`, `log_date` and `log_time`
    pub fn from_env() -> Self {
        Self::new(PrefixConfig::from_env())
    }

    pub const fn config(&self) -> &PrefixConfig {
        &self.config
    }

    pub fn debug(&self, values: &[Value]) {
        self.emit(Level::Debug, values);
    }

    pub fn info(&self, values: &[Value]) {
        self.emit(Level::Info, values);
    }

    pub fn warn(&self, values: &[Value]) {
        self.emit(Level::Warn, values);
    }

    pub fn error(&self, values: &[Value]) {
        self.emit(Level::Error, values);
    }

    /// Prints `err` followed by its chain of sources.
    pub fn error_report(&self, err: &dyn Error) {
        let prefix = log_prefix(&self.config, &Local::now());
        write_line(Level::Error, &render_report(&prefix, err));
    }

    /// Renders a message as it would be written, prefix included.
    ///
    /// Values are separated by a space; continuation lines of pretty-printed
    /// values are indented under the prefix.
    pub fn render(&self, level: Level, values: &[Value]) -> String {
        render_line(&log_prefix(&self.config, &Local::now()), level, values)
    }

    fn emit(&self, level: Level, values: &[Value]) {
        write_line(level, &self.render(level, values));
    }

    /// The line a `log` record turns into, or `None` above the max level.
    fn record_line(&self, record: &Record<'_>) -> Option<(Level, String)> {
        if !self.enabled(record.metadata()) {
            return None;
        }
        let level = Level::from(record.level());
        let message = Value::String(record.args().to_string());
        Some((level, self.render(level, &[message])))
    }

    /// Installs this console as the process-wide `log` backend.
    ///
    /// # Errors
    /// Returns `SetLoggerError` if a logger is already installed.
    pub fn install(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

fn render_line(prefix: &LogPrefix, level: Level, values: &[Value]) -> String {
    let body = values.iter().map(render_value).collect::<Vec<_>>().join(" ");
    let body = if prefix.is_empty() {
        body
    } else {
        body.replace('\n', &format!("\n{} ", prefix.indent()))
    };
    join_prefix(prefix, &level.paint(&body).to_string())
}

fn render_report(prefix: &LogPrefix, err: &dyn Error) -> String {
    let head = Level::Error.paint(&err.to_string()).to_string();
    let mut lines = vec![join_prefix(prefix, &head)];
    let indent = prefix.indent();
    let mut source = err.source();
    while let Some(cause) = source {
        let line = format!("caused by: {cause}");
        lines.push(if indent.is_empty() {
            Level::Error.paint(&line).to_string()
        } else {
            format!("{indent} {}", Level::Error.paint(&line))
        });
        source = cause.source();
    }
    lines.join("\n")
}

fn join_prefix(prefix: &LogPrefix, body: &str) -> String {
    if prefix.is_empty() {
        body.to_owned()
    } else {
        format!("{prefix} {body}")
    }
}

fn write_line(level: Level, line: &str) {
    // A closed stream is not worth failing the caller over
    let _ = if level.is_stderr() {
        writeln!(io::stderr().lock(), "{line}")
    } else {
        writeln!(io::stdout().lock(), "{line}")
    };
}

impl Log for Console {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if let Some((level, line)) = self.record_line(record) {
            write_line(level, &line);
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn quiet() -> PrefixConfig {
        PrefixConfig {
            pid: false,
            date: false,
            time: false,
        }
    }

    fn time_only() -> LogPrefix {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let config = PrefixConfig {
            time: true,
            ..quiet()
        };
        log_prefix(&config, &now)
    }

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("inner failure")]
    struct Inner;

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_value(&json!("plain text")), "plain text");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn test_render_structured() {
        let rendered = render_value(&json!({ "name": "toolbelt", "tags": [1] }));
        assert_eq!(rendered, "{\n   \"name\": \"toolbelt\",\n   \"tags\": [\n      1\n   ]\n}");
    }

    #[test]
    fn test_render_line_contains_values() {
        let line = Console::new(quiet()).render(Level::Info, &[json!("hello"), json!(7)]);
        assert!(line.contains("hello 7"), "unexpected line: {line}");
    }

    #[test]
    fn test_render_line_indents_continuation() {
        let prefix = time_only();
        let line = render_line(&prefix, Level::Warn, &[json!({ "a": 1 })]);
        assert!(line.contains("02:05:09 PM"));
        assert!(line.contains(&format!("\n{}    \"a\": 1", prefix.indent())));
    }

    #[test]
    fn test_render_report_walks_sources() {
        let report = render_report(&time_only(), &Outer(Inner));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("outer failure"));
        assert!(lines[1].contains("caused by: inner failure"));
        assert!(lines[1].starts_with("           "));
    }

    #[test]
    fn test_level_routing() {
        assert!(!Level::Debug.is_stderr());
        assert!(!Level::Info.is_stderr());
        assert!(Level::Warn.is_stderr());
        assert!(Level::Error.is_stderr());
        assert_eq!(Level::Warn.to_string(), "warn");
    }

    #[test]
    fn test_level_from_log() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
    }

    #[test]
    fn test_log_backend() {
        let console = Console::new(PrefixConfig {
            pid: true,
            ..quiet()
        });
        console.install(LevelFilter::Warn).unwrap();
        assert!(console.install(LevelFilter::Warn).is_err());

        let warn = Metadata::builder().level(log::Level::Warn).build();
        let info = Metadata::builder().level(log::Level::Info).build();
        assert!(console.enabled(&warn));
        assert!(!console.enabled(&info));

        let (level, line) = console
            .record_line(
                &Record::builder()
                    .args(format_args!("disk almost full"))
                    .level(log::Level::Warn)
                    .build(),
            )
            .unwrap();
        assert_eq!(level, Level::Warn);
        assert!(line.contains(&std::process::id().to_string()));
        assert!(line.ends_with(&Level::Warn.paint("disk almost full").to_string()));

        let dropped = console.record_line(
            &Record::builder()
                .args(format_args!("routine"))
                .level(log::Level::Info)
                .build(),
        );
        assert_eq!(dropped, None);

        log::warn!("written through the installed console");
    }

    #[test]
    fn test_console_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Console>();
    }
}
