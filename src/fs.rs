//! File helpers: existence checks, file-kind checks and read-and-parse with
//! exit-on-error semantics.

use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::console::Console;

/// Error type for file operations.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Neither the joined nor the absolute path exists.
    #[error("File does not exist at {}.", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read file at {}.", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not valid JSON for the requested type.
    #[error("Failed to parse file read from {}.", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Joins `segments` and returns the first of the joined path and its
/// absolute form that exists.
///
/// # Errors
/// Returns `FsError::NotFound` carrying the absolute path if neither exists.
pub fn exists<P: AsRef<Path>>(segments: &[P]) -> Result<PathBuf, FsError> {
    let joined: PathBuf = segments.iter().collect();
    if joined.exists() {
        return Ok(joined);
    }

    let resolved = std::path::absolute(&joined).unwrap_or_else(|_| joined.clone());
    log::trace!("{} not found, trying {}", joined.display(), resolved.display());
    if resolved.exists() {
        return Ok(resolved);
    }

    Err(FsError::NotFound(resolved))
}

/// Whether the joined path is a regular file. Any stat error means `false`.
pub fn is_file<P: AsRef<Path>>(segments: &[P]) -> bool {
    let path: PathBuf = segments.iter().collect();
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Whether the joined path is a directory. Any stat error means `false`.
pub fn is_directory<P: AsRef<Path>>(segments: &[P]) -> bool {
    let path: PathBuf = segments.iter().collect();
    std::fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// What [`read_file`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    /// JSON-decoded content
    Parsed(T),
    /// Raw content, when parsing is turned off
    Raw(String),
    /// The read failed and the process was told not to exit
    Absent,
}

impl<T> ReadOutcome<T> {
    pub fn parsed(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) | Self::Absent => None,
        }
    }

    pub fn raw(self) -> Option<String> {
        match self {
            Self::Raw(content) => Some(content),
            Self::Parsed(_) | Self::Absent => None,
        }
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Options for [`read_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFileOptions {
    /// JSON-decode the content (default `true`)
    pub parse: bool,
    /// Also print the underlying error chain on failure (default `false`)
    pub verbose: bool,
    /// Exit the process on failure instead of returning `Absent` (default `true`)
    pub exit_on_err: bool,
    /// Replaces the default not-found message
    pub exists_msg: Option<String>,
    /// Replaces the default read-failure message
    pub read_msg: Option<String>,
    /// Replaces the default parse-failure message
    pub parse_msg: Option<String>,
    /// Where diagnostics are written (default: prefix configured from the
    /// environment, see [`Console::from_env`])
    pub console: Console,
}

impl Default for ReadFileOptions {
    fn default() -> Self {
        Self {
            parse: true,
            verbose: false,
            exit_on_err: true,
            exists_msg: None,
            read_msg: None,
            parse_msg: None,
            console: Console::from_env(),
        }
    }
}

impl ReadFileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn parse(mut self, parse: bool) -> Self {
        self.parse = parse;
        self
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn exit_on_err(mut self, exit_on_err: bool) -> Self {
        self.exit_on_err = exit_on_err;
        self
    }

    #[must_use]
    pub fn exists_msg(mut self, msg: impl Into<String>) -> Self {
        self.exists_msg = Some(msg.into());
        self
    }

    #[must_use]
    pub fn read_msg(mut self, msg: impl Into<String>) -> Self {
        self.read_msg = Some(msg.into());
        self
    }

    #[must_use]
    pub fn parse_msg(mut self, msg: impl Into<String>) -> Self {
        self.parse_msg = Some(msg.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// The message printed for `err`: the matching override, else the error text.
    pub fn message_for(&self, err: &FsError) -> String {
        let custom = match err {
            FsError::NotFound(_) => &self.exists_msg,
            FsError::ReadFailure { .. } => &self.read_msg,
            FsError::ParseFailure { .. } => &self.parse_msg,
        };
        custom.clone().unwrap_or_else(|| err.to_string())
    }
}

/// Reads the file at `path`, JSON-decoding it unless `parse` is off.
///
/// # Errors
/// Returns the `FsError` of the first stage that failed.
pub fn try_read_file<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    parse: bool,
) -> Result<ReadOutcome<T>, FsError> {
    let path = exists(&[path.as_ref()])?;
    log::debug!("reading {}", path.display());

    let content = std::fs::read_to_string(&path).map_err(|source| FsError::ReadFailure {
        path: path.clone(),
        source,
    })?;
    if !parse {
        return Ok(ReadOutcome::Raw(content));
    }

    serde_json::from_str(&content)
        .map(ReadOutcome::Parsed)
        .map_err(|source| FsError::ParseFailure { path, source })
}

/// Reads the file at `path` as configured by `options`.
///
/// On failure the message is printed through the options' console (plus the
/// error chain when `verbose`), then the process exits with status 1 if
/// `exit_on_err` is set; otherwise [`ReadOutcome::Absent`] is returned.
pub fn read_file<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    options: &ReadFileOptions,
) -> ReadOutcome<T> {
    match try_read_file(path, options.parse) {
        Ok(outcome) => outcome,
        Err(err) => {
            options
                .console
                .error(&[Value::String(options.message_for(&err))]);
            if options.verbose {
                options.console.error_report(&err);
            }
            if options.exit_on_err {
                std::process::exit(1);
            }
            ReadOutcome::Absent
        }
    }
}
