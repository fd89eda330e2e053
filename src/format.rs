use chrono::{Datelike, Local, Timelike};

use crate::getters::{day_of_week, day_of_week_abbr, month_of_year, month_of_year_abbr};
use crate::types::{Fields, twelve_hour};

/// One entry of the token table.
#[derive(Clone, Copy)]
struct Token {
    pattern: &'static str,
    /// Replace every occurrence instead of only the first
    replace_all: bool,
    render: fn(&Fields) -> String,
}

impl Token {
    const fn all(pattern: &'static str, render: fn(&Fields) -> String) -> Self {
        Self {
            pattern,
            replace_all: true,
            render,
        }
    }

    const fn first(pattern: &'static str, render: fn(&Fields) -> String) -> Self {
        Self {
            pattern,
            replace_all: false,
            render,
        }
    }
}

/// Tokens in substitution order. Longer patterns precede their prefixes.
///
/// `S` and `H` each appear twice in a row. The second entry rewrites the slot
/// filled by the first, so tenths of a second and the 24-hour hour are
/// computed but only quarter of year and day of year reach the output.
/// A second literal `S` or `H` in the template is left untouched.
/// Kept as-is until it is settled whether that reuse is intended.
static TOKENS: [Token; 27] = [
    Token::all("a", |f| f.meridiem().lowercase().to_owned()),
    Token::all("A", |f| f.meridiem().uppercase().to_owned()),
    Token::all("ss", |f| format!("{:02}", f.second)),
    Token::all("s", |f| f.second.to_string()),
    Token::all("mm", |f| format!("{:02}", f.minute)),
    Token::all("m", |f| f.minute.to_string()),
    Token::all("hh", |f| format!("{:02}", twelve_hour(f.hour))),
    Token::all("h", |f| twelve_hour(f.hour).to_string()),
    Token::first("dddd", |f| day_of_week(f.weekday as usize).unwrap_or_default().to_owned()),
    Token::first("ddd", |f| day_of_week_abbr(f.weekday as usize).unwrap_or_default().to_owned()),
    Token::first("YYYY", |f| format!("{:04}", f.year)),
    Token::first("YY", |f| format!("{:02}", f.year.rem_euclid(100))),
    Token::first("W", |f| f.week.to_string()),
    Token::first("SSS", |f| f.millisecond.to_string()),
    Token::first("SS", |f| (f.millisecond / 10 % 10).to_string()),
    Token::first("S", |f| (f.millisecond / 100).to_string()),
    Token::first("S", |f| f.quarter.to_string()),
    Token::first("MMMM", |f| month_of_year(f.month0 as usize).unwrap_or_default().to_owned()),
    Token::first("MMM", |f| month_of_year_abbr(f.month0 as usize).unwrap_or_default().to_owned()),
    Token::first("MM", |f| format!("{:02}", f.month0 + 1)),
    Token::first("M", |f| (f.month0 + 1).to_string()),
    Token::first("HH", |f| format!("{:02}", f.hour)),
    Token::first("H", |f| f.hour.to_string()),
    Token::first("H", |f| format!("{:03}", f.day_of_year)),
    Token::first("DDD", |f| f.day_of_year.to_string()),
    Token::first("DD", |f| format!("{:02}", f.day)),
    Token::first("D", |f| f.day.to_string()),
];

/// A run of template text. Only literal runs are searched for tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Filled { pass: usize, text: String },
}

impl Segment {
    fn into_text(self) -> String {
        match self {
            Self::Literal(text) | Self::Filled { text, .. } => text,
        }
    }
}

/// Formats `instant` according to `template`.
///
/// ### Tokens
///
/// | Token | Output |
/// |---|---|
/// | `a` / `A` | `am`/`pm`, `AM`/`PM` |
/// | `ss` / `s` | seconds, padded / unpadded |
/// | `mm` / `m` | minutes, padded / unpadded |
/// | `hh` / `h` | 12-hour hour, padded / unpadded |
/// | `dddd` / `ddd` | weekday name / abbreviation |
/// | `YYYY` / `YY` | four-digit year / last two digits |
/// | `W` | ISO week of year |
/// | `SSS` | milliseconds |
/// | `SS` | hundredths of a second |
/// | `S` | quarter of year |
/// | `MMMM` / `MMM` | month name / abbreviation |
/// | `MM` / `M` | month number, padded / unpadded |
/// | `HH` | 24-hour hour, padded |
/// | `H` | day of year, three digits |
/// | `DDD` | day of year |
/// | `DD` / `D` | day of month, padded / unpadded |
///
/// Tokens up to `h` replace every occurrence; the rest replace only the first.
/// Text produced by a token is never matched again, and anything that is not
/// a token (including the unimplemented `Z`, `ZZ` and `z`) is copied through.
pub fn format_date<T: Datelike + Timelike>(instant: &T, template: &str) -> String {
    let fields = Fields::of(instant);
    let mut segments = vec![Segment::Literal(template.to_owned())];
    let mut previous: Option<&Token> = None;

    for (pass, token) in TOKENS.iter().enumerate() {
        let value = (token.render)(&fields);
        segments = if previous.is_some_and(|p| p.pattern == token.pattern) {
            overwrite(segments, pass, &value)
        } else {
            substitute(segments, pass, token, &value)
        };
        previous = Some(token);
    }

    segments.into_iter().map(Segment::into_text).collect()
}

/// Formats the current local time according to `template`.
pub fn format_now(template: &str) -> String {
    format_date(&Local::now(), template)
}

/// Replaces the first (or every) occurrence of the token inside literal runs.
fn substitute(segments: Vec<Segment>, pass: usize, token: &Token, value: &str) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len() + 2);
    let mut done = false;

    for segment in segments {
        let text = match segment {
            Segment::Literal(text) if !done => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut rest = text.as_str();
        while let Some(pos) = rest.find(token.pattern) {
            if pos > 0 {
                out.push(Segment::Literal(rest[..pos].to_owned()));
            }
            out.push(Segment::Filled {
                pass,
                text: value.to_owned(),
            });
            rest = &rest[pos + token.pattern.len()..];
            if !token.replace_all {
                done = true;
                break;
            }
        }
        if !rest.is_empty() {
            out.push(Segment::Literal(rest.to_owned()));
        }
    }

    out
}

/// Rewrites the slots filled by the pass right before `pass`.
fn overwrite(segments: Vec<Segment>, pass: usize, value: &str) -> Vec<Segment> {
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Filled { pass: filled, .. } if filled + 1 == pass => Segment::Filled {
                pass,
                text: value.to_owned(),
            },
            other => other,
        })
        .collect()
}
