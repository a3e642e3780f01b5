//! Date format descriptors
//!
//! A [`DateFormat`] is written with readable tokens (`YYYY-MM-DD`,
//! `DD.MM.YYYY HH:mm`) and compiled once into chrono's strftime syntax. The
//! calendar itself (month lengths, leap years) is chrono's.
//!
//! | Token  | Meaning                       |
//! |--------|-------------------------------|
//! | `YYYY` | four-digit year               |
//! | `YY`   | two-digit year                |
//! | `MMMM` | full month name (`January`)   |
//! | `MMM`  | short month name (`Jan`)      |
//! | `MM`   | month, zero padded            |
//! | `M`    | month                         |
//! | `DD`   | day of month, zero padded     |
//! | `D`    | day of month                  |
//! | `HH`   | hour 00-23                    |
//! | `H`    | hour 0-23                     |
//! | `hh`   | hour 01-12                    |
//! | `h`    | hour 1-12                     |
//! | `mm`   | minute                        |
//! | `ss`   | second                        |
//! | `A`    | `AM` / `PM`                   |
//!
//! Text inside `[...]` is copied literally, as is every other character.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// The format used when none is given.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// What a format token contributes to a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Time,
}

const TOKENS: &[(&str, &str, Field)] = &[
    ("YYYY", "%Y", Field::Date),
    ("YY", "%y", Field::Date),
    ("MMMM", "%B", Field::Date),
    ("MMM", "%b", Field::Date),
    ("MM", "%m", Field::Date),
    ("M", "%-m", Field::Date),
    ("DD", "%d", Field::Date),
    ("D", "%-d", Field::Date),
    ("HH", "%H", Field::Time),
    ("H", "%-H", Field::Time),
    ("hh", "%I", Field::Time),
    ("h", "%-I", Field::Time),
    ("mm", "%M", Field::Time),
    ("ss", "%S", Field::Time),
    ("A", "%p", Field::Time),
];

/// A compiled date format.
///
/// # Example
///
/// ```rust
/// use formcheck::DateFormat;
///
/// let format = DateFormat::new("DD.MM.YYYY");
/// assert!(format.is_valid("17.01.2025"));
/// assert!(!format.is_valid("31.04.2025"));
/// assert!(!format.is_valid("2025-01-17"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct DateFormat {
    pattern: String,
    strftime: String,
    has_date: bool,
    has_time: bool,
}

impl DateFormat {
    /// Compile a format pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let Compiled {
            strftime,
            has_date,
            has_time,
        } = compile(&pattern);
        Self {
            pattern,
            strftime,
            has_date,
            has_time,
        }
    }

    /// The pattern as written.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse `value` under this format.
    ///
    /// The parser tolerates some slack (unpadded numbers, full month names
    /// where short ones are expected). Use [`DateFormat::is_valid`] when the
    /// value has to be written exactly in this format.
    ///
    /// Formats without date fields resolve on 1970-01-01, formats without
    /// time fields resolve at midnight. Every field the format names must be
    /// present and complete: a format with an hour but no minute, or a
    /// 12-hour clock without `A`, never parses.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let fmt = self.strftime.as_str();
        match (self.has_date, self.has_time) {
            (true, true) => NaiveDateTime::parse_from_str(value, fmt).ok(),
            (true, false) => NaiveDate::parse_from_str(value, fmt)
                .ok()?
                .and_hms_opt(0, 0, 0),
            (false, true) => {
                let time = NaiveTime::parse_from_str(value, fmt).ok()?;
                Some(NaiveDate::from_ymd_opt(1970, 1, 1)?.and_time(time))
            }
            (false, false) => None,
        }
    }

    /// Render a date in this format.
    pub fn format(&self, date: &NaiveDateTime) -> String {
        date.format(&self.strftime).to_string()
    }

    /// Whether `value` parses and renders back to exactly `value`.
    pub fn is_valid(&self, value: &str) -> bool {
        self.parse(value)
            .is_some_and(|date| self.format(&date) == value)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern
    }
}

struct Compiled {
    strftime: String,
    has_date: bool,
    has_time: bool,
}

fn compile(pattern: &str) -> Compiled {
    let mut out = Compiled {
        strftime: String::with_capacity(pattern.len() * 2),
        has_date: false,
        has_time: false,
    };
    let mut rest = pattern;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                push_literal(&mut out.strftime, &rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }

        for (token, directive, field) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.strftime.push_str(directive);
                match field {
                    Field::Date => out.has_date = true,
                    Field::Time => out.has_time = true,
                }
                rest = tail;
                continue 'outer;
            }
        }

        push_literal(&mut out.strftime, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile() {
        assert_eq!(compile("YYYY-MM-DD").strftime, "%Y-%m-%d");
        assert_eq!(compile("D.M.YY").strftime, "%-d.%-m.%y");
        assert_eq!(
            compile("YYYY-MM-DD[T]HH:mm:ss").strftime,
            "%Y-%m-%dT%H:%M:%S"
        );
        assert_eq!(compile("hh:mm A").strftime, "%I:%M %p");
        assert_eq!(compile("DD MMM YYYY").strftime, "%d %b %Y");
        assert_eq!(compile("100%").strftime, "100%%");
    }

    #[test]
    fn test_compile_records_fields() {
        let date = compile("YYYY-MM-DD");
        assert!(date.has_date && !date.has_time);
        let time = compile("HH:mm");
        assert!(!time.has_date && time.has_time);
        let both = compile("DD.MM.YYYY hh:mm A");
        assert!(both.has_date && both.has_time);
        // bracketed text is literal, not tokens
        let literal = compile("[YYYY]");
        assert!(!literal.has_date && !literal.has_time);
    }

    #[test]
    fn test_default_format() {
        let format = DateFormat::default();
        assert_eq!(format.pattern(), "YYYY-MM-DD");
        assert!(format.is_valid("2025-01-17"));
        assert!(!format.is_valid("17-01-2025"));
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        let format = DateFormat::default();
        assert!(!format.is_valid("2025-04-31"));
        assert!(!format.is_valid("2025-02-29"));
        assert!(format.is_valid("2024-02-29"));
        assert!(!format.is_valid("2025-13-01"));
    }

    #[test]
    fn test_rejects_non_canonical_width() {
        let format = DateFormat::default();
        assert!(format.parse("2025-1-7").is_some());
        assert!(!format.is_valid("2025-1-7"));
        assert!(DateFormat::new("YYYY-M-D").is_valid("2025-1-7"));
    }

    #[test]
    fn test_date_only_resolves_to_midnight() {
        let parsed = DateFormat::default().parse("2025-01-17").unwrap();
        assert_eq!(parsed.to_string(), "2025-01-17 00:00:00");
    }

    #[test]
    fn test_time_only_resolves_on_epoch_day() {
        let format = DateFormat::new("HH:mm");
        let parsed = format.parse("13:45").unwrap();
        assert_eq!(parsed.to_string(), "1970-01-01 13:45:00");
        assert!(format.is_valid("13:45"));
        assert!(!format.is_valid("24:00"));
    }

    #[test]
    fn test_date_time() {
        let format = DateFormat::new("YYYY-MM-DD[T]HH:mm:ss");
        assert!(format.is_valid("2025-01-17T08:30:00"));
        assert!(!format.is_valid("2025-01-17 08:30:00"));
    }

    #[test]
    fn test_twelve_hour_clock() {
        let format = DateFormat::new("hh:mm A");
        assert!(format.is_valid("09:15 PM"));
        let parsed = format.parse("09:15 PM").unwrap();
        assert_eq!(parsed.to_string(), "1970-01-01 21:15:00");
    }

    #[test]
    fn test_month_names() {
        let format = DateFormat::new("D MMMM YYYY");
        assert!(format.is_valid("17 January 2025"));
        assert!(!format.is_valid("17 Jan 2025"));
    }

    #[test]
    fn test_incomplete_format_never_parses() {
        assert!(DateFormat::new("YYYY-MM").parse("2025-01").is_none());
        assert!(DateFormat::new("[literal]").parse("literal").is_none());
    }

    #[test]
    fn test_hour_without_minute_never_parses() {
        let format = DateFormat::new("YYYY-MM-DD HH");
        assert!(format.parse("2025-01-17 08").is_none());
        assert!(format.parse("2025-01-17 20").is_none());
        assert!(!format.is_valid("2025-01-17 13"));
    }

    #[test]
    fn test_twelve_hour_clock_without_meridiem_never_parses() {
        let format = DateFormat::new("DD.MM.YYYY hh:mm");
        assert!(format.parse("17.01.2025 11:00").is_none());
        assert!(DateFormat::new("hh:mm").parse("09:00").is_none());
        // with the meridiem the same values are complete
        assert!(DateFormat::new("DD.MM.YYYY hh:mm A").is_valid("17.01.2025 11:00 AM"));
    }
}
