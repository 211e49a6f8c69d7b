use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

/// Date-only layouts accepted by `isDate`.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// Date and time layouts accepted by `isDate`.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a date in any of the accepted layouts.
///
/// Only strings naming a real calendar day succeed, `2024-02-30` does not.
/// A time part must be a real time of day too, so `10:00:60` is rejected.
pub fn parse_date(str_date: &str) -> Option<NaiveDate> {
    let s = str_date.trim();
    if s.is_empty() {
        return None;
    }
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
        .or_else(|| {
            DATETIME_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
                .filter(|dt| dt.nanosecond() < 1_000_000_000)
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .or_else(|_| DateTime::parse_from_rfc2822(s))
                .ok()
                .filter(|dt| dt.nanosecond() < 1_000_000_000)
                .map(|dt| dt.date_naive())
        })
}

/// A `date()`-style format (`Y-m-d H:i:s`) translated to chrono's syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoFormat {
    pub pattern: String,
    pub has_date: bool,
    pub has_time: bool,
    pub has_zone: bool,
}

impl ChronoFormat {
    /// Translates format letters one by one. A backslash escapes the next
    /// character. Returns `None` on a letter with no chrono counterpart.
    pub fn translate(format: &str) -> Option<Self> {
        let mut pattern = String::with_capacity(format.len() * 2);
        let (mut has_date, mut has_time, mut has_zone) = (false, false, false);
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            let (spec, kind) = match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        push_literal(&mut pattern, escaped);
                    }
                    continue;
                }
                'd' => ("%d", Kind::Date),
                'j' => ("%-d", Kind::Date),
                'D' => ("%a", Kind::Date),
                'l' => ("%A", Kind::Date),
                'N' => ("%u", Kind::Date),
                'w' => ("%w", Kind::Date),
                'm' => ("%m", Kind::Date),
                'n' => ("%-m", Kind::Date),
                'M' => ("%b", Kind::Date),
                'F' => ("%B", Kind::Date),
                'y' => ("%y", Kind::Date),
                'Y' => ("%Y", Kind::Date),
                'H' => ("%H", Kind::Time),
                'G' => ("%-H", Kind::Time),
                'h' => ("%I", Kind::Time),
                'g' => ("%-I", Kind::Time),
                'i' => ("%M", Kind::Time),
                's' => ("%S", Kind::Time),
                'A' => ("%p", Kind::Time),
                'a' => ("%P", Kind::Time),
                'u' => ("%6f", Kind::Time),
                'v' => ("%3f", Kind::Time),
                'U' => ("%s", Kind::Timestamp),
                'P' => ("%:z", Kind::Zone),
                'O' => ("%z", Kind::Zone),
                c if c.is_ascii_alphabetic() => return None,
                c => {
                    push_literal(&mut pattern, c);
                    continue;
                }
            };
            pattern.push_str(spec);
            match kind {
                Kind::Date => has_date = true,
                Kind::Time => has_time = true,
                Kind::Timestamp => {
                    has_date = true;
                    has_time = true;
                }
                Kind::Zone => has_zone = true,
            }
        }

        Some(Self {
            pattern,
            has_date,
            has_time,
            has_zone,
        })
    }
}

enum Kind {
    Date,
    Time,
    Timestamp,
    Zone,
}

fn push_literal(pattern: &mut String, c: char) {
    if c == '%' {
        pattern.push_str("%%");
    } else {
        pattern.push(c);
    }
}
