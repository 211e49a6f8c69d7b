use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::Value;
use tracing::warn;

use crate::{
    rules::Predicate,
    utils::{
        coercion::scalar_text,
        date_parser::{parse_date, ChronoFormat},
    },
};

/// Format used by `datetime` when the clause has no argument.
pub const DEFAULT_DATETIME_FORMAT: &str = "Y-m-d H:i:s";

/// A calendar date in one of the accepted layouts.
pub struct IsDate;

impl Predicate for IsDate {
    fn name(&self) -> &'static str {
        "isDate"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        scalar_text(value).is_some_and(|text| parse_date(&text).is_some())
    }
}

/// Exact match against a `date()`-style format.
///
/// The value is parsed with the format and formatted back; the clause
/// passes only when the round trip reproduces the original text, which
/// rejects both impossible dates and unpadded fields.
pub struct IsDatetime;

impl Predicate for IsDatetime {
    fn name(&self) -> &'static str {
        "isDatetime"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        let format = argument.unwrap_or(DEFAULT_DATETIME_FORMAT);
        let Some(chrono_format) = ChronoFormat::translate(format) else {
            warn!(rule = self.name(), format, "unsupported datetime format");
            return false;
        };
        scalar_text(value).is_some_and(|text| round_trips(&text, &chrono_format))
    }
}

// chrono reads a seconds field of 60 as a leap second.
fn is_leap_second<T: Timelike>(time: &T) -> bool {
    time.nanosecond() >= 1_000_000_000
}

fn round_trips(text: &str, format: &ChronoFormat) -> bool {
    let pattern = format.pattern.as_str();
    let mut rendered = String::with_capacity(text.len());
    let written = if format.has_zone {
        DateTime::parse_from_str(text, pattern)
            .ok()
            .filter(|dt| !is_leap_second(dt))
            .map(|dt| write!(rendered, "{}", dt.format(pattern)))
    } else if format.has_date && format.has_time {
        NaiveDateTime::parse_from_str(text, pattern)
            .ok()
            .filter(|dt| !is_leap_second(dt))
            .map(|dt| write!(rendered, "{}", dt.format(pattern)))
    } else if format.has_date {
        NaiveDate::parse_from_str(text, pattern)
            .ok()
            .map(|d| write!(rendered, "{}", d.format(pattern)))
    } else if format.has_time {
        NaiveTime::parse_from_str(text, pattern)
            .ok()
            .filter(|t| !is_leap_second(t))
            .map(|t| write!(rendered, "{}", t.format(pattern)))
    } else {
        None
    };
    matches!(written, Some(Ok(()))) && rendered == text
}
