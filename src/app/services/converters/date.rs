//! Date/time converter
//!
//! DFQ producers write timestamps in many layouts. Input is matched against a fixed,
//! ordered list of patterns and the first pattern matching the whole text wins:
//!
//! - date orders `d.M.y`, `M/d/y` and `y-M-d`
//! - two-digit (`20yy`) and four-digit years
//! - date/time separators `/`, space and `.`
//! - times with or without seconds
//!
//! followed by ISO-8601 local and offset date-times, where seconds are optional as
//! well. Values are held in the local
//! time zone and always written as `dd.MM.yyyy/HH:mm:ss`.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{KKeyValueConverter, conversion_error, unexpected_value};
use crate::Result;
use crate::app::models::KKeyValue;

const OUTPUT_FORMAT: &str = "%d.%m.%Y/%H:%M:%S";

/// ISO-8601 date-times; fractional seconds only follow seconds
const ISO_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// [`ISO_LOCAL_FORMATS`] with a `+HH:MM` offset
const ISO_OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

#[derive(Debug, Clone, Copy)]
enum DateOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

#[derive(Debug)]
struct DatePattern {
    regex: Regex,
    order: DateOrder,
    two_digit_year: bool,
}

impl DatePattern {
    fn new(order: DateOrder, two_digit_year: bool, separator: char, with_seconds: bool) -> Self {
        let year = if two_digit_year { r"(\d{2})" } else { r"(\d{4})" };
        let date = match order {
            DateOrder::DayMonthYear => format!(r"(\d{{1,2}})\.(\d{{1,2}})\.{}", year),
            DateOrder::MonthDayYear => format!(r"(\d{{1,2}})/(\d{{1,2}})/{}", year),
            DateOrder::YearMonthDay => format!(r"{}-(\d{{1,2}})-(\d{{1,2}})", year),
        };
        let time = if with_seconds {
            r"(\d{1,2}):(\d{1,2}):(\d{1,2})"
        } else {
            r"(\d{1,2}):(\d{1,2})"
        };
        let pattern = format!("^{}{}{}$", date, regex::escape(&separator.to_string()), time);

        Self {
            regex: Regex::new(&pattern).expect("date pattern is a valid regex"),
            order,
            two_digit_year,
        }
    }

    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let captures = self.regex.captures(text)?;
        let (day, month, year) = match self.order {
            DateOrder::DayMonthYear => (field(&captures, 1)?, field(&captures, 2)?, field(&captures, 3)?),
            DateOrder::MonthDayYear => (field(&captures, 2)?, field(&captures, 1)?, field(&captures, 3)?),
            DateOrder::YearMonthDay => (field(&captures, 3)?, field(&captures, 2)?, field(&captures, 1)?),
        };
        let year = if self.two_digit_year { 2000 + year } else { year };

        let hour = field(&captures, 4)?;
        let minute = field(&captures, 5)?;
        let second = if captures.len() > 6 { field(&captures, 6)? } else { 0 };

        let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(NaiveDateTime::new(date, time))
    }
}

fn field(captures: &Captures<'_>, group: usize) -> Option<u32> {
    captures.get(group)?.as_str().parse().ok()
}

static INPUT_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(|| {
    let mut patterns = Vec::with_capacity(36);
    for separator in ['/', ' ', '.'] {
        for order in [
            DateOrder::DayMonthYear,
            DateOrder::MonthDayYear,
            DateOrder::YearMonthDay,
        ] {
            for two_digit_year in [true, false] {
                for with_seconds in [true, false] {
                    patterns.push(DatePattern::new(
                        order,
                        two_digit_year,
                        separator,
                        with_seconds,
                    ));
                }
            }
        }
    }
    patterns
});

/// Resolve a wall-clock time in the local zone
///
/// Ambiguous times (DST fold) resolve to the earlier instant; times inside a DST gap
/// are moved forward by an hour.
fn to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(naive + Duration::hours(1))).earliest())
}

fn parse_date(text: &str) -> Option<DateTime<Local>> {
    for pattern in INPUT_PATTERNS.iter() {
        if let Some(naive) = pattern.parse(text) {
            return to_local(naive);
        }
    }

    for format in ISO_LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return to_local(naive);
        }
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Local));
    }

    let with_offset = match text.strip_suffix(['Z', 'z']) {
        Some(utc) => format!("{}+00:00", utc),
        None => text.to_string(),
    };
    ISO_OFFSET_FORMATS.iter().find_map(|format| {
        DateTime::parse_from_str(&with_offset, format)
            .ok()
            .map(|instant| instant.with_timezone(&Local))
    })
}

/// Converter for date/time K-keys such as K0004
#[derive(Debug, Clone, Copy, Default)]
pub struct DateConverter;

impl KKeyValueConverter for DateConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        if text.is_empty() {
            return Ok(None);
        }

        parse_date(text)
            .map(|date| Some(KKeyValue::Date(date)))
            .ok_or_else(|| conversion_error(text, "unsupported date format"))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::Date(date) => Ok(Some(
                date.with_timezone(&Local).format(OUTPUT_FORMAT).to_string(),
            )),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "date"
    }
}
