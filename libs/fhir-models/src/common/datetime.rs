//! FHIR date/time values with explicit precision
//!
//! FHIR `date`, `dateTime`, `instant` and `time` values carry their own
//! precision: `2017` is a whole year, `2017-03` a month, and so on. The
//! precision is part of the value and survives a decode/encode round trip.

use super::error::{Error, Result};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Timelike, Utc,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Precision of a [`FhirDateTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Year,
    YearMonth,
    Date,
    Time,
    Timestamp,
}

impl Precision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Year => "year",
            Precision::YearMonth => "year-month",
            Precision::Date => "date",
            Precision::Time => "time",
            Precision::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date, partial date, time of day, or full timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FhirDateTime {
    Year(i32),
    YearMonth(i32, u32),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(DateTime<FixedOffset>),
}

impl FhirDateTime {
    pub fn precision(&self) -> Precision {
        match self {
            FhirDateTime::Year(_) => Precision::Year,
            FhirDateTime::YearMonth(..) => Precision::YearMonth,
            FhirDateTime::Date(_) => Precision::Date,
            FhirDateTime::Time(_) => Precision::Time,
            FhirDateTime::Timestamp(_) => Precision::Timestamp,
        }
    }

    /// First instant covered by this value, in UTC.
    ///
    /// Partial dates start at midnight UTC of their first day. A bare time of
    /// day has no date and yields `None`.
    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        let date = match *self {
            FhirDateTime::Year(year) => NaiveDate::from_ymd_opt(year, 1, 1)?,
            FhirDateTime::YearMonth(year, month) => NaiveDate::from_ymd_opt(year, month, 1)?,
            FhirDateTime::Date(date) => date,
            FhirDateTime::Time(_) => return None,
            FhirDateTime::Timestamp(ts) => return Some(ts.with_timezone(&Utc)),
        };
        Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
    }

    /// RFC 7231 HTTP-date rendering (`Sun, 06 Nov 1994 08:49:37 GMT`)
    pub fn to_http_date(&self) -> Option<String> {
        self.start_utc()
            .map(|ts| ts.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
    }
}

impl FromStr for FhirDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateTime(input.to_string());

        if input.as_bytes().get(2) == Some(&b':') {
            return parse_time(input).map(FhirDateTime::Time).ok_or_else(invalid);
        }

        if input.len() > 10 {
            return DateTime::parse_from_rfc3339(input)
                .map(FhirDateTime::Timestamp)
                .map_err(|_| invalid());
        }

        if has_shape(input, "####-##-##") {
            return NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(FhirDateTime::Date)
                .map_err(|_| invalid());
        }
        if let Some((year, month)) = input.split_once('-') {
            let year = parse_year(year).ok_or_else(invalid)?;
            let month = parse_digits(month, 2)
                .filter(|m| (1..=12).contains(m))
                .ok_or_else(invalid)?;
            return Ok(FhirDateTime::YearMonth(year, month));
        }
        parse_year(input).map(FhirDateTime::Year).ok_or_else(invalid)
    }
}

/// `hh:mm:ss` with an optional fraction of up to nine digits
fn parse_time(input: &str) -> Option<NaiveTime> {
    let (clock, fraction) = match input.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (input, None),
    };
    let fraction_ok = fraction.map_or(true, |digits| {
        (1..=9).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
    });
    if !has_shape(clock, "##:##:##") || !fraction_ok {
        return None;
    }
    NaiveTime::parse_from_str(input, "%H:%M:%S%.f").ok()
}

/// `#` in `shape` matches an ASCII digit; any other byte matches itself.
fn has_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(c, expected)| match expected {
            b'#' => c.is_ascii_digit(),
            _ => c == expected,
        })
}

fn parse_year(input: &str) -> Option<i32> {
    parse_digits(input, 4).map(|y| y as i32)
}

fn parse_digits(input: &str, width: usize) -> Option<u32> {
    if input.len() != width || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

impl fmt::Display for FhirDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FhirDateTime::Year(year) => write!(f, "{:04}", year),
            FhirDateTime::YearMonth(year, month) => write!(f, "{:04}-{:02}", year, month),
            FhirDateTime::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            FhirDateTime::Time(time) => {
                write!(f, "{}", time.format("%H:%M:%S"))?;
                match time.nanosecond() {
                    0 => Ok(()),
                    nanos => write!(f, ".{}", format!("{:09}", nanos).trim_end_matches('0')),
                }
            }
            FhirDateTime::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

impl Serialize for FhirDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FhirDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FhirDateTimeVisitor;

        impl de::Visitor<'_> for FhirDateTimeVisitor {
            type Value = FhirDateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a FHIR date, dateTime, instant or time string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<FhirDateTime, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(FhirDateTimeVisitor)
    }
}
