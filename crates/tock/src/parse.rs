// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::civil::DateTime;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::fmt::LAYOUT_YMD_HIS;
use crate::{Error, Result, location};

/// A value that [`parse`] can interpret as a time.
///
/// This is the closed set of representations accepted by the tolerant parser:
/// an instant passes through unchanged, text is parsed against the canonical
/// layout, and integers are epoch seconds. The [`Unsupported`][TimeValue::Unsupported]
/// arm captures values of any other type, so rejection is an explicit, testable
/// case rather than a silent fallback.
///
/// `From` conversions exist for the natural Rust types; use them rather than
/// naming variants directly:
///
/// ```
/// use tock::TimeValue;
///
/// let from_text = TimeValue::from("2020-01-01 00:00:01");
/// let from_seconds = TimeValue::from(1_577_836_801_i64);
/// let absent = TimeValue::from(None::<i64>);
/// ```
#[derive(Debug, Clone)]
pub enum TimeValue {
    /// No value. Parses to the zero instant (Unix epoch in UTC).
    Absent,
    /// An instant, returned unchanged.
    Instant(Zoned),
    /// Text in the canonical `"YYYY-MM-DD HH:MM:SS"` layout.
    Text(String),
    /// Epoch seconds as a 32-bit integer.
    Seconds32(i32),
    /// Epoch seconds as a 64-bit integer.
    Seconds64(i64),
    /// A value of a type that cannot be interpreted as a time; carries the
    /// type's name for the error message.
    Unsupported(&'static str),
}

impl From<Zoned> for TimeValue {
    fn from(value: Zoned) -> Self {
        Self::Instant(value)
    }
}

impl From<&Zoned> for TimeValue {
    fn from(value: &Zoned) -> Self {
        Self::Instant(value.clone())
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for TimeValue {
    fn from(value: i32) -> Self {
        Self::Seconds32(value)
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        Self::Seconds64(value)
    }
}

impl From<f32> for TimeValue {
    fn from(_: f32) -> Self {
        Self::Unsupported("f32")
    }
}

impl From<f64> for TimeValue {
    fn from(_: f64) -> Self {
        Self::Unsupported("f64")
    }
}

impl<T> From<Option<T>> for TimeValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Interprets `value` as an instant.
///
/// The accepted representations and their semantics:
///
/// * [`Absent`][TimeValue::Absent] - the zero instant (Unix epoch in UTC),
///   without error.
/// * [`Instant`][TimeValue::Instant] - returned unchanged.
/// * [`Text`][TimeValue::Text] - parsed strictly against
///   [`LAYOUT_YMD_HIS`][crate::LAYOUT_YMD_HIS] in the active location; any
///   mismatch, including trailing input, is an error.
/// * [`Seconds32`][TimeValue::Seconds32] / [`Seconds64`][TimeValue::Seconds64]
///   - epoch seconds, presented in the active location. Never fails; values
///   beyond the representable range saturate to its boundary.
/// * [`Unsupported`][TimeValue::Unsupported] - always an error naming the
///   rejected type.
///
/// # Errors
///
/// Returns an error if the text does not match the canonical layout or the
/// value's type cannot be interpreted as a time.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use tock::TimeValue;
///
/// tock::set_location(TimeZone::UTC);
///
/// let parsed = tock::parse(TimeValue::from("2020-01-01 00:00:01"))?;
/// assert_eq!(tock::ymd_his(&parsed), "2020-01-01 00:00:01");
///
/// let epoch = tock::parse(TimeValue::from(0_i64))?;
/// assert_eq!(tock::ymd_his(&epoch), "1970-01-01 00:00:00");
///
/// assert!(tock::parse(TimeValue::from(3.14)).unwrap_err().is_unsupported_type());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(value: TimeValue) -> Result<Zoned> {
    match value {
        TimeValue::Absent => Ok(Zoned::new(Timestamp::UNIX_EPOCH, TimeZone::UTC)),
        TimeValue::Instant(instant) => Ok(instant),
        TimeValue::Text(text) => parse_text(&text),
        TimeValue::Seconds32(seconds) => Ok(from_epoch_seconds(i64::from(seconds))),
        TimeValue::Seconds64(seconds) => Ok(from_epoch_seconds(seconds)),
        TimeValue::Unsupported(type_name) => Err(Error::unsupported_type(type_name)),
    }
}

fn parse_text(text: &str) -> Result<Zoned> {
    let datetime: DateTime = strtime::parse(LAYOUT_YMD_HIS, text)
        .and_then(|fields| fields.to_datetime())
        .map_err(Error::parse)?;
    location().to_zoned(datetime).map_err(Error::parse)
}

// Epoch-second input never fails: out-of-range values clamp to the boundary of
// the representable range.
fn from_epoch_seconds(seconds: i64) -> Zoned {
    let timestamp = Timestamp::from_second(seconds).unwrap_or_else(|_| {
        if seconds > 0 { Timestamp::MAX } else { Timestamp::MIN }
    });
    timestamp.to_zoned(location())
}
