use super::glob::Glob;
use super::resolution::{FieldGap, Resolution};
use super::tokenizer::IntToken;
use crate::ParseError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// One naming variant of the hyperspectral reference files carries an extra
/// integer ahead of the subject ordinal.
static HSR_VARIANT: Lazy<Glob> = Lazy::new(|| Glob::builtin("hsr_*.*"));

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Calendar instant a capture was taken at, always a valid date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "RawCaptureTime")]
pub struct CaptureTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CaptureTime {
    /// Builds a capture time from raw filename integers, or `None` when they
    /// do not describe a real instant (month 13, Feb 30, second 60, ...).
    pub fn from_parts(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Option<Self> {
        let year = i32::try_from(year)
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))?;
        let date = NaiveDate::from_ymd_opt(
            year,
            u32::try_from(month).ok()?,
            u32::try_from(day).ok()?,
        )?;
        let instant = date.and_hms_opt(
            u32::try_from(hour).ok()?,
            u32::try_from(minute).ok()?,
            u32::try_from(second).ok()?,
        )?;

        Some(Self::from(instant))
    }

    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }

    /// `YYYY-MM-DDTHH:MM:SS`
    pub fn isoformat(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Wire form of [`CaptureTime`] before calendar validation.
#[derive(Deserialize)]
struct RawCaptureTime {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
}

impl TryFrom<RawCaptureTime> for CaptureTime {
    type Error = ParseError;

    fn try_from(raw: RawCaptureTime) -> Result<Self, Self::Error> {
        let RawCaptureTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = raw;
        CaptureTime::from_parts(year, month, day, hour, minute, second).ok_or_else(|| {
            ParseError::InvalidCaptureTime(format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
            ))
        })
    }
}

impl From<NaiveDateTime> for CaptureTime {
    fn from(instant: NaiveDateTime) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
        }
    }
}

// Written out by hand so the serialized form also carries the ISO string
// dataset indexers key on.
impl Serialize for CaptureTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CaptureTime", 7)?;
        state.serialize_field("datetime", &self.isoformat())?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("hour", &self.hour)?;
        state.serialize_field("minute", &self.minute)?;
        state.serialize_field("second", &self.second)?;
        state.end()
    }
}

/// The subject ordinal is the first integer token, or the second one for the
/// `hsr_` reference variant.
pub fn resolve_ordinal(filename: &str, ints: &[IntToken]) -> Resolution<i64> {
    let index = if HSR_VARIANT.matches(filename) { 1 } else { 0 };
    match ints.get(index) {
        Some(IntToken::Value(ordinal)) => Resolution::Found(*ordinal),
        Some(IntToken::Overflow) => Resolution::Missing(FieldGap::OversizedInteger),
        None => Resolution::Missing(FieldGap::InsufficientTokens),
    }
}

/// Reads year..second from integer positions 1..=6, after dropping the extra
/// leading integer of the `hsr_` variant. Position 0 is the ordinal and
/// anything past position 6 (the millisecond counter) is ignored.
pub fn resolve_capture_time(filename: &str, ints: &[IntToken]) -> Resolution<CaptureTime> {
    let ints = if HSR_VARIANT.matches(filename) {
        ints.get(1..).unwrap_or_default()
    } else {
        ints
    };

    let Some(parts) = ints.get(1..7) else {
        return Resolution::Missing(FieldGap::InsufficientTokens);
    };
    let parts: Option<Vec<i64>> = parts.iter().map(|int| int.value()).collect();
    let capture_time = match parts.as_deref() {
        Some(&[year, month, day, hour, minute, second]) => {
            CaptureTime::from_parts(year, month, day, hour, minute, second)
        }
        _ => None,
    };

    match capture_time {
        Some(capture_time) => Resolution::Found(capture_time),
        None => {
            debug!(filename, ?parts, "integer tokens are not a valid capture time");
            Resolution::Missing(FieldGap::InvalidCalendarValue)
        }
    }
}
