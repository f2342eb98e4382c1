//! Conversion between split civil-time form inputs and absolute instants.
//!
//! Slot forms collect a calendar date (`YYYY-MM-DD`), a 12-hour clock time
//! (`HH:MM`) and an AM/PM designator as three separate fields. [`encode`]
//! combines them into a timezone-aware instant; [`decode`] is the inverse,
//! used to repopulate an edit form from a stored start time.
//!
//! The codec never re-derives structure from formatted display strings;
//! the split representation is the only parse surface.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// AM/PM designator of a 12-hour clock time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

impl std::str::FromStr for Meridiem {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            other => Err(TimeError::InvalidTime(other.to_string())),
        }
    }
}

/// The split form representation of an instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitTime {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// 12-hour clock time, `HH:MM`, hour 1 to 12.
    pub time: String,
    pub meridiem: Meridiem,
}

/// Combine split form inputs into a civil (timezone-naive) date-time.
///
/// Hour 12 under AM maps to civil hour 0; hours below 12 under PM gain 12.
/// Empty date or time fails with [`TimeError::MissingField`] before any
/// parsing is attempted.
pub fn encode_civil(
    date_str: &str,
    time_str: &str,
    meridiem: Meridiem,
) -> Result<NaiveDateTime, TimeError> {
    let date_str = date_str.trim();
    let time_str = time_str.trim();

    if date_str.is_empty() {
        return Err(TimeError::MissingField("date"));
    }
    if time_str.is_empty() {
        return Err(TimeError::MissingField("time"));
    }

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date_str.to_string()))?;

    let (hour12, minute) = parse_clock(time_str)?;

    let hour24 = match (meridiem, hour12) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };

    let time = NaiveTime::from_hms_opt(hour24, minute, 0)
        .ok_or_else(|| TimeError::InvalidTime(time_str.to_string()))?;

    Ok(date.and_time(time))
}

/// Combine split form inputs into a local-timezone instant.
///
/// On a DST fold the earlier of the two valid instants is taken; in a DST
/// gap the civil time has no local representation and encoding fails.
pub fn encode(
    date_str: &str,
    time_str: &str,
    meridiem: Meridiem,
) -> Result<DateTime<Local>, TimeError> {
    let civil = encode_civil(date_str, time_str, meridiem)?;
    Local
        .from_local_datetime(&civil)
        .earliest()
        .ok_or(TimeError::NonexistentLocalTime)
}

/// Split a civil date-time back into form inputs. Inverse of [`encode_civil`].
///
/// Civil hour 0 displays as "12" AM; hours 13 to 23 drop 12 and mark PM.
pub fn decode_civil(civil: NaiveDateTime) -> SplitTime {
    let (hour12, meridiem) = match civil.hour() {
        0 => (12, Meridiem::Am),
        h @ 1..=11 => (h, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        h => (h - 12, Meridiem::Pm),
    };

    SplitTime {
        date: format!(
            "{:04}-{:02}-{:02}",
            civil.year(),
            civil.month(),
            civil.day()
        ),
        time: format!("{:02}:{:02}", hour12, civil.minute()),
        meridiem,
    }
}

/// Split a local instant back into form inputs. Inverse of [`encode`].
pub fn decode(instant: DateTime<Local>) -> SplitTime {
    decode_civil(instant.naive_local())
}

/// Parse `HH:MM` with a 12-hour clock hour (1 to 12).
fn parse_clock(time_str: &str) -> Result<(u32, u32), TimeError> {
    let invalid = || TimeError::InvalidTime(time_str.to_string());

    let (h, m) = time_str.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = h.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = m.trim().parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    Ok((hour, minute))
}
