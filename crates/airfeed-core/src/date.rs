//! Resolving a station's local date and time strings to an absolute instant.
//!
//! Stations publish wall-clock time with no offset, e.g.
//! `"Monday, January 1, 2018"` + `"10:00:00"`. The timezone is supplied by
//! the caller per source; it is never read from the document.

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::NormalizeError;
use crate::types::ParsedDate;

/// `weekday, month-name day, year hour:minute:second`, 24-hour clock.
pub const SOURCE_FORMAT: &str = "%A, %B %d, %Y %H:%M:%S";

/// Offset-qualified rendering used for [`ParsedDate::local`].
pub const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Interpret `"<date> <time>"` in `tz`.
///
/// A weekday that contradicts the calendar date and a wall-clock time that
/// falls in a DST gap are both rejected. A time in a DST fold resolves to
/// the earlier of the two instants.
pub fn construct(date: &str, time: &str, tz: Tz) -> Result<ParsedDate, NormalizeError> {
    let input = format!("{date} {time}");

    let naive = NaiveDateTime::parse_from_str(&input, SOURCE_FORMAT).map_err(|e| {
        NormalizeError::InvalidDate {
            input: input.clone(),
            reason: e.to_string(),
        }
    })?;

    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| NormalizeError::InvalidDate {
            input: input.clone(),
            reason: format!("local time does not exist in {}", tz.name()),
        })?;

    Ok(ParsedDate {
        utc: local.with_timezone(&Utc),
        local: local.format(LOCAL_FORMAT).to_string(),
    })
}
