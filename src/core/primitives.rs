use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ChartError, ChartResult};

/// Display format for dates on the time axis and in tooltips.
pub const DAY_LABEL_FORMAT: &str = "%d %b %Y";

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

/// Parses `YYYY-MM-DD` (UTC midnight) or an RFC 3339 timestamp into unix seconds.
pub fn parse_time(input: &str) -> ChartResult<f64> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ChartError::InvalidData(format!("invalid date `{trimmed}`")))?;
        return Ok(datetime_to_unix_seconds(midnight.and_utc()));
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|time| datetime_to_unix_seconds(time.with_timezone(&Utc)))
        .map_err(|err| ChartError::InvalidData(format!("unparsable time `{trimmed}`: {err}")))
}

/// Formats unix seconds as a day/month/year label, e.g. `14 Oct 2024`.
#[must_use]
pub fn format_day_label(seconds: f64) -> String {
    match unix_seconds_to_datetime(seconds) {
        Some(time) => time.format(DAY_LABEL_FORMAT).to_string(),
        None => String::from("-"),
    }
}
