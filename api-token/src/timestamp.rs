use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::Timelike;
use chrono::Utc;
use thiserror::Error;

/// Wire format of token timestamps: UTC, second precision, `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Error for timestamps that do not follow the wire format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Unparseable timestamp: {0}")]
    Unparseable(String),

    #[error("Timestamp is not in canonical YYYY-MM-DDTHH:MM:SSZ form")]
    NonCanonical,
}

/// Parse a wire timestamp.
///
/// Only the exact canonical rendering is accepted. Signed years, unpadded
/// fields, surrounding whitespace and leap seconds are rejected.
///
/// # Errors
/// * `Unparseable` - Input does not match the layout at all
/// * `NonCanonical` - Input parses but is not the canonical rendering
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let parsed = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| TimestampError::Unparseable(e.to_string()))?;

    if parsed.nanosecond() != 0 || format_timestamp(parsed) != raw {
        return Err(TimestampError::NonCanonical);
    }

    Ok(parsed)
}
