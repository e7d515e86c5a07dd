//! Wall-clock timestamp parsing shared by the time-window rules.

use chrono::NaiveDateTime;

use crate::constants::TIMESTAMP_FORMAT;

/// Parse a collector timestamp in `%Y-%m-%d %H:%M:%S` format.
///
/// Timestamps are wall-clock with no timezone; second granularity.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}
