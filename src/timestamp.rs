//! Conversion of record timestamps to and from their database representation.
//!
//! Timestamps are stored as fixed width UTC text so that SQLite can order rows
//! by comparing the strings, e.g. "2025-01-02T03:04:05.000000006Z".

use rusqlite::types::Type;
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::Error;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z"
);

/// Format `timestamp` for storage in the database.
///
/// `timestamp` is converted to UTC first.
pub fn to_sql(timestamp: OffsetDateTime) -> Result<String, time::error::Format> {
    timestamp.to_offset(UtcOffset::UTC).format(TIMESTAMP_FORMAT)
}

/// The current time, formatted for storage in the database.
pub fn now() -> Result<String, Error> {
    to_sql(OffsetDateTime::now_utc()).map_err(|error| Error::InvalidDateFormat(error.to_string()))
}

/// Read the timestamp stored in column `index` of `row`.
pub fn from_row(row: &rusqlite::Row, index: usize) -> Result<OffsetDateTime, rusqlite::Error> {
    let text: String = row.get(index)?;

    PrimitiveDateTime::parse(&text, TIMESTAMP_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error)))
}
