//! Row parsing and parameter binding helpers.
//!
//! `libsql::Row` is column-indexed and nullable columns must be read as
//! `Option<T>`; dates and JSON live in TEXT columns. These helpers isolate the
//! conversions so each resource's `from_row`/`bind` stays a flat field list.

use chrono::NaiveDate;

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a TEXT column holding a calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Read a nullable date column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails or the value is not a date.
pub fn get_opt_date(row: &libsql::Row, idx: i32) -> Result<Option<NaiveDate>, DatabaseError> {
    match get_opt_nonempty(row, idx)? {
        Some(s) => Ok(Some(parse_date(&s)?)),
        None => Ok(None),
    }
}

/// Read a required date column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails or the value is not a date.
pub fn get_date(row: &libsql::Row, idx: i32) -> Result<NaiveDate, DatabaseError> {
    parse_date(&row.get::<String>(idx)?)
}

/// Read a nullable TEXT column. An empty string stays `Some("")`.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Like [`get_opt_string`], but an empty string reads as `None`.
fn get_opt_nonempty(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(get_opt_string(row, idx)?.filter(|s| !s.is_empty()))
}

/// Read a nullable JSON column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty value contains invalid JSON.
pub fn get_opt_json(row: &libsql::Row, idx: i32) -> Result<Option<serde_json::Value>, DatabaseError> {
    match get_opt_nonempty(row, idx)? {
        Some(s) => serde_json::from_str(&s)
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column {idx}: {e}"))),
        None => Ok(None),
    }
}

/// Bind an optional string, mapping `None` to SQL NULL.
#[must_use]
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

/// Bind a date as `YYYY-MM-DD` TEXT.
#[must_use]
pub fn date_value(date: NaiveDate) -> libsql::Value {
    libsql::Value::Text(date.format(DATE_FORMAT).to_string())
}

#[must_use]
pub fn opt_date(date: Option<NaiveDate>) -> libsql::Value {
    date.map_or(libsql::Value::Null, date_value)
}

#[must_use]
pub fn opt_real(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

#[must_use]
pub fn opt_integer(value: Option<i64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Integer)
}

/// Bind a JSON value as TEXT.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if the value cannot be serialized.
pub fn opt_json(value: Option<&serde_json::Value>) -> Result<libsql::Value, DatabaseError> {
    match value {
        Some(v) => serde_json::to_string(v)
            .map(libsql::Value::Text)
            .map_err(|e| DatabaseError::Other(e.into())),
        None => Ok(libsql::Value::Null),
    }
}

/// Escape `LIKE` wildcards so the term matches literally. Pair with `ESCAPE '\'`.
#[must_use]
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("acme", "acme")]
    #[case("50%", "50\\%")]
    #[case("a_b", "a\\_b")]
    #[case("c:\\docs", "c:\\\\docs")]
    fn like_escaping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_like(input), expected);
    }

    #[test]
    fn date_roundtrip_through_text() {
        let date = parse_date("2024-02-29").unwrap();
        assert!(matches!(date_value(date), libsql::Value::Text(ref s) if s == "2024-02-29"));
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(matches!(parse_date("29/02/2024"), Err(DatabaseError::Query(_))));
    }
}
