//! Input validation applied before any write reaches storage.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Implemented by every entity input type.
pub trait Validate {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    fn validate(&self) -> Result<(), CoreError>;
}

/// Require a non-blank text field.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `value` is empty or whitespace.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("'{field}' must not be blank")));
    }
    Ok(())
}

/// An end date may be absent, but never earlier than the start date.
///
/// # Errors
///
/// Returns `CoreError::Validation` if both dates are set and `end < start`.
pub fn check_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "'end_date' ({end}) must not precede 'start_date' ({start})"
            )));
        }
    }
    Ok(())
}

/// Money amounts must be finite and non-negative.
///
/// # Errors
///
/// Returns `CoreError::Validation` for NaN, infinite or negative values.
pub fn check_amount(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CoreError::Validation(format!(
            "'{field}' must be a non-negative amount, got {v}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("Acme", true)]
    fn text_requirement(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(require_text("name", value).is_ok(), ok);
    }

    #[test]
    fn date_range() {
        assert!(check_date_range(Some(date("2024-01-01")), Some(date("2024-12-31"))).is_ok());
        assert!(check_date_range(Some(date("2024-01-01")), Some(date("2024-01-01"))).is_ok());
        assert!(check_date_range(Some(date("2024-01-01")), None).is_ok());
        assert!(check_date_range(None, Some(date("2024-01-01"))).is_ok());

        let err = check_date_range(Some(date("2024-06-01")), Some(date("2024-01-01"))).unwrap_err();
        assert!(err.to_string().contains("end_date"));
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(0.0), true)]
    #[case(Some(1250.5), true)]
    #[case(Some(-1.0), false)]
    #[case(Some(f64::NAN), false)]
    #[case(Some(f64::INFINITY), false)]
    fn amounts(#[case] value: Option<f64>, #[case] ok: bool) {
        assert_eq!(check_amount("budget", value).is_ok(), ok);
    }
}
