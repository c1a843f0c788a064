//! `DD/MM/YYYY` calendar helpers.
//!
//! Event and talk dates are stored as text. These helpers are the only
//! place that text is turned into [`NaiveDate`] values and back, so the
//! format used for parsing and the format used for matching talk dates
//! can never drift apart.

use chrono::{Days, NaiveDate};

use crate::error::IndexError;

/// `strftime` pattern for every stored date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a stored `DD/MM/YYYY` date.
///
/// Only the exact shape is accepted: two-digit day, two-digit month and
/// four-digit year, separated by `/`. chrono alone would also take
/// unpadded fields, signs, spaces and short years.
///
/// # Errors
///
/// Returns [`IndexError::DateParse`] if `value` does not match the pattern
/// or names a day that does not exist.
pub fn parse_event_date(value: &str) -> Result<NaiveDate, IndexError> {
    if !has_fixed_shape(value) {
        return Err(IndexError::DateParse {
            value: value.to_owned(),
            reason: String::from("expected two-digit day and month and a four-digit year"),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| IndexError::DateParse {
        value: value.to_owned(),
        reason: e.to_string(),
    })
}

/// Format a date the way talk dates are stored (zero-padded `DD/MM/YYYY`).
pub fn format_event_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `NN/NN/NNNN` with ASCII digits only.
fn has_fixed_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// The date `offset` days after `start`, or `None` past the calendar's end.
pub fn days_after(start: NaiveDate, offset: u64) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(offset))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = parse_event_date("03/07/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 7, 3).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in [
            "",
            "2023-07-03",
            "31/02/2023",
            "tomorrow",
            "1/1/2010",
            "01/01/10",
            "01/01/+2010",
            " 1/ 1/2010",
            "01/01/-001",
            "01/01/20100",
        ] {
            let err = parse_event_date(bad).unwrap_err();
            assert!(
                matches!(&err, IndexError::DateParse { value, .. } if value == bad),
                "unexpected error for {bad:?}: {err:?}"
            );
        }
    }

    #[test]
    fn accepts_four_digit_year_bounds() {
        assert!(parse_event_date("01/01/0001").is_ok());
        assert!(parse_event_date("31/12/9999").is_ok());
    }

    #[test]
    fn formats_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 3).unwrap();
        assert_eq!(format_event_date(date), "03/01/2010");
    }

    #[test]
    fn days_after_crosses_month_and_year() {
        let start = parse_event_date("30/12/2023").unwrap();
        assert_eq!(format_event_date(days_after(start, 0).unwrap()), "30/12/2023");
        assert_eq!(format_event_date(days_after(start, 3).unwrap()), "02/01/2024");
    }

    #[test]
    fn days_after_reports_overflow() {
        let start = parse_event_date("01/01/2010").unwrap();
        assert!(days_after(start, u64::MAX).is_none());
    }
}
