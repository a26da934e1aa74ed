use chrono::{Local, NaiveDate};

use crate::api::{DateOrFlag, EolRecord};

/// Number of days before (or after) the EOL date during which the release is
/// considered to have an impending end of life.
pub const LEAD_DAYS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid eol date in response: {0}")]
    InvalidEolDate(String),
    #[error("Invalid extendedSupport date in response: {0}")]
    InvalidExtendedSupportDate(String),
}

/// Outcome of the lead-window comparison. `Impending` carries the raw date
/// string from the API response that should be reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    NotImpending,
    Impending { date: String },
}

/// Returns the current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Decides whether a release's end of life is impending.
///
/// The release is impending when its `eol` date lies within [`LEAD_DAYS`] of
/// `today`, in either direction. When `lts` is requested and the record
/// carries a valid `extendedSupport` date, that string is reported instead of
/// the `eol` string; the window itself is always measured against `eol`.
///
/// An `eol` of `false` means upstream has not scheduled an end-of-life date
/// yet, which can never be impending. Any other non-date value is an error.
///
/// # Arguments
///
/// * `record` - The cycle record fetched from the API.
/// * `lts` - Whether the caller asked for the extended-support date.
/// * `today` - The date to measure the lead window against.
pub fn check_record(
    record: &EolRecord,
    lts: bool,
    today: NaiveDate,
) -> Result<Decision, CheckError> {
    let eol_raw = match &record.eol {
        DateOrFlag::Date(date) => date,
        DateOrFlag::Flag(false) => return Ok(Decision::NotImpending),
        DateOrFlag::Flag(true) => return Err(CheckError::InvalidEolDate("true".to_string())),
    };

    let eol: NaiveDate = eol_raw
        .parse()
        .map_err(|_| CheckError::InvalidEolDate(eol_raw.clone()))?;

    // Effective LTS requires both the caller's flag and a parseable
    // extendedSupport date in the record.
    let extended_raw = match (lts, &record.extended_support) {
        (true, Some(DateOrFlag::Date(date))) => {
            date.parse::<NaiveDate>()
                .map_err(|_| CheckError::InvalidExtendedSupportDate(date.clone()))?;
            Some(date)
        }
        (true, Some(DateOrFlag::Flag(flag))) => {
            return Err(CheckError::InvalidExtendedSupportDate(flag.to_string()));
        }
        _ => None,
    };

    let offset = (eol - today).num_days().abs();
    if offset <= LEAD_DAYS {
        let date = extended_raw.unwrap_or(eol_raw).clone();
        Ok(Decision::Impending { date })
    } else {
        Ok(Decision::NotImpending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(json: &str) -> EolRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn eol_within_window_is_impending() {
        let r = record(r#"{"eol": "2024-06-15"}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::Impending {
                date: "2024-06-15".to_string()
            }
        );
    }

    #[test]
    fn eol_far_in_the_past_is_not_impending() {
        let r = record(r#"{"eol": "2023-01-01"}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::NotImpending
        );
    }

    #[test]
    fn eol_far_in_the_future_is_not_impending() {
        let r = record(r#"{"eol": "2027-04-01"}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::NotImpending
        );
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let r = record(r#"{"eol": "2024-07-01"}"#);
        // Exactly 30 days out.
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::Impending {
                date: "2024-07-01".to_string()
            }
        );

        let r = record(r#"{"eol": "2024-07-02"}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::NotImpending
        );
    }

    #[test]
    fn recently_passed_eol_is_still_impending() {
        let r = record(r#"{"eol": "2024-05-20"}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::Impending {
                date: "2024-05-20".to_string()
            }
        );
    }

    #[test]
    fn lts_reports_extended_support_date() {
        let r = record(r#"{"eol": "2024-06-15", "extendedSupport": "2029-06-15"}"#);
        assert_eq!(
            check_record(&r, true, date("2024-06-01")).unwrap(),
            Decision::Impending {
                date: "2029-06-15".to_string()
            }
        );
    }

    #[test]
    fn lts_without_extended_support_falls_back_to_eol() {
        let r = record(r#"{"eol": "2024-06-15"}"#);
        assert_eq!(
            check_record(&r, true, date("2024-06-01")).unwrap(),
            Decision::Impending {
                date: "2024-06-15".to_string()
            }
        );
    }

    #[test]
    fn extended_support_is_ignored_without_lts() {
        let r = record(r#"{"eol": "2024-06-15", "extendedSupport": "2029-06-15"}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::Impending {
                date: "2024-06-15".to_string()
            }
        );
    }

    #[test]
    fn unscheduled_eol_is_not_impending() {
        let r = record(r#"{"eol": false}"#);
        assert_eq!(
            check_record(&r, false, date("2024-06-01")).unwrap(),
            Decision::NotImpending
        );
    }

    #[test]
    fn boolean_true_eol_is_an_error() {
        let r = record(r#"{"eol": true}"#);
        assert!(matches!(
            check_record(&r, false, date("2024-06-01")),
            Err(CheckError::InvalidEolDate(_))
        ));
    }

    #[test]
    fn malformed_eol_date_is_an_error() {
        let r = record(r#"{"eol": "soon"}"#);
        assert!(matches!(
            check_record(&r, false, date("2024-06-01")),
            Err(CheckError::InvalidEolDate(_))
        ));
    }

    #[test]
    fn boolean_extended_support_under_lts_is_an_error() {
        let r = record(r#"{"eol": "2024-06-15", "extendedSupport": false}"#);
        assert!(matches!(
            check_record(&r, true, date("2024-06-01")),
            Err(CheckError::InvalidExtendedSupportDate(_))
        ));
    }

    #[test]
    fn malformed_extended_support_is_an_error_even_outside_the_window() {
        // The extendedSupport parse happens before the window comparison.
        let r = record(r#"{"eol": "2027-04-01", "extendedSupport": "n/a"}"#);
        assert!(matches!(
            check_record(&r, true, date("2024-06-01")),
            Err(CheckError::InvalidExtendedSupportDate(_))
        ));
    }
}
