//! Raw-value parsing and the release-date window used by the request bounds.

use std::borrow::Cow;

use chrono::{Duration, NaiveDate};
use validator::ValidationError;

use super::types::Violation;
use crate::core::schemas::MAX_FUTURE_DAYS;

pub const DATE_TOO_FAR: &str = "date_too_far";

/// Validation context for release dates: "today" as seen by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    pub today: NaiveDate,
}

impl ReleaseWindow {
    pub fn new(today: NaiveDate) -> Self {
        ReleaseWindow { today }
    }

    /// Latest accepted release date. `None` once the window runs past the calendar.
    pub fn latest(&self) -> Option<NaiveDate> {
        self.today.checked_add_signed(Duration::days(MAX_FUTURE_DAYS))
    }
}

pub fn check_release_window(date: &NaiveDate, window: &ReleaseWindow) -> Result<(), ValidationError> {
    match window.latest() {
        Some(latest) if *date > latest => {
            let mut err = ValidationError::new(DATE_TOO_FAR);
            err.add_param(Cow::from("latest"), &latest);
            Err(err)
        }
        _ => Ok(()),
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, Violation> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| Violation::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn release_window_boundaries() {
        let window = ReleaseWindow::new(day(2025, 3, 1));
        assert_eq!(window.latest(), Some(day(2026, 3, 1)));
        assert!(check_release_window(&day(1927, 1, 10), &window).is_ok());
        assert!(check_release_window(&day(2026, 3, 1), &window).is_ok());

        let err = check_release_window(&day(2026, 3, 2), &window).unwrap_err();
        assert_eq!(err.code, DATE_TOO_FAR);
    }

    #[test]
    fn release_window_near_calendar_end() {
        let window = ReleaseWindow::new(NaiveDate::MAX);
        assert_eq!(window.latest(), None);
        assert!(check_release_window(&NaiveDate::MAX, &window).is_ok());
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2024-02-29"), Ok(day(2024, 2, 29)));
        assert!(matches!(parse_date("2023-02-29"), Err(Violation::InvalidDate(_))));
        assert!(parse_date("29/02/2024").is_err());
    }
}
