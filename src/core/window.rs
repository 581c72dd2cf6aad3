//! Fixed-length eligibility windows (e.g. the 4-year PPh Final UMKM period).

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PajakError;

/// A window that opens on `start` and closes `years` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityWindow {
    pub start: NaiveDate,
    pub years: u32,
}

/// Where a given day falls relative to an [`EligibilityWindow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowStatus {
    pub start_date: NaiveDate,
    /// First day on which the window no longer applies.
    pub expiry_date: NaiveDate,
    /// Whole days left until `expiry_date`; zero once expired.
    pub remaining_days: u32,
    pub expired: bool,
    /// Completed years since `start_date`, capped at the window length.
    pub years_elapsed: u32,
    /// True while inside the last year of the window.
    pub final_year: bool,
}

impl EligibilityWindow {
    pub fn new(start: NaiveDate, years: u32) -> Self {
        Self { start, years }
    }

    /// `start + years`. A Feb 29 start lands on Feb 28 in non-leap years.
    pub fn expiry(&self) -> Result<NaiveDate, PajakError> {
        self.anniversary(self.years)
    }

    /// Evaluate the window as of `today`. The clock is never read here.
    pub fn status(&self, today: NaiveDate) -> Result<WindowStatus, PajakError> {
        let expiry_date = self.expiry()?;
        let expired = today >= expiry_date;
        let remaining_days = if expired {
            0
        } else {
            u32::try_from((expiry_date - today).num_days()).unwrap_or(u32::MAX)
        };

        let mut years_elapsed = 0;
        while years_elapsed < self.years && self.anniversary(years_elapsed + 1)? <= today {
            years_elapsed += 1;
        }

        Ok(WindowStatus {
            start_date: self.start,
            expiry_date,
            remaining_days,
            expired,
            years_elapsed,
            final_year: !expired && self.years > 0 && years_elapsed + 1 == self.years,
        })
    }

    fn anniversary(&self, years: u32) -> Result<NaiveDate, PajakError> {
        self.start
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .ok_or_else(|| PajakError::InvalidDate {
                value: self.start.to_string(),
                reason: format!("adding {years} years leaves the supported date range"),
            })
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// The date part of an RFC 3339 timestamp (`2022-01-01T08:00:00Z`) is accepted
/// as well; the time is discarded.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, PajakError> {
    let trimmed = value.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| PajakError::InvalidDate {
        value: value.into(),
        reason: e.to_string(),
    })
}
