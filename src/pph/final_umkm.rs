//! PPh Final UMKM — presumptive 0.3% tax on gross revenue (PP 55/2022).
//!
//! Two independent facts come out of a calculation:
//! - revenue eligibility (gross revenue at or below the ceiling), and
//! - the usage window (a CV may use the final rate for 4 years from its start date).
//!
//! A CV can be revenue-eligible yet past its window; both are reported.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::require_positive;
use crate::core::{EligibilityWindow, PajakError, PphFinalConfig, WindowStatus};

/// PPh Final calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PphFinalInput {
    /// Gross revenue (omzet) for the period.
    pub gross_income: Decimal,
    /// Date the CV started using the final rate.
    pub start_date: Option<NaiveDate>,
}

impl PphFinalInput {
    pub fn new(gross_income: Decimal) -> Self {
        Self {
            gross_income,
            start_date: None,
        }
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }
}

/// PPh Final calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PphFinalResult {
    pub gross_income: Decimal,
    pub tax_rate: Decimal,
    /// `gross_income × tax_rate`, unrounded.
    pub tax_amount: Decimal,
    pub net_income: Decimal,
    /// `gross_income ≤ revenue_ceiling`.
    pub eligible: bool,
    /// Present when a start date was given and the CV is revenue-eligible.
    pub window: Option<WindowStatus>,
}

impl PphFinalResult {
    /// Eligible by revenue and not past the usage window.
    pub fn final_rate_applicable(&self) -> bool {
        self.eligible && self.window.as_ref().is_none_or(|w| !w.expired)
    }
}

/// Whether `gross_income` is within the UMKM revenue ceiling.
pub fn check_pph_final_eligibility(gross_income: Decimal, config: &PphFinalConfig) -> bool {
    gross_income <= config.revenue_ceiling
}

/// Calculate PPh Final UMKM as of `today`.
pub fn calculate_pph_final(
    input: &PphFinalInput,
    config: &PphFinalConfig,
    today: NaiveDate,
) -> Result<PphFinalResult, PajakError> {
    config.validate()?;
    let gross = input.gross_income;
    require_positive("gross_income", "gross income", gross)?;

    let tax_amount = gross * config.rate;
    let eligible = check_pph_final_eligibility(gross, config);

    let window = match input.start_date {
        Some(start) if eligible => {
            Some(EligibilityWindow::new(start, config.window_years).status(today)?)
        }
        _ => None,
    };

    log::debug!(
        "PPh Final: gross={gross} tax={tax_amount} eligible={eligible} window_expired={:?}",
        window.as_ref().map(|w| w.expired)
    );

    Ok(PphFinalResult {
        gross_income: gross,
        tax_rate: config.rate,
        tax_amount,
        net_income: gross - tax_amount,
        eligible,
        window,
    })
}
