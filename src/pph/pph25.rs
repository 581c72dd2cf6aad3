//! PPh Pasal 25 — monthly income tax installments.
//!
//! Installments are derived from last year's tax due, reduced by fiscal
//! losses and by tax already paid in advance. Nothing is carried between
//! periods; every intermediate is clamped at zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::require_non_negative;
use crate::core::{PajakError, Pph25Config};

/// PPh 25 calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph25Input {
    /// Income tax due for the previous year.
    pub prev_year_tax: Decimal,
    pub fiscal_losses: Decimal,
    /// Tax already paid (e.g. credited PPh 22/23).
    pub pph_paid: Decimal,
}

impl Pph25Input {
    pub fn new(prev_year_tax: Decimal) -> Self {
        Self {
            prev_year_tax,
            fiscal_losses: Decimal::ZERO,
            pph_paid: Decimal::ZERO,
        }
    }

    /// Estimate the previous year's tax from corporate profit:
    /// `max(0, income − expenses) × corporate_rate`.
    pub fn from_corporate_profit(
        income: Decimal,
        expenses: Decimal,
        config: &Pph25Config,
    ) -> Result<Self, PajakError> {
        config.validate()?;
        require_non_negative("income", "income", income)?;
        require_non_negative("expenses", "expenses", expenses)?;
        let profit = (income - expenses).max(Decimal::ZERO);
        Ok(Self::new(profit * config.corporate_rate))
    }

    pub fn fiscal_losses(mut self, losses: Decimal) -> Self {
        self.fiscal_losses = losses;
        self
    }

    pub fn pph_paid(mut self, paid: Decimal) -> Self {
        self.pph_paid = paid;
        self
    }
}

/// PPh 25 calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph25Result {
    pub prev_year_tax: Decimal,
    pub fiscal_losses: Decimal,
    /// `max(0, prev_year_tax − fiscal_losses)`.
    pub adjusted_base: Decimal,
    pub pph_paid: Decimal,
    /// `max(0, adjusted_base − pph_paid)`.
    pub remaining_tax: Decimal,
    pub installments: u32,
    pub monthly_installment: Decimal,
}

/// Calculate the PPh 25 monthly installment.
pub fn calculate_pph25(
    input: &Pph25Input,
    config: &Pph25Config,
) -> Result<Pph25Result, PajakError> {
    config.validate()?;
    require_non_negative("prev_year_tax", "previous year tax", input.prev_year_tax)?;
    require_non_negative("fiscal_losses", "fiscal losses", input.fiscal_losses)?;
    require_non_negative("pph_paid", "tax paid", input.pph_paid)?;

    let adjusted_base = (input.prev_year_tax - input.fiscal_losses).max(Decimal::ZERO);
    let remaining_tax = (adjusted_base - input.pph_paid).max(Decimal::ZERO);
    let monthly_installment = remaining_tax / Decimal::from(config.installments_per_year);

    log::debug!(
        "PPh 25: base={adjusted_base} remaining={remaining_tax} monthly={monthly_installment}"
    );

    Ok(Pph25Result {
        prev_year_tax: input.prev_year_tax,
        fiscal_losses: input.fiscal_losses,
        adjusted_base,
        pph_paid: input.pph_paid,
        remaining_tax,
        installments: config.installments_per_year,
        monthly_installment,
    })
}
