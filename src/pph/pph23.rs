//! PPh Pasal 23 — withholding on passive income, rentals and services.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::withholding::{WithholdingResult, withhold};
use crate::core::{PajakError, Pph23Rates};

/// PPh 23 income and service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pph23Category {
    Dividend,
    Interest,
    Royalty,
    /// Prizes and awards.
    Prize,
    /// Rental of assets other than land and buildings.
    Rental,
    Technical,
    Management,
    Consulting,
    /// Any other service listed in PMK 141/2015.
    Other,
}

impl Pph23Category {
    pub const ALL: [Self; 9] = [
        Self::Dividend,
        Self::Interest,
        Self::Royalty,
        Self::Prize,
        Self::Rental,
        Self::Technical,
        Self::Management,
        Self::Consulting,
        Self::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Dividend => "dividend",
            Self::Interest => "interest",
            Self::Royalty => "royalty",
            Self::Prize => "prize",
            Self::Rental => "rental",
            Self::Technical => "technical",
            Self::Management => "management",
            Self::Consulting => "consulting",
            Self::Other => "other",
        }
    }

    pub fn rate(&self, rates: &Pph23Rates) -> Decimal {
        match self {
            Self::Dividend => rates.dividend,
            Self::Interest => rates.interest,
            Self::Royalty => rates.royalty,
            Self::Prize => rates.prize,
            Self::Rental => rates.rental,
            Self::Technical => rates.technical,
            Self::Management => rates.management,
            Self::Consulting => rates.consulting,
            Self::Other => rates.other_services,
        }
    }
}

impl fmt::Display for Pph23Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Pph23Category {
    type Err = PajakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| PajakError::UnknownCategory {
                kind: "PPh 23",
                value: s.into(),
            })
    }
}

/// PPh 23 calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph23Input {
    pub amount: Decimal,
    pub category: Pph23Category,
    pub has_tax_id: bool,
}

impl Pph23Input {
    /// Input for a payee with an NPWP.
    pub fn new(amount: Decimal, category: Pph23Category) -> Self {
        Self {
            amount,
            category,
            has_tax_id: true,
        }
    }

    pub fn has_tax_id(mut self, has_tax_id: bool) -> Self {
        self.has_tax_id = has_tax_id;
        self
    }
}

pub type Pph23Result = WithholdingResult<Pph23Category>;

/// Calculate PPh 23. The rate doubles (by default) when the payee has no NPWP.
pub fn calculate_pph23(input: &Pph23Input, rates: &Pph23Rates) -> Result<Pph23Result, PajakError> {
    rates.validate()?;
    withhold(
        "PPh 23",
        input.amount,
        input.category,
        input.category.rate(rates),
        input.has_tax_id,
        rates.no_npwp_multiplier,
    )
}
