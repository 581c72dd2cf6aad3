//! PPh Pasal 22 — withholding on imports and certain purchases.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::withholding::{WithholdingResult, withhold};
use crate::core::{PajakError, Pph22Rates};

/// PPh 22 transaction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pph22Category {
    /// Import by a holder of an import license (API).
    Import,
    /// Import without an API.
    ImportNonApi,
    /// Goods purchased by government treasurers.
    Government,
    /// Fuel sold by Pertamina and other distributors.
    Fuel,
    /// Very luxurious goods.
    Luxury,
}

impl Pph22Category {
    pub const ALL: [Self; 5] = [
        Self::Import,
        Self::ImportNonApi,
        Self::Government,
        Self::Fuel,
        Self::Luxury,
    ];

    /// Stable key used by [`FromStr`] and serde.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::ImportNonApi => "import_non_api",
            Self::Government => "government",
            Self::Fuel => "fuel",
            Self::Luxury => "luxury",
        }
    }

    /// Base rate (payee has an NPWP).
    pub fn rate(&self, rates: &Pph22Rates) -> Decimal {
        match self {
            Self::Import => rates.import_api,
            Self::ImportNonApi => rates.import_non_api,
            Self::Government => rates.government,
            Self::Fuel => rates.fuel,
            Self::Luxury => rates.luxury,
        }
    }
}

impl fmt::Display for Pph22Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Pph22Category {
    type Err = PajakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| PajakError::UnknownCategory {
                kind: "PPh 22",
                value: s.into(),
            })
    }
}

/// PPh 22 calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph22Input {
    pub amount: Decimal,
    pub category: Pph22Category,
    pub has_tax_id: bool,
}

impl Pph22Input {
    /// Input for a payee with an NPWP.
    pub fn new(amount: Decimal, category: Pph22Category) -> Self {
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

pub type Pph22Result = WithholdingResult<Pph22Category>;

/// Calculate PPh 22. The rate doubles (by default) when the payee has no NPWP.
pub fn calculate_pph22(input: &Pph22Input, rates: &Pph22Rates) -> Result<Pph22Result, PajakError> {
    rates.validate()?;
    withhold(
        "PPh 22",
        input.amount,
        input.category,
        input.category.rate(rates),
        input.has_tax_id,
        rates.no_npwp_multiplier,
    )
}
