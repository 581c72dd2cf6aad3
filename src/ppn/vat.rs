use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{require_non_negative, require_positive, require_rate};
use crate::core::{PajakError, PpnConfig};

/// Whether the given amount already contains PPN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    /// Amount is the tax base; PPN is added on top.
    #[default]
    Exclusive,
    /// Amount is the gross price; PPN is extracted from it.
    Inclusive,
}

impl PriceMode {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PriceMode {
    type Err = PajakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(Self::Exclusive),
            "inclusive" => Ok(Self::Inclusive),
            _ => Err(PajakError::UnknownCategory {
                kind: "price mode",
                value: s.into(),
            }),
        }
    }
}

/// PPN calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpnInput {
    /// Sales amount, interpreted per `mode`.
    pub amount: Decimal,
    pub mode: PriceMode,
    /// Overrides [`PpnConfig::rate`].
    pub rate: Option<Decimal>,
    /// PPN paid on purchases (pajak masukan).
    pub input_tax: Decimal,
    /// Whether the seller is a PKP.
    pub registered: bool,
}

impl PpnInput {
    /// Exclusive amount, no input tax, not registered.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            mode: PriceMode::Exclusive,
            rate: None,
            input_tax: Decimal::ZERO,
            registered: false,
        }
    }

    pub fn mode(mut self, mode: PriceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn input_tax(mut self, input_tax: Decimal) -> Self {
        self.input_tax = input_tax;
        self
    }

    pub fn registered(mut self, registered: bool) -> Self {
        self.registered = registered;
        self
    }
}

/// PPN calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpnResult {
    pub amount: Decimal,
    pub mode: PriceMode,
    pub registered: bool,
    /// Applied rate; zero when not registered.
    pub rate: Decimal,
    /// Dasar Pengenaan Pajak (DPP).
    pub tax_base: Decimal,
    /// Output tax (pajak keluaran).
    pub vat: Decimal,
    pub total: Decimal,
    /// Creditable input tax; zero when not registered.
    pub input_tax: Decimal,
    /// `max(0, vat − input_tax)`.
    pub net_payable: Decimal,
    /// `max(0, input_tax − vat)`. Informational only.
    pub excess_input_tax: Decimal,
    /// `amount > registration_threshold`.
    pub exceeds_registration_threshold: bool,
}

/// Calculate PPN for a single amount.
pub fn calculate_ppn(input: &PpnInput, config: &PpnConfig) -> Result<PpnResult, PajakError> {
    config.validate()?;
    require_positive("amount", "amount", input.amount)?;
    require_non_negative("input_tax", "input tax", input.input_tax)?;
    let rate = input.rate.unwrap_or(config.rate);
    require_rate("rate", "PPN rate", rate)?;

    let amount = input.amount;
    let exceeds_registration_threshold = amount > config.registration_threshold;

    if !input.registered {
        log::debug!(
            "PPN: not registered, amount={amount} \
             exceeds_threshold={exceeds_registration_threshold}"
        );
        return Ok(PpnResult {
            amount,
            mode: input.mode,
            registered: false,
            rate: Decimal::ZERO,
            tax_base: amount,
            vat: Decimal::ZERO,
            total: amount,
            input_tax: Decimal::ZERO,
            net_payable: Decimal::ZERO,
            excess_input_tax: Decimal::ZERO,
            exceeds_registration_threshold,
        });
    }

    let (tax_base, vat, total) = match input.mode {
        PriceMode::Exclusive => {
            let vat = amount * rate;
            (amount, vat, amount + vat)
        }
        PriceMode::Inclusive => {
            let base = amount / (Decimal::ONE + rate);
            (base, amount - base, amount)
        }
    };
    let net_payable = (vat - input.input_tax).max(Decimal::ZERO);
    let excess_input_tax = (input.input_tax - vat).max(Decimal::ZERO);

    log::debug!(
        "PPN: mode={} rate={rate} base={tax_base} vat={vat} payable={net_payable}",
        input.mode
    );

    Ok(PpnResult {
        amount,
        mode: input.mode,
        registered: true,
        rate,
        tax_base,
        vat,
        total,
        input_tax: input.input_tax,
        net_payable,
        excess_input_tax,
        exceeds_registration_threshold,
    })
}
