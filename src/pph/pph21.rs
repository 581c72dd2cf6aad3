//! PPh Pasal 21 — progressive withholding on personal income.
//!
//! Amounts are annual. Deductions are opt-in: an input with none of them set
//! taxes the full gross income.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{require_non_negative, require_positive};
use crate::core::rates::PTKP_MAX_DEPENDENTS;
use crate::core::{PajakError, Pph21Config, PtkpTable, TaxBracket, round_rupiah};

/// PTKP status: `TK/n` (single) or `K/n` (married) with `n` dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PtkpStatus {
    pub married: bool,
    pub dependents: u8,
}

impl PtkpStatus {
    pub fn single(dependents: u8) -> Self {
        Self {
            married: false,
            dependents,
        }
    }

    pub fn married(dependents: u8) -> Self {
        Self {
            married: true,
            dependents,
        }
    }

    /// Annual PTKP amount. Dependents beyond the table maximum do not count,
    /// so `married(5)` is worth the same as `married(3)` under the default table.
    pub fn amount(&self, table: &PtkpTable) -> Decimal {
        let dependents = self.dependents.min(table.max_dependents);
        let mut amount = table.base + table.per_dependent * Decimal::from(dependents);
        if self.married {
            amount += table.married;
        }
        amount
    }
}

impl fmt::Display for PtkpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.married { "K" } else { "TK" };
        write!(f, "{prefix}/{}", self.dependents)
    }
}

impl FromStr for PtkpStatus {
    type Err = PajakError;

    /// Accepts `TK/0`, `tk0`, `K/3` and similar. At most one `/`, digits
    /// only, and no more dependents than [`PTKP_MAX_DEPENDENTS`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PajakError::UnknownCategory {
            kind: "PTKP status",
            value: s.into(),
        };
        let code = s.trim().to_ascii_uppercase();
        let (married, rest) = if let Some(rest) = code.strip_prefix("TK") {
            (false, rest)
        } else if let Some(rest) = code.strip_prefix('K') {
            (true, rest)
        } else {
            return Err(unknown());
        };
        let digits = rest.strip_prefix('/').unwrap_or(rest);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        let dependents: u8 = digits.parse().map_err(|_| unknown())?;
        if dependents > PTKP_MAX_DEPENDENTS {
            return Err(unknown());
        }
        Ok(Self {
            married,
            dependents,
        })
    }
}

/// PPh 21 calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph21Input {
    /// Annual gross income.
    pub gross_income: Decimal,
    pub ptkp: Option<PtkpStatus>,
    /// Deduct biaya jabatan (5%, capped).
    pub occupational_cost: bool,
    /// Deduct JKK/JKM insurance contributions.
    pub jkk_jkm: bool,
    /// Deduct pension contributions.
    pub pension: bool,
    /// Any further flat deductions.
    pub other_deductions: Decimal,
}

impl Pph21Input {
    pub fn new(gross_income: Decimal) -> Self {
        Self {
            gross_income,
            ptkp: None,
            occupational_cost: false,
            jkk_jkm: false,
            pension: false,
            other_deductions: Decimal::ZERO,
        }
    }

    pub fn ptkp(mut self, status: PtkpStatus) -> Self {
        self.ptkp = Some(status);
        self
    }

    pub fn occupational_cost(mut self) -> Self {
        self.occupational_cost = true;
        self
    }

    pub fn jkk_jkm(mut self) -> Self {
        self.jkk_jkm = true;
        self
    }

    pub fn pension(mut self) -> Self {
        self.pension = true;
        self
    }

    pub fn other_deductions(mut self, amount: Decimal) -> Self {
        self.other_deductions = amount;
        self
    }
}

/// Deductions applied before the bracket table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pph21Deductions {
    pub jkk_jkm: Decimal,
    pub pension: Decimal,
    pub occupational: Decimal,
    /// PTKP.
    pub personal: Decimal,
    pub other: Decimal,
    pub total: Decimal,
}

/// Tax attributed to one bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTax {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    /// Portion of taxable income falling in this bracket.
    pub taxable: Decimal,
    /// Unrounded `taxable × rate`.
    pub tax: Decimal,
}

/// PPh 21 calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph21Result {
    pub gross_income: Decimal,
    pub deductions: Pph21Deductions,
    /// `max(0, gross_income − deductions.total)`.
    pub taxable_income: Decimal,
    /// Only brackets that received income are listed.
    pub brackets: Vec<BracketTax>,
    /// Annual tax, rounded to whole rupiah.
    pub tax_amount: Decimal,
    /// `tax_amount / 12`, rounded to whole rupiah.
    pub monthly_tax_amount: Decimal,
    pub net_income: Decimal,
    /// `tax_amount / gross_income`.
    pub effective_rate: Decimal,
}

/// Split `taxable` across `brackets`, lowest first.
pub fn bracket_breakdown(taxable: Decimal, brackets: &[TaxBracket]) -> Vec<BracketTax> {
    let mut out = Vec::new();
    let mut remaining = taxable;
    let mut lower_bound = Decimal::ZERO;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }
        let portion = match bracket.upper_bound {
            Some(upper) => remaining.min(upper - lower_bound),
            None => remaining,
        };
        if portion > Decimal::ZERO {
            out.push(BracketTax {
                lower_bound,
                upper_bound: bracket.upper_bound,
                rate: bracket.rate,
                taxable: portion,
                tax: portion * bracket.rate,
            });
        }
        remaining -= portion;
        if let Some(upper) = bracket.upper_bound {
            lower_bound = upper;
        }
    }
    out
}

/// Progressive tax on `taxable`, unrounded.
pub fn progressive_tax(taxable: Decimal, brackets: &[TaxBracket]) -> Decimal {
    bracket_breakdown(taxable, brackets)
        .iter()
        .map(|b| b.tax)
        .sum()
}

/// Calculate annual PPh 21.
///
/// The configuration is validated first, so a bracket table out of order or a
/// deduction rate above 1 is reported as [`PajakError::Config`].
pub fn calculate_pph21(
    input: &Pph21Input,
    config: &Pph21Config,
) -> Result<Pph21Result, PajakError> {
    config.validate()?;
    let gross = input.gross_income;
    require_positive("gross_income", "gross income", gross)?;
    require_non_negative(
        "other_deductions",
        "other deductions",
        input.other_deductions,
    )?;

    let mut deductions = Pph21Deductions {
        other: input.other_deductions,
        ..Default::default()
    };
    if input.jkk_jkm {
        deductions.jkk_jkm = gross * config.jkk_jkm_rate;
    }
    if input.pension {
        deductions.pension = gross * config.pension_rate;
    }
    if input.occupational_cost {
        deductions.occupational =
            (gross * config.occupational_cost_rate).min(config.occupational_cost_cap);
    }
    if let Some(status) = input.ptkp {
        deductions.personal = status.amount(&config.ptkp);
    }
    deductions.total = deductions.jkk_jkm
        + deductions.pension
        + deductions.occupational
        + deductions.personal
        + deductions.other;

    let taxable_income = (gross - deductions.total).max(Decimal::ZERO);
    let brackets = bracket_breakdown(taxable_income, &config.brackets);
    let tax_amount = round_rupiah(brackets.iter().map(|b| b.tax).sum());

    log::debug!(
        "PPh 21: gross={gross} deductions={} taxable={taxable_income} tax={tax_amount}",
        deductions.total
    );

    Ok(Pph21Result {
        gross_income: gross,
        deductions,
        taxable_income,
        brackets,
        tax_amount,
        monthly_tax_amount: round_rupiah(tax_amount / Decimal::from(12)),
        net_income: gross - tax_amount,
        effective_rate: tax_amount / gross,
    })
}
