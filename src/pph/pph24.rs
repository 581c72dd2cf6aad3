//! PPh Pasal 24 — credit for tax paid abroad.
//!
//! The credit is capped at the Indonesian tax on the same income. Any excess
//! is reported as non-creditable and is not carried anywhere.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{require_non_negative, require_positive, require_rate};
use crate::core::{PajakError, Pph24Config};

/// Country with a tax treaty (P3B) with Indonesia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreatyPartner {
    /// ISO 3166-1 alpha-2.
    pub code: &'static str,
    /// Indonesian country name.
    pub name: &'static str,
}

const fn partner(code: &'static str, name: &'static str) -> TreatyPartner {
    TreatyPartner { code, name }
}

const TREATY_PARTNERS: &[TreatyPartner] = &[
    partner("AT", "Austria"),
    partner("AU", "Australia"),
    partner("BE", "Belgia"),
    partner("CA", "Kanada"),
    partner("CH", "Swiss"),
    partner("CN", "China"),
    partner("DE", "Jerman"),
    partner("DK", "Denmark"),
    partner("FR", "Perancis"),
    partner("GB", "Inggris"),
    partner("IN", "India"),
    partner("IT", "Italia"),
    partner("JP", "Jepang"),
    partner("KR", "Korea Selatan"),
    partner("MY", "Malaysia"),
    partner("NL", "Belanda"),
    partner("NO", "Norwegia"),
    partner("PH", "Filipina"),
    partner("SE", "Swedia"),
    partner("SG", "Singapura"),
    partner("TH", "Thailand"),
    partner("US", "Amerika Serikat"),
    partner("VN", "Vietnam"),
];

/// Known treaty partners, sorted by code.
pub fn treaty_partners() -> &'static [TreatyPartner] {
    TREATY_PARTNERS
}

/// Upper-case, trim, and map the `UK` alias to `GB`.
pub fn normalize_country_code(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    if code == "UK" {
        "GB".to_string()
    } else {
        code
    }
}

/// Treaty withholding rate for `country_code`, or the default rate when the
/// country has no listed rate.
pub fn treaty_rate(country_code: &str, config: &Pph24Config) -> Decimal {
    let code = normalize_country_code(country_code);
    match config.treaty_rates.get(&code) {
        Some(&rate) => rate,
        None => {
            log::warn!(
                "no treaty rate for country '{code}', using default {}",
                config.default_treaty_rate
            );
            config.default_treaty_rate
        }
    }
}

/// Foreign tax, given either as an amount or as a rate on the foreign income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignTax {
    /// Amount paid, in the foreign currency.
    Paid(Decimal),
    /// Fraction of the foreign income.
    Rate(Decimal),
}

/// PPh 24 calculation input. Foreign amounts are in the foreign currency and
/// converted with `exchange_rate` (rupiah per unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph24Input {
    pub foreign_income: Decimal,
    pub foreign_tax: ForeignTax,
    pub country_code: String,
    pub exchange_rate: Decimal,
}

impl Pph24Input {
    /// Input with amounts already in rupiah (exchange rate 1).
    pub fn new(
        foreign_income: Decimal,
        foreign_tax: ForeignTax,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            foreign_income,
            foreign_tax,
            country_code: country_code.into(),
            exchange_rate: Decimal::ONE,
        }
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = rate;
        self
    }
}

/// PPh 24 calculation result. Monetary fields are in rupiah.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph24Result {
    pub foreign_income: Decimal,
    pub exchange_rate: Decimal,
    pub income_idr: Decimal,
    pub foreign_tax_paid: Decimal,
    /// Normalized ISO code.
    pub country_code: String,
    /// Indonesian name of the treaty partner, if the country is one.
    pub treaty_partner: Option<String>,
    /// True when the country has its own entry in the treaty rate table.
    pub treaty_listed: bool,
    pub treaty_rate: Decimal,
    /// `income_idr × treaty_rate`; what the source country may withhold under the treaty.
    pub treaty_withholding_limit: Decimal,
    pub domestic_rate: Decimal,
    /// `income_idr × domestic_rate`; the credit cap.
    pub domestic_tax: Decimal,
    /// `min(foreign_tax_paid, domestic_tax)`.
    pub creditable_tax: Decimal,
    /// `foreign_tax_paid − creditable_tax`.
    pub non_creditable_tax: Decimal,
    /// `creditable_tax / income_idr`.
    pub effective_credit_rate: Decimal,
}

/// Calculate the PPh 24 foreign tax credit.
pub fn calculate_pph24(
    input: &Pph24Input,
    config: &Pph24Config,
) -> Result<Pph24Result, PajakError> {
    config.validate()?;
    require_positive("foreign_income", "foreign income", input.foreign_income)?;
    require_positive("exchange_rate", "exchange rate", input.exchange_rate)?;
    let foreign_tax = match input.foreign_tax {
        ForeignTax::Paid(amount) => {
            require_non_negative("foreign_tax_paid", "foreign tax paid", amount)?;
            amount
        }
        ForeignTax::Rate(rate) => {
            require_rate("foreign_tax_rate", "foreign tax rate", rate)?;
            input.foreign_income * rate
        }
    };

    let income_idr = to_rupiah(input.foreign_income, input.exchange_rate)?;
    require_positive("foreign_income", "foreign income in rupiah", income_idr)?;
    let foreign_tax_paid = to_rupiah(foreign_tax, input.exchange_rate)?;

    let country_code = normalize_country_code(&input.country_code);
    let treaty_listed = config.treaty_rates.contains_key(&country_code);
    let treaty_rate = treaty_rate(&country_code, config);
    let treaty_partner = TREATY_PARTNERS
        .iter()
        .find(|p| p.code == country_code)
        .map(|p| p.name.to_string());

    let domestic_tax = income_idr * config.domestic_rate;
    let creditable_tax = foreign_tax_paid.min(domestic_tax);

    log::debug!(
        "PPh 24: country={country_code} income_idr={income_idr} paid={foreign_tax_paid} \
         cap={domestic_tax} credit={creditable_tax}"
    );

    Ok(Pph24Result {
        foreign_income: input.foreign_income,
        exchange_rate: input.exchange_rate,
        income_idr,
        foreign_tax_paid,
        country_code,
        treaty_partner,
        treaty_listed,
        treaty_rate,
        treaty_withholding_limit: income_idr * treaty_rate,
        domestic_rate: config.domestic_rate,
        domestic_tax,
        creditable_tax,
        non_creditable_tax: foreign_tax_paid - creditable_tax,
        effective_credit_rate: creditable_tax / income_idr,
    })
}

fn to_rupiah(amount: Decimal, exchange_rate: Decimal) -> Result<Decimal, PajakError> {
    amount.checked_mul(exchange_rate).ok_or_else(|| {
        PajakError::invalid(
            "exchange_rate",
            format!("{amount} at exchange rate {exchange_rate} is out of range"),
        )
    })
}
