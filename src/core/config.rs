//! Rate tables and thresholds, one struct per tax type.
//!
//! Every struct defaults to the statutory values in [`super::rates`] and
//! deserializes with `#[serde(default)]`, so a config file only needs to list
//! the values it overrides. Calculators take their section by reference.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PajakError;
use super::rates::*;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    pub pph_final: PphFinalConfig,
    pub pph21: Pph21Config,
    pub pph22: Pph22Rates,
    pub pph23: Pph23Rates,
    pub pph4_ayat2: Pph4Ayat2Rates,
    pub pph24: Pph24Config,
    pub pph25: Pph25Config,
    pub ppn: PpnConfig,
}

/// PPh Final UMKM parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PphFinalConfig {
    pub rate: Decimal,
    pub revenue_ceiling: Decimal,
    pub window_years: u32,
}

impl Default for PphFinalConfig {
    fn default() -> Self {
        Self {
            rate: PPH_FINAL_RATE,
            revenue_ceiling: PPH_FINAL_REVENUE_CEILING,
            window_years: PPH_FINAL_WINDOW_YEARS,
        }
    }
}

/// One progressive bracket. The lower bound is the previous bracket's
/// `upper_bound` (zero for the first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Cumulative upper bound; `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// PTKP (non-taxable income) amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PtkpTable {
    pub base: Decimal,
    pub married: Decimal,
    pub per_dependent: Decimal,
    pub max_dependents: u8,
}

impl Default for PtkpTable {
    fn default() -> Self {
        Self {
            base: PTKP_BASE,
            married: PTKP_MARRIED,
            per_dependent: PTKP_PER_DEPENDENT,
            max_dependents: PTKP_MAX_DEPENDENTS,
        }
    }
}

/// PPh 21 brackets and deduction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pph21Config {
    pub brackets: Vec<TaxBracket>,
    pub ptkp: PtkpTable,
    pub occupational_cost_rate: Decimal,
    pub occupational_cost_cap: Decimal,
    pub jkk_jkm_rate: Decimal,
    pub pension_rate: Decimal,
}

impl Default for Pph21Config {
    fn default() -> Self {
        Self {
            brackets: PPH21_BRACKETS
                .iter()
                .map(|&(upper_bound, rate)| TaxBracket { upper_bound, rate })
                .collect(),
            ptkp: PtkpTable::default(),
            occupational_cost_rate: OCCUPATIONAL_COST_RATE,
            occupational_cost_cap: OCCUPATIONAL_COST_CAP,
            jkk_jkm_rate: JKK_JKM_RATE,
            pension_rate: PENSION_RATE,
        }
    }
}

/// PPh 22 base rates by transaction category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pph22Rates {
    pub import_api: Decimal,
    pub import_non_api: Decimal,
    pub government: Decimal,
    pub fuel: Decimal,
    pub luxury: Decimal,
    pub no_npwp_multiplier: Decimal,
}

impl Default for Pph22Rates {
    fn default() -> Self {
        Self {
            import_api: PPH22_IMPORT_API,
            import_non_api: PPH22_IMPORT_NON_API,
            government: PPH22_GOVERNMENT,
            fuel: PPH22_FUEL,
            luxury: PPH22_LUXURY,
            no_npwp_multiplier: NO_NPWP_MULTIPLIER,
        }
    }
}

/// PPh 23 base rates by income/service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pph23Rates {
    pub dividend: Decimal,
    pub interest: Decimal,
    pub royalty: Decimal,
    pub prize: Decimal,
    pub rental: Decimal,
    pub technical: Decimal,
    pub management: Decimal,
    pub consulting: Decimal,
    pub other_services: Decimal,
    pub no_npwp_multiplier: Decimal,
}

impl Default for Pph23Rates {
    fn default() -> Self {
        Self {
            dividend: PPH23_PASSIVE_INCOME,
            interest: PPH23_PASSIVE_INCOME,
            royalty: PPH23_PASSIVE_INCOME,
            prize: PPH23_PASSIVE_INCOME,
            rental: PPH23_SERVICES,
            technical: PPH23_SERVICES,
            management: PPH23_SERVICES,
            consulting: PPH23_SERVICES,
            other_services: PPH23_SERVICES,
            no_npwp_multiplier: NO_NPWP_MULTIPLIER,
        }
    }
}

/// PPh 4(2) final rates by income category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pph4Ayat2Rates {
    pub land_building_sale: Decimal,
    pub land_building_rental: Decimal,
    pub construction_planning: Decimal,
    pub construction_supervision: Decimal,
    pub construction_small: Decimal,
    pub construction_medium: Decimal,
    pub construction_large: Decimal,
    pub bond_interest: Decimal,
    pub deposit_interest: Decimal,
    pub lottery: Decimal,
}

impl Default for Pph4Ayat2Rates {
    fn default() -> Self {
        Self {
            land_building_sale: PPH4_2_LAND_BUILDING_SALE,
            land_building_rental: PPH4_2_LAND_BUILDING_RENTAL,
            construction_planning: PPH4_2_CONSTRUCTION_PLANNING,
            construction_supervision: PPH4_2_CONSTRUCTION_SUPERVISION,
            construction_small: PPH4_2_CONSTRUCTION_SMALL,
            construction_medium: PPH4_2_CONSTRUCTION_MEDIUM,
            construction_large: PPH4_2_CONSTRUCTION_LARGE,
            bond_interest: PPH4_2_BOND_INTEREST,
            deposit_interest: PPH4_2_DEPOSIT_INTEREST,
            lottery: PPH4_2_LOTTERY,
        }
    }
}

/// PPh 24 domestic rate and treaty table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pph24Config {
    pub domestic_rate: Decimal,
    pub default_treaty_rate: Decimal,
    /// Keyed by upper-case ISO 3166-1 alpha-2 code.
    pub treaty_rates: BTreeMap<String, Decimal>,
}

impl Default for Pph24Config {
    fn default() -> Self {
        Self {
            domestic_rate: CORPORATE_RATE,
            default_treaty_rate: DEFAULT_TREATY_RATE,
            treaty_rates: TREATY_RATES
                .iter()
                .map(|&(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }
}

/// PPh 25 installment parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pph25Config {
    pub corporate_rate: Decimal,
    pub installments_per_year: u32,
}

impl Default for Pph25Config {
    fn default() -> Self {
        Self {
            corporate_rate: CORPORATE_RATE,
            installments_per_year: INSTALLMENTS_PER_YEAR,
        }
    }
}

/// PPN rate and PKP registration threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PpnConfig {
    pub rate: Decimal,
    pub registration_threshold: Decimal,
}

impl Default for PpnConfig {
    fn default() -> Self {
        Self {
            rate: PPN_RATE,
            registration_threshold: PPN_REGISTRATION_THRESHOLD,
        }
    }
}

impl TaxConfig {
    /// Check every section for internal consistency.
    /// Returns all problems found (not just the first).
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.pph_final.check(&mut problems);
        self.pph21.check(&mut problems);
        self.pph22.check(&mut problems);
        self.pph23.check(&mut problems);
        self.pph4_ayat2.check(&mut problems);
        self.pph24.check(&mut problems);
        self.pph25.check(&mut problems);
        self.ppn.check(&mut problems);
        into_result(problems)
    }

    /// Deserialize a (possibly partial) configuration from JSON and validate it.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self, PajakError> {
        let config: Self = serde_json::from_str(json).map_err(json_error)?;
        config.validate()?;
        Ok(config)
    }
}

impl PphFinalConfig {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph_final", problems);
        checks.rate("rate", self.rate);
        checks.non_negative("revenue_ceiling", self.revenue_ceiling);
        checks.at_least_one("window_years", self.window_years);
    }
}

impl Pph21Config {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph21", problems);
        checks.rate("occupational_cost_rate", self.occupational_cost_rate);
        checks.rate("jkk_jkm_rate", self.jkk_jkm_rate);
        checks.rate("pension_rate", self.pension_rate);
        checks.non_negative("occupational_cost_cap", self.occupational_cost_cap);
        checks.non_negative("ptkp.base", self.ptkp.base);
        checks.non_negative("ptkp.married", self.ptkp.married);
        checks.non_negative("ptkp.per_dependent", self.ptkp.per_dependent);
        check_brackets(&self.brackets, &mut checks);
    }
}

impl Pph22Rates {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph22", problems);
        checks.multiplier("no_npwp_multiplier", self.no_npwp_multiplier);
        for (field, rate) in [
            ("import_api", self.import_api),
            ("import_non_api", self.import_non_api),
            ("government", self.government),
            ("fuel", self.fuel),
            ("luxury", self.luxury),
        ] {
            checks.rate(field, rate);
            checks.surcharged_rate(field, rate, self.no_npwp_multiplier);
        }
    }
}

impl Pph23Rates {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph23", problems);
        checks.multiplier("no_npwp_multiplier", self.no_npwp_multiplier);
        for (field, rate) in [
            ("dividend", self.dividend),
            ("interest", self.interest),
            ("royalty", self.royalty),
            ("prize", self.prize),
            ("rental", self.rental),
            ("technical", self.technical),
            ("management", self.management),
            ("consulting", self.consulting),
            ("other_services", self.other_services),
        ] {
            checks.rate(field, rate);
            checks.surcharged_rate(field, rate, self.no_npwp_multiplier);
        }
    }
}

impl Pph4Ayat2Rates {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph4_ayat2", problems);
        for (field, rate) in [
            ("land_building_sale", self.land_building_sale),
            ("land_building_rental", self.land_building_rental),
            ("construction_planning", self.construction_planning),
            ("construction_supervision", self.construction_supervision),
            ("construction_small", self.construction_small),
            ("construction_medium", self.construction_medium),
            ("construction_large", self.construction_large),
            ("bond_interest", self.bond_interest),
            ("deposit_interest", self.deposit_interest),
            ("lottery", self.lottery),
        ] {
            checks.rate(field, rate);
        }
    }
}

impl Pph24Config {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph24", problems);
        checks.rate("domestic_rate", self.domestic_rate);
        checks.rate("default_treaty_rate", self.default_treaty_rate);
        for (code, &rate) in &self.treaty_rates {
            checks.rate(&format!("treaty_rates.{code}"), rate);
        }
    }
}

impl Pph25Config {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("pph25", problems);
        checks.rate("corporate_rate", self.corporate_rate);
        checks.at_least_one("installments_per_year", self.installments_per_year);
    }
}

impl PpnConfig {
    pub fn validate(&self) -> Result<(), PajakError> {
        let mut problems = Vec::new();
        self.check(&mut problems);
        into_result(problems)
    }

    fn check(&self, problems: &mut Vec<String>) {
        let mut checks = Checks::new("ppn", problems);
        checks.rate("rate", self.rate);
        checks.non_negative("registration_threshold", self.registration_threshold);
    }
}

/// Collects problems for one section, prefixing each with the section name.
struct Checks<'a> {
    section: &'static str,
    problems: &'a mut Vec<String>,
}

impl<'a> Checks<'a> {
    fn new(section: &'static str, problems: &'a mut Vec<String>) -> Self {
        Self { section, problems }
    }

    fn push(&mut self, field: &str, message: String) {
        let line = format!("{}.{field} {message}", self.section);
        self.problems.push(line);
    }

    fn rate(&mut self, field: &str, rate: Decimal) {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            self.push(field, format!("must be between 0 and 1, got {rate}"));
        }
    }

    fn non_negative(&mut self, field: &str, amount: Decimal) {
        if amount < Decimal::ZERO {
            self.push(field, format!("must not be negative, got {amount}"));
        }
    }

    fn at_least_one(&mut self, field: &str, value: u32) {
        if value == 0 {
            self.push(field, "must be at least 1".into());
        }
    }

    fn multiplier(&mut self, field: &str, multiplier: Decimal) {
        if multiplier < Decimal::ONE {
            self.push(field, format!("must be at least 1, got {multiplier}"));
        }
    }

    /// `rate × multiplier` is what a payee without NPWP is charged.
    fn surcharged_rate(&mut self, field: &str, rate: Decimal, multiplier: Decimal) {
        match rate.checked_mul(multiplier) {
            Some(surcharged) if surcharged <= Decimal::ONE => {}
            _ => self.push(
                field,
                format!("× no_npwp_multiplier must not exceed 1, got {rate} × {multiplier}"),
            ),
        }
    }
}

fn check_brackets(brackets: &[TaxBracket], checks: &mut Checks<'_>) {
    let Some((last, rest)) = brackets.split_last() else {
        checks.push("brackets", "must not be empty".into());
        return;
    };

    if last.upper_bound.is_some() {
        checks.push("brackets:", "the last bracket must be unbounded".into());
    }

    let mut previous = Decimal::ZERO;
    for (i, bracket) in rest.iter().enumerate() {
        let field = format!("brackets[{i}]:");
        match bracket.upper_bound {
            None => checks.push(&field, "only the last bracket may be unbounded".into()),
            Some(upper) if upper <= previous => {
                let message = format!("upper bound {upper} must exceed {previous}");
                checks.push(&field, message);
            }
            Some(upper) => previous = upper,
        }
    }

    for (i, bracket) in brackets.iter().enumerate() {
        checks.rate(&format!("brackets[{i}].rate"), bracket.rate);
    }
}

#[cfg(feature = "json")]
fn json_error(err: serde_json::Error) -> PajakError {
    PajakError::Config(err.to_string())
}

fn into_result(problems: Vec<String>) -> Result<(), PajakError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(PajakError::Config(problems.join("; ")))
    }
}
