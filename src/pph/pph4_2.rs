//! PPh Pasal 4 ayat (2) — final tax on property, construction and passive income.
//!
//! Rate resolution is a chain: income type, then construction phase, then
//! implementation scale. The typed API makes an incomplete chain impossible;
//! [`FinalIncomeCategory::from_selectors`] does the same resolution for loose
//! string keys and reports exactly which selector is missing.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::require_positive;
use crate::core::{PajakError, Pph4Ayat2Rates};

/// Scale of a construction implementation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionScale {
    Small,
    Medium,
    Large,
}

impl ConstructionScale {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ConstructionScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConstructionScale {
    type Err = PajakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|scale| scale.key() == key)
            .ok_or(PajakError::UnknownCategory {
                kind: "construction scale",
                value: key,
            })
    }
}

/// Construction service phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionService {
    Planning,
    Implementation(ConstructionScale),
    Supervision,
}

impl ConstructionService {
    fn from_selectors(phase: Option<&str>, scale: Option<&str>) -> Result<Self, PajakError> {
        let phase = required(phase, "construction phase")?;
        match phase.as_str() {
            "planning" => Ok(Self::Planning),
            "supervision" => Ok(Self::Supervision),
            "implementation" => {
                let scale = required(scale, "construction scale")?;
                Ok(Self::Implementation(scale.parse()?))
            }
            _ => Err(PajakError::UnknownCategory {
                kind: "construction phase",
                value: phase,
            }),
        }
    }

    /// Number of `/`-separated segments in the display form.
    fn segments(&self) -> usize {
        match self {
            Self::Implementation(_) => 2,
            Self::Planning | Self::Supervision => 1,
        }
    }
}

impl fmt::Display for ConstructionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planning => f.write_str("planning"),
            Self::Implementation(scale) => write!(f, "implementation/{scale}"),
            Self::Supervision => f.write_str("supervision"),
        }
    }
}

/// Parses `planning`, `supervision` or `implementation/<scale>`.
impl FromStr for ConstructionService {
    type Err = PajakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let phase = parts.next();
        let scale = parts.next();
        let service = Self::from_selectors(phase, scale)?;
        if s.split('/').count() != service.segments() {
            return Err(PajakError::UnknownCategory {
                kind: "construction phase",
                value: s.trim().into(),
            });
        }
        Ok(service)
    }
}

/// Income subject to PPh 4(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalIncomeCategory {
    /// Transfer of rights to land and/or buildings.
    LandBuildingSale,
    /// Rental of land and/or buildings.
    LandBuildingRental,
    Construction(ConstructionService),
    BondInterest,
    /// Deposit and savings interest.
    DepositInterest,
    /// Lottery prizes.
    Lottery,
}

impl FinalIncomeCategory {
    pub const ALL: [Self; 10] = [
        Self::LandBuildingSale,
        Self::LandBuildingRental,
        Self::Construction(ConstructionService::Planning),
        Self::Construction(ConstructionService::Implementation(ConstructionScale::Small)),
        Self::Construction(ConstructionService::Implementation(ConstructionScale::Medium)),
        Self::Construction(ConstructionService::Implementation(ConstructionScale::Large)),
        Self::Construction(ConstructionService::Supervision),
        Self::BondInterest,
        Self::DepositInterest,
        Self::Lottery,
    ];

    /// Resolve loose selector keys into a category.
    ///
    /// `phase` is required when `income_type` is `construction`; `scale` is
    /// required when `phase` is `implementation`. Selectors that are not
    /// needed are ignored.
    pub fn from_selectors(
        income_type: &str,
        phase: Option<&str>,
        scale: Option<&str>,
    ) -> Result<Self, PajakError> {
        let income_type = income_type.trim().to_ascii_lowercase();
        let category = match income_type.as_str() {
            "land_building_sale" => Self::LandBuildingSale,
            "land_building_rental" => Self::LandBuildingRental,
            "bond_interest" => Self::BondInterest,
            "deposit_interest" => Self::DepositInterest,
            "lottery" => Self::Lottery,
            "construction" => {
                Self::Construction(ConstructionService::from_selectors(phase, scale)?)
            }
            _ => {
                return Err(PajakError::UnknownCategory {
                    kind: "PPh 4(2)",
                    value: income_type,
                });
            }
        };
        Ok(category)
    }

    pub fn rate(&self, rates: &Pph4Ayat2Rates) -> Decimal {
        match self {
            Self::LandBuildingSale => rates.land_building_sale,
            Self::LandBuildingRental => rates.land_building_rental,
            Self::Construction(ConstructionService::Planning) => rates.construction_planning,
            Self::Construction(ConstructionService::Supervision) => {
                rates.construction_supervision
            }
            Self::Construction(ConstructionService::Implementation(scale)) => match scale {
                ConstructionScale::Small => rates.construction_small,
                ConstructionScale::Medium => rates.construction_medium,
                ConstructionScale::Large => rates.construction_large,
            },
            Self::BondInterest => rates.bond_interest,
            Self::DepositInterest => rates.deposit_interest,
            Self::Lottery => rates.lottery,
        }
    }

    fn segments(&self) -> usize {
        match self {
            Self::Construction(service) => 1 + service.segments(),
            _ => 1,
        }
    }
}

impl fmt::Display for FinalIncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LandBuildingSale => f.write_str("land_building_sale"),
            Self::LandBuildingRental => f.write_str("land_building_rental"),
            Self::Construction(service) => write!(f, "construction/{service}"),
            Self::BondInterest => f.write_str("bond_interest"),
            Self::DepositInterest => f.write_str("deposit_interest"),
            Self::Lottery => f.write_str("lottery"),
        }
    }
}

/// Parses the display form, e.g. `lottery` or `construction/implementation/small`.
/// Segments beyond what the income type needs are rejected.
impl FromStr for FinalIncomeCategory {
    type Err = PajakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let income_type = parts.next().unwrap_or_default();
        let phase = parts.next();
        let scale = parts.next();
        let category = Self::from_selectors(income_type, phase, scale)?;
        if s.split('/').count() != category.segments() {
            return Err(PajakError::UnknownCategory {
                kind: "PPh 4(2)",
                value: s.trim().into(),
            });
        }
        Ok(category)
    }
}

/// Trimmed, lowercased selector, or the missing-selector error when absent or blank.
fn required(selector: Option<&str>, name: &'static str) -> Result<String, PajakError> {
    selector
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or(PajakError::MissingSelector { selector: name })
}

/// PPh 4(2) calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph4Ayat2Input {
    pub amount: Decimal,
    pub category: FinalIncomeCategory,
}

impl Pph4Ayat2Input {
    pub fn new(amount: Decimal, category: FinalIncomeCategory) -> Self {
        Self { amount, category }
    }
}

/// PPh 4(2) calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pph4Ayat2Result {
    pub amount: Decimal,
    pub category: FinalIncomeCategory,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub net_amount: Decimal,
}

/// Calculate final PPh 4(2) on a gross amount.
pub fn calculate_pph4_ayat2(
    input: &Pph4Ayat2Input,
    rates: &Pph4Ayat2Rates,
) -> Result<Pph4Ayat2Result, PajakError> {
    rates.validate()?;
    require_positive("amount", "amount", input.amount)?;

    let tax_rate = input.category.rate(rates);
    let tax_amount = input.amount * tax_rate;
    log::debug!(
        "PPh 4(2): category={} rate={tax_rate} tax={tax_amount}",
        input.category
    );

    Ok(Pph4Ayat2Result {
        amount: input.amount,
        category: input.category,
        tax_rate,
        tax_amount,
        net_amount: input.amount - tax_amount,
    })
}
