//! Statutory rates and thresholds.
//!
//! These are the compiled-in defaults behind every configuration struct in
//! [`super::config`]. Rates are fractions (`0.003` = 0.3%).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// --- PPh Final UMKM (PP 55/2022) ---

/// Presumptive rate on gross revenue.
pub const PPH_FINAL_RATE: Decimal = dec!(0.003);
/// Annual gross revenue ceiling for UMKM status.
pub const PPH_FINAL_REVENUE_CEILING: Decimal = dec!(4_800_000_000);
/// Years a CV may use the final rate.
pub const PPH_FINAL_WINDOW_YEARS: u32 = 4;

// --- PPh 21 (UU HPP) ---

/// Progressive brackets as (cumulative upper bound, rate). `None` = unbounded.
pub const PPH21_BRACKETS: [(Option<Decimal>, Decimal); 5] = [
    (Some(dec!(60_000_000)), dec!(0.05)),
    (Some(dec!(250_000_000)), dec!(0.15)),
    (Some(dec!(500_000_000)), dec!(0.25)),
    (Some(dec!(5_000_000_000)), dec!(0.30)),
    (None, dec!(0.35)),
];

/// PTKP for a single taxpayer without dependents (TK/0).
pub const PTKP_BASE: Decimal = dec!(54_000_000);
/// PTKP addition for a married taxpayer.
pub const PTKP_MARRIED: Decimal = dec!(4_500_000);
/// PTKP addition per dependent.
pub const PTKP_PER_DEPENDENT: Decimal = dec!(4_500_000);
/// Dependents counted towards PTKP.
pub const PTKP_MAX_DEPENDENTS: u8 = 3;

/// Biaya jabatan: 5% of gross income…
pub const OCCUPATIONAL_COST_RATE: Decimal = dec!(0.05);
/// …capped at Rp 6,000,000 per year.
pub const OCCUPATIONAL_COST_CAP: Decimal = dec!(6_000_000);
/// JKK 0.24% + JKM 0.5%.
pub const JKK_JKM_RATE: Decimal = dec!(0.0074);
pub const PENSION_RATE: Decimal = dec!(0.02);

// --- PPh 22 ---

pub const PPH22_IMPORT_API: Decimal = dec!(0.025);
pub const PPH22_IMPORT_NON_API: Decimal = dec!(0.075);
pub const PPH22_GOVERNMENT: Decimal = dec!(0.015);
pub const PPH22_FUEL: Decimal = dec!(0.0025);
pub const PPH22_LUXURY: Decimal = dec!(0.05);

// --- PPh 23 ---

/// Dividends, interest, royalties and prizes.
pub const PPH23_PASSIVE_INCOME: Decimal = dec!(0.15);
/// Rental (other than land/buildings) and services.
pub const PPH23_SERVICES: Decimal = dec!(0.02);

/// Rate multiplier when the payee has no NPWP (PPh 22 and PPh 23).
pub const NO_NPWP_MULTIPLIER: Decimal = dec!(2);

// --- PPh 4(2) ---

pub const PPH4_2_LAND_BUILDING_SALE: Decimal = dec!(0.025);
pub const PPH4_2_LAND_BUILDING_RENTAL: Decimal = dec!(0.10);
pub const PPH4_2_CONSTRUCTION_PLANNING: Decimal = dec!(0.04);
pub const PPH4_2_CONSTRUCTION_SUPERVISION: Decimal = dec!(0.04);
pub const PPH4_2_CONSTRUCTION_SMALL: Decimal = dec!(0.02);
pub const PPH4_2_CONSTRUCTION_MEDIUM: Decimal = dec!(0.03);
pub const PPH4_2_CONSTRUCTION_LARGE: Decimal = dec!(0.04);
pub const PPH4_2_BOND_INTEREST: Decimal = dec!(0.15);
pub const PPH4_2_DEPOSIT_INTEREST: Decimal = dec!(0.20);
pub const PPH4_2_LOTTERY: Decimal = dec!(0.25);

// --- PPh 24 / PPh 25 ---

/// Domestic corporate income tax rate (PPh Badan).
pub const CORPORATE_RATE: Decimal = dec!(0.22);
/// Withholding rate assumed for countries without a listed treaty rate.
pub const DEFAULT_TREATY_RATE: Decimal = dec!(0.20);

/// Treaty rates by ISO 3166-1 alpha-2 code.
pub const TREATY_RATES: &[(&str, Decimal)] = &[
    ("AU", dec!(0.15)),
    ("CN", dec!(0.10)),
    ("DE", dec!(0.10)),
    ("GB", dec!(0.10)),
    ("JP", dec!(0.10)),
    ("KR", dec!(0.10)),
    ("MY", dec!(0.10)),
    ("NL", dec!(0.10)),
    ("SG", dec!(0.10)),
    ("US", dec!(0.10)),
];

pub const INSTALLMENTS_PER_YEAR: u32 = 12;

// --- PPN ---

pub const PPN_RATE: Decimal = dec!(0.11);
/// Annual turnover above which PKP registration is mandatory.
pub const PPN_REGISTRATION_THRESHOLD: Decimal = dec!(4_800_000_000);
