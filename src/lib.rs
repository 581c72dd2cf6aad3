//! # pajak
//!
//! Tax computation and validation engine for an Indonesian CV (Commanditaire
//! Vennootschap): PPh Final UMKM, PPh 21/22/23/4(2)/24/25, PPN, and NPWP
//! format validation.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Calculators are pure functions: they take an input struct plus the
//! relevant section of [`TaxConfig`], and anything time-dependent takes
//! "today" as an argument.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pajak::core::*;
//! use pajak::pph::*;
//! use rust_decimal_macros::dec;
//!
//! let config = TaxConfig::default();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//!
//! let input = PphFinalInput::new(dec!(1_000_000_000))
//!     .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! let result = calculate_pph_final(&input, &config.pph_final, today).unwrap();
//! assert_eq!(result.tax_amount, dec!(3_000_000));
//! assert!(result.final_rate_applicable());
//!
//! let salary = Pph21Input::new(dec!(100_000_000));
//! assert_eq!(calculate_pph21(&salary, &config.pph21).unwrap().tax_amount, dec!(9_000_000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rate tables, configuration, errors, eligibility window |
//! | `pph` (default) | Income tax calculators |
//! | `ppn` (default) | VAT calculator |
//! | `npwp` (default) | NPWP format validation and formatting |
//! | `json` | `TaxConfig::from_json_str` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pph")]
pub mod pph;

#[cfg(feature = "ppn")]
pub mod ppn;

#[cfg(feature = "npwp")]
pub mod npwp;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
