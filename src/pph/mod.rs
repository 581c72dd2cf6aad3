//! Income tax (Pajak Penghasilan) calculators.
//!
//! | Article | Function |
//! |---------|----------|
//! | PPh Final UMKM | [`calculate_pph_final`] |
//! | PPh 21 | [`calculate_pph21`] |
//! | PPh 22 | [`calculate_pph22`] |
//! | PPh 23 | [`calculate_pph23`] |
//! | PPh 4(2) | [`calculate_pph4_ayat2`] |
//! | PPh 24 | [`calculate_pph24`] |
//! | PPh 25 | [`calculate_pph25`] |
//!
//! Each calculator takes its input struct and the matching section of
//! [`TaxConfig`](crate::core::TaxConfig).
//!
//! # Example
//!
//! ```
//! use pajak::core::TaxConfig;
//! use pajak::pph::*;
//! use rust_decimal_macros::dec;
//!
//! let config = TaxConfig::default();
//! let input = Pph23Input::new(dec!(50_000_000), Pph23Category::Rental).has_tax_id(false);
//! let result = calculate_pph23(&input, &config.pph23).unwrap();
//! assert_eq!(result.tax_amount, dec!(2_000_000));
//! ```

mod final_umkm;
mod pph4_2;
mod pph21;
mod pph22;
mod pph23;
mod pph24;
mod pph25;
mod withholding;

pub use final_umkm::*;
pub use pph4_2::*;
pub use pph21::*;
pub use pph22::*;
pub use pph23::*;
pub use pph24::*;
pub use pph25::*;
pub use withholding::WithholdingResult;
