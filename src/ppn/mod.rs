//! PPN (Pajak Pertambahan Nilai) — value added tax.
//!
//! Only a PKP (Pengusaha Kena Pajak, a VAT-registered business) charges PPN.
//! For everyone else the calculator still reports whether the amount crosses
//! the registration threshold.
//!
//! # Example
//!
//! ```
//! use pajak::core::PpnConfig;
//! use pajak::ppn::*;
//! use rust_decimal_macros::dec;
//!
//! let input = PpnInput::new(dec!(100_000_000)).registered(true).input_tax(dec!(4_000_000));
//! let result = calculate_ppn(&input, &PpnConfig::default()).unwrap();
//! assert_eq!(result.vat, dec!(11_000_000));
//! assert_eq!(result.net_payable, dec!(7_000_000));
//! ```

mod vat;

pub use vat::{PpnInput, PpnResult, PriceMode, calculate_ppn};
