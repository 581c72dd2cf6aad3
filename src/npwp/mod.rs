//! NPWP (Nomor Pokok Wajib Pajak) format validation.
//!
//! Validation is purely positional: 15 digits split into a 9-digit taxpayer
//! ID, a 3-digit tax office code and a 3-digit status code. There is no
//! checksum and no registry lookup.
//!
//! # Example
//!
//! ```
//! use pajak::npwp::*;
//!
//! let report = validate_npwp("01.234.567.8-901.000");
//! assert!(report.valid);
//! assert_eq!(report.formatted.as_deref(), Some("01.234.567.8-901.000"));
//!
//! // Partial input formats gracefully
//! assert_eq!(format_npwp("0123456"), "01.234.56");
//! ```

mod format;

pub use format::{
    NPWP_DIGITS, Npwp, NpwpComponents, NpwpError, NpwpValidation, format_npwp, validate_npwp,
};
