//! Shared rate tables, configuration, errors, and date windows.
//!
//! Every calculator in [`crate::pph`] and [`crate::ppn`] builds on these
//! types; nothing here depends on a specific tax article.

mod config;
mod error;
pub mod money;
pub mod rates;
mod window;

pub use config::*;
pub use error::*;
pub use money::{MAX_AMOUNT, round_rupiah};
pub use window::*;
