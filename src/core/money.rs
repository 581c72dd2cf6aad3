//! Rupiah amount checks and rounding.
//!
//! The engine works on already-parsed [`Decimal`] values. Every calculator
//! runs its monetary inputs through these checks before doing arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::PajakError;

/// Largest accepted input amount (10^18 rupiah).
///
/// Keeps every product with a rate far away from `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000_000);

/// Round to the nearest whole rupiah, halves away from zero.
pub fn round_rupiah(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Require `value > 0` and within [`MAX_AMOUNT`].
pub(crate) fn require_positive(
    field: &'static str,
    label: &str,
    value: Decimal,
) -> Result<(), PajakError> {
    if value <= Decimal::ZERO {
        return Err(PajakError::invalid(
            field,
            format!("{label} must be positive, got {value}"),
        ));
    }
    require_bounded(field, label, value)
}

/// Require `value >= 0` and within [`MAX_AMOUNT`].
pub(crate) fn require_non_negative(
    field: &'static str,
    label: &str,
    value: Decimal,
) -> Result<(), PajakError> {
    if value < Decimal::ZERO {
        return Err(PajakError::invalid(
            field,
            format!("{label} must not be negative, got {value}"),
        ));
    }
    require_bounded(field, label, value)
}

/// Require a rate fraction in `0..=1`.
pub(crate) fn require_rate(
    field: &'static str,
    label: &str,
    rate: Decimal,
) -> Result<(), PajakError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(PajakError::invalid(
            field,
            format!("{label} must be between 0 and 1, got {rate}"),
        ));
    }
    Ok(())
}

fn require_bounded(field: &'static str, label: &str, value: Decimal) -> Result<(), PajakError> {
    if value > MAX_AMOUNT {
        return Err(PajakError::invalid(
            field,
            format!("{label} exceeds the supported maximum of {MAX_AMOUNT}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_rupiah(dec!(10.5)), dec!(11));
        assert_eq!(round_rupiah(dec!(10.49)), dec!(10));
        assert_eq!(round_rupiah(dec!(-10.5)), dec!(-11));
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(require_positive("amount", "amount", dec!(0)).is_err());
        assert!(require_positive("amount", "amount", dec!(-1)).is_err());
        assert!(require_positive("amount", "amount", dec!(0.01)).is_ok());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(require_non_negative("pph_paid", "PPh paid", dec!(0)).is_ok());
        assert!(require_non_negative("pph_paid", "PPh paid", dec!(-0.01)).is_err());
    }

    #[test]
    fn huge_amount_rejected() {
        let err = require_positive("amount", "amount", MAX_AMOUNT + dec!(1)).unwrap_err();
        assert!(err.to_string().contains("supported maximum"));
        assert!(require_positive("amount", "amount", MAX_AMOUNT).is_ok());
    }

    #[test]
    fn rate_bounds() {
        assert!(require_rate("rate", "rate", dec!(0)).is_ok());
        assert!(require_rate("rate", "rate", dec!(1)).is_ok());
        assert!(require_rate("rate", "rate", dec!(1.01)).is_err());
        assert!(require_rate("rate", "rate", dec!(-0.1)).is_err());
    }

    #[test]
    fn message_names_the_field() {
        let err = require_positive("gross_income", "gross income", dec!(0)).unwrap_err();
        match err {
            PajakError::InvalidInput(v) => {
                assert_eq!(v.field, "gross_income");
                assert!(v.message.starts_with("gross income must be positive"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
