//! Flat-rate withholding shared by PPh 22 and PPh 23.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::PajakError;
use crate::core::money::{require_positive, require_rate};

/// Result of a flat-rate, NPWP-sensitive withholding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithholdingResult<C> {
    pub amount: Decimal,
    pub category: C,
    pub has_tax_id: bool,
    /// Rate for the category before any surcharge.
    pub base_rate: Decimal,
    /// Rate actually applied (`base_rate × multiplier` without NPWP).
    pub effective_rate: Decimal,
    pub tax_amount: Decimal,
    /// `amount − tax_amount`.
    pub net_amount: Decimal,
}

/// Apply `base_rate` to `amount`, multiplying the rate when the payee has no NPWP.
pub(crate) fn withhold<C>(
    article: &str,
    amount: Decimal,
    category: C,
    base_rate: Decimal,
    has_tax_id: bool,
    no_npwp_multiplier: Decimal,
) -> Result<WithholdingResult<C>, PajakError>
where
    C: std::fmt::Debug,
{
    require_positive("amount", "amount", amount)?;
    require_rate("base_rate", "base rate", base_rate)?;

    let effective_rate = if has_tax_id {
        base_rate
    } else {
        base_rate
            .checked_mul(no_npwp_multiplier)
            .filter(|rate| *rate >= Decimal::ZERO && *rate <= Decimal::ONE)
            .ok_or_else(|| {
                PajakError::Config(format!(
                    "{article}: base rate {base_rate} × no-NPWP multiplier \
                     {no_npwp_multiplier} must be between 0 and 1"
                ))
            })?
    };
    let tax_amount = amount * effective_rate;

    log::debug!(
        "{article}: category={category:?} has_tax_id={has_tax_id} \
         rate={effective_rate} tax={tax_amount}"
    );

    Ok(WithholdingResult {
        amount,
        category,
        has_tax_id,
        base_rate,
        effective_rate,
        tax_amount,
        net_amount: amount - tax_amount,
    })
}
