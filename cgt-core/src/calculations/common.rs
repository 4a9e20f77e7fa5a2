//! Common arithmetic shared by both engines.
//!
//! All amounts are whole won. Intermediate products are floored, never rounded, and
//! subtractions saturate so that absurd inputs still produce a result.

use rust_decimal::Decimal;

use crate::PolicyParams;

/// Drops any fractional won, rounding toward negative infinity.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cgt_core::calculations::common::floor_won;
///
/// assert_eq!(floor_won(dec!(17480000.00)), dec!(17480000));
/// assert_eq!(floor_won(dec!(1099.78)), dec!(1099));
/// assert_eq!(floor_won(dec!(-0.5)), dec!(-1));
/// ```
pub fn floor_won(value: Decimal) -> Decimal {
    value.floor()
}

/// Clamps a value to zero from below.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// National and local tax levied on a tax base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levy {
    pub national: Decimal,
    pub local: Decimal,
    pub total: Decimal,
}

/// Applies the national and local rates to `tax_base`.
///
/// Each tax is floored on its own before they are summed, which can differ by a won
/// from flooring the combined rate.
pub fn levy(
    tax_base: Decimal,
    policy: &PolicyParams,
) -> Levy {
    let national = floor_won(tax_base.saturating_mul(policy.national_tax_rate));
    let local = floor_won(tax_base.saturating_mul(policy.local_tax_rate));

    Levy {
        national,
        local,
        total: national.saturating_add(local),
    }
}
