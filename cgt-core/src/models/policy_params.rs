//! Versioned policy parameters for the capital-gains calculation.
//!
//! Every rate and limit the engines use lives here, so a future amendment is a change
//! of values (or a policy file) rather than a change of code.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ReturnQuarter;

/// Errors reported when a set of policy parameters is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The version tag must not be blank.
    #[error("policy version must not be empty")]
    EmptyVersion,

    /// A rate must lie between 0 and 1 inclusive.
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: &'static str, value: Decimal },

    /// An amount (deduction or limit) must be non-negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },
}

/// Rates and limits for one version of the capital-gains rules.
///
/// Missing fields in a deserialized policy fall back to [`PolicyParams::amendment_2026`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use cgt_core::{PolicyParams, ReturnQuarter};
///
/// let policy = PolicyParams::amendment_2026();
///
/// assert_eq!(policy.basic_deduction, dec!(2500000));
/// assert_eq!(policy.combined_tax_rate(), dec!(0.22));
/// assert_eq!(policy.ria_discount_rate(ReturnQuarter::Q2), dec!(0.80));
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyParams {
    /// Identifies the rule set these values belong to.
    pub version: String,

    /// Annual basic deduction on capital-gain income.
    pub basic_deduction: Decimal,

    /// National capital-gains tax rate.
    pub national_tax_rate: Decimal,

    /// Local income tax rate, levied on the same base.
    pub local_tax_rate: Decimal,

    /// Maximum capital gain eligible for the RIA exemption.
    pub ria_limit: Decimal,

    /// RIA exemption rate for a return in the first quarter of 2026.
    pub ria_discount_q1: Decimal,

    /// RIA exemption rate for a return in the second quarter of 2026.
    pub ria_discount_q2: Decimal,

    /// RIA exemption rate for a return in the second half of 2026.
    pub ria_discount_h2: Decimal,

    /// Recognition limit on the hedged amount.
    pub hedge_limit: Decimal,

    /// Share of the recognised hedge amount that becomes an income deduction.
    pub hedge_deduction_rate: Decimal,

    /// Absolute cap on the hedge deduction.
    pub hedge_max_deduction: Decimal,
}

impl PolicyParams {
    /// The 2026 amendment as announced on 2025-12-24.
    pub fn amendment_2026() -> Self {
        Self {
            version: "2026-amendment".to_string(),
            basic_deduction: dec!(2500000),
            national_tax_rate: dec!(0.20),
            local_tax_rate: dec!(0.02),
            ria_limit: dec!(50000000),
            ria_discount_q1: dec!(1.00),
            ria_discount_q2: dec!(0.80),
            ria_discount_h2: dec!(0.50),
            hedge_limit: dec!(100000000),
            hedge_deduction_rate: dec!(0.05),
            hedge_max_deduction: dec!(5000000),
        }
    }

    /// National and local rates together.
    pub fn combined_tax_rate(&self) -> Decimal {
        self.national_tax_rate.saturating_add(self.local_tax_rate)
    }

    /// RIA exemption rate for the quarter in which funds return home.
    pub fn ria_discount_rate(
        &self,
        quarter: ReturnQuarter,
    ) -> Decimal {
        match quarter {
            ReturnQuarter::Q1 => self.ria_discount_q1,
            ReturnQuarter::Q2 => self.ria_discount_q2,
            ReturnQuarter::H2 => self.ria_discount_h2,
        }
    }

    /// Hedge deduction produced by a hedged amount.
    ///
    /// The amount is clamped to zero, limited to [`hedge_limit`](Self::hedge_limit),
    /// multiplied by the deduction rate and capped at
    /// [`hedge_max_deduction`](Self::hedge_max_deduction). Input forms use this to
    /// preview the deduction before the full calculation runs.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cgt_core::PolicyParams;
    ///
    /// let policy = PolicyParams::amendment_2026();
    ///
    /// assert_eq!(policy.hedge_deduction_for(dec!(30000000)), dec!(1500000));
    /// assert_eq!(policy.hedge_deduction_for(dec!(300000000)), dec!(5000000));
    /// assert_eq!(policy.hedge_deduction_for(dec!(-1)), dec!(0));
    /// ```
    pub fn hedge_deduction_for(
        &self,
        hedge_amount: Decimal,
    ) -> Decimal {
        let recognised = hedge_amount.max(Decimal::ZERO).min(self.hedge_limit);
        recognised
            .saturating_mul(self.hedge_deduction_rate)
            .min(self.hedge_max_deduction)
    }

    /// Checks that every rate lies in `[0, 1]` and every amount is non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found, checking the version first, then
    /// rates, then amounts.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.version.trim().is_empty() {
            return Err(PolicyError::EmptyVersion);
        }

        let rates = [
            ("national_tax_rate", self.national_tax_rate),
            ("local_tax_rate", self.local_tax_rate),
            ("ria_discount_q1", self.ria_discount_q1),
            ("ria_discount_q2", self.ria_discount_q2),
            ("ria_discount_h2", self.ria_discount_h2),
            ("hedge_deduction_rate", self.hedge_deduction_rate),
        ];
        for (name, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(PolicyError::RateOutOfRange { name, value });
            }
        }

        let amounts = [
            ("basic_deduction", self.basic_deduction),
            ("ria_limit", self.ria_limit),
            ("hedge_limit", self.hedge_limit),
            ("hedge_max_deduction", self.hedge_max_deduction),
        ];
        for (name, value) in amounts {
            if value < Decimal::ZERO {
                return Err(PolicyError::NegativeAmount { name, value });
            }
        }

        Ok(())
    }
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self::amendment_2026()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_2026_amendment() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_version() {
        let policy = PolicyParams {
            version: "  ".to_string(),
            ..PolicyParams::default()
        };

        assert_eq!(policy.validate(), Err(PolicyError::EmptyVersion));
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let policy = PolicyParams {
            national_tax_rate: dec!(1.5),
            ..PolicyParams::default()
        };

        assert_eq!(
            policy.validate(),
            Err(PolicyError::RateOutOfRange {
                name: "national_tax_rate",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_discount_rate() {
        let policy = PolicyParams {
            ria_discount_h2: dec!(-0.1),
            ..PolicyParams::default()
        };

        assert_eq!(
            policy.validate(),
            Err(PolicyError::RateOutOfRange {
                name: "ria_discount_h2",
                value: dec!(-0.1),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_limit() {
        let policy = PolicyParams {
            hedge_limit: dec!(-100),
            ..PolicyParams::default()
        };

        assert_eq!(
            policy.validate(),
            Err(PolicyError::NegativeAmount {
                name: "hedge_limit",
                value: dec!(-100),
            })
        );
    }

    #[test]
    fn validate_error_message_names_field() {
        let err = PolicyError::NegativeAmount {
            name: "ria_limit",
            value: dec!(-1),
        };

        assert_eq!(err.to_string(), "ria_limit must be non-negative, got -1");
    }

    // =========================================================================
    // rate lookup tests
    // =========================================================================

    #[test]
    fn ria_discount_rate_per_quarter() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.ria_discount_rate(ReturnQuarter::Q1), dec!(1.00));
        assert_eq!(policy.ria_discount_rate(ReturnQuarter::Q2), dec!(0.80));
        assert_eq!(policy.ria_discount_rate(ReturnQuarter::H2), dec!(0.50));
    }

    #[test]
    fn combined_tax_rate_sums_national_and_local() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.combined_tax_rate(), dec!(0.22));
    }

    // =========================================================================
    // hedge_deduction_for tests
    // =========================================================================

    #[test]
    fn hedge_deduction_is_five_percent_below_limit() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.hedge_deduction_for(dec!(40000000)), dec!(2000000));
    }

    #[test]
    fn hedge_deduction_at_limit_reaches_cap() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.hedge_deduction_for(dec!(100000000)), dec!(5000000));
    }

    #[test]
    fn hedge_deduction_above_limit_stays_capped() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.hedge_deduction_for(dec!(250000000)), dec!(5000000));
    }

    #[test]
    fn hedge_deduction_respects_max_when_rate_is_higher() {
        let policy = PolicyParams {
            hedge_deduction_rate: dec!(0.10),
            ..PolicyParams::default()
        };

        // 100,000,000 × 10% = 10,000,000, capped at 5,000,000
        assert_eq!(policy.hedge_deduction_for(dec!(100000000)), dec!(5000000));
    }

    #[test]
    fn hedge_deduction_clamps_negative_amount() {
        let policy = PolicyParams::amendment_2026();

        assert_eq!(policy.hedge_deduction_for(dec!(-20000000)), Decimal::ZERO);
    }
}
