use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PolicyParams, Warning};

/// Period of 2026 in which the proceeds return to a domestic RIA account.
///
/// The earlier the return, the larger the share of the gain that is exempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnQuarter {
    #[default]
    #[serde(rename = "1Q")]
    Q1,
    #[serde(rename = "2Q")]
    Q2,
    #[serde(rename = "H2")]
    H2,
}

/// Error returned when a string does not name a return quarter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown return quarter '{0}' (expected 1Q, 2Q or H2)")]
pub struct ParseQuarterError(String);

impl ReturnQuarter {
    pub const ALL: [ReturnQuarter; 3] = [Self::Q1, Self::Q2, Self::H2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "1Q",
            Self::Q2 => "2Q",
            Self::H2 => "H2",
        }
    }

    /// Period of 2026 this quarter covers, e.g. `2026 Q1`.
    pub fn period(&self) -> &'static str {
        match self {
            Self::Q1 => "2026 Q1",
            Self::Q2 => "2026 Q2",
            Self::H2 => "2026 H2",
        }
    }

    /// Label for a quarter selector, with the relief `policy` grants for it.
    ///
    /// ```
    /// use cgt_core::{PolicyParams, ReturnQuarter};
    ///
    /// let policy = PolicyParams::amendment_2026();
    ///
    /// assert_eq!(ReturnQuarter::Q2.label(&policy), "2026 Q2 (80% relief)");
    /// ```
    pub fn label(
        &self,
        policy: &PolicyParams,
    ) -> String {
        let percent = policy
            .ria_discount_rate(*self)
            .saturating_mul(Decimal::ONE_HUNDRED)
            .round_dp(0)
            .normalize();
        format!("{} ({percent}% relief)", self.period())
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1Q" | "Q1" => Some(Self::Q1),
            "2Q" | "Q2" => Some(Self::Q2),
            "H2" | "2H" => Some(Self::H2),
            _ => None,
        }
    }
}

impl fmt::Display for ReturnQuarter {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnQuarter {
    type Err = ParseQuarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseQuarterError(s.to_string()))
    }
}

/// Elections for the additional deductions offered by the amendment.
///
/// The two elections are independent: RIA exempts part of the capital gain, the hedge
/// deduction is added to the basic deduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDeductionInput {
    /// Whether the RIA exemption is claimed.
    pub apply_ria: bool,

    /// When the proceeds return home. Only consulted if `apply_ria` is set.
    pub return_quarter: ReturnQuarter,

    /// Whether the FX hedge deduction is claimed.
    pub apply_hedge: bool,

    /// Forward-purchase amount used for the hedge deduction.
    pub hedge_amount: Decimal,
}

impl AdditionalDeductionInput {
    /// Elects the hedge deduction at exactly the recognition limit.
    pub fn with_max_hedge(
        self,
        policy: &PolicyParams,
    ) -> Self {
        Self {
            apply_hedge: true,
            hedge_amount: policy.hedge_limit,
            ..self
        }
    }

    /// Lists conditions an input form should point out to the user.
    ///
    /// None of these stop the calculation: the engines clamp the values regardless.
    pub fn warnings(
        &self,
        policy: &PolicyParams,
    ) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if !self.apply_hedge {
            if self.hedge_amount != Decimal::ZERO {
                warnings.push(Warning::HedgeAmountWithoutElection);
            }
            return warnings;
        }

        if self.hedge_amount < Decimal::ZERO {
            warnings.push(Warning::NegativeHedgeAmount {
                amount: self.hedge_amount,
            });
        } else if self.hedge_amount > policy.hedge_limit {
            warnings.push(Warning::HedgeAmountOverLimit {
                amount: self.hedge_amount,
                limit: policy.hedge_limit,
            });
        }

        warnings
    }
}
