use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input conditions worth showing to the user. They never block a calculation.
///
/// `Display` prints amounts as plain decimals; front ends format them for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Warning {
    /// Hedge amount is above the recognition limit; only the limit counts.
    HedgeAmountOverLimit { amount: Decimal, limit: Decimal },
    /// Hedge amount is negative and is treated as zero.
    NegativeHedgeAmount { amount: Decimal },
    /// A hedge amount was entered but the hedge deduction is not elected.
    HedgeAmountWithoutElection,
}

impl fmt::Display for Warning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::HedgeAmountOverLimit { amount, limit } => write!(
                f,
                "hedge amount {amount} exceeds the recognition limit {limit}; {limit} is used"
            ),
            Self::NegativeHedgeAmount { amount } => {
                write!(f, "hedge amount {amount} is negative; treated as 0")
            }
            Self::HedgeAmountWithoutElection => {
                f.write_str("hedge amount entered but hedge deduction not elected; ignored")
            }
        }
    }
}
