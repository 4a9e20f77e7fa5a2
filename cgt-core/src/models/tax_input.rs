use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction figures for a single foreign-stock disposal, in whole KRW.
///
/// Values are expected to be non-negative but nothing here enforces it; the
/// engines clamp instead of rejecting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTaxInput {
    /// Acquisition cost of the shares sold.
    pub acquisition_cost: Decimal,

    /// Sale proceeds.
    pub sale_cost: Decimal,

    /// Necessary expenses (commissions, fees) attributable to the sale.
    pub expenses: Decimal,

    /// Other capital-gain income for the same year, added after the gain is computed.
    pub other_gains: Decimal,
}
