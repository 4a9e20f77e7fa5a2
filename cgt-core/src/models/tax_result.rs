use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized capital-gains tax for one regime.
///
/// Every figure is recomputed from scratch for each call; nothing here is mutated
/// after it is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Sale proceeds minus acquisition cost and expenses, floored at zero.
    pub capital_gain: Decimal,

    /// Capital gain left after any exemption. Equal to `capital_gain` under the
    /// current rules.
    pub taxable_capital_gain: Decimal,

    /// Taxable capital gain plus other capital-gain income.
    pub total_gains: Decimal,

    /// Basic deduction.
    ///
    /// Under the current rules this is the amount actually applied (never more than
    /// `total_gains`). The amended result reports the statutory amount; see
    /// [`AdditionalTaxResult::total_deduction`] for what was applied there.
    pub basic_deduction: Decimal,

    /// Gains after all deductions; never negative.
    pub tax_base: Decimal,

    /// National tax, floored to the won.
    pub national_tax: Decimal,

    /// Local income tax, floored to the won independently of the national tax.
    pub local_tax: Decimal,

    /// `national_tax + local_tax`.
    pub total_tax: Decimal,

    /// Sale proceeds minus total tax. Not clamped, so it can be negative.
    pub net_proceeds: Decimal,
}

/// Itemized tax under the amendment, with the savings attributed to each deduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalTaxResult {
    /// The recomputed waterfall, same shape as the current-rules result.
    #[serde(flatten)]
    pub tax: TaxResult,

    /// Capital gain eligible for the RIA exemption (capped at the RIA limit).
    pub ria_eligible_gain: Decimal,

    /// Part of the capital gain exempted by RIA.
    pub ria_exemption: Decimal,

    /// Exemption rate applied for the elected return quarter, zero without RIA.
    pub ria_discount_rate: Decimal,

    /// Income deduction from the FX hedge.
    pub hedge_deduction: Decimal,

    /// Basic plus hedge deduction as actually applied, capped at `total_gains`.
    pub total_deduction: Decimal,

    /// Approximate tax saved by the RIA exemption alone.
    pub ria_tax_saving: Decimal,

    /// Approximate tax saved by the hedge deduction alone.
    pub hedge_tax_saving: Decimal,

    /// Current-rules total tax minus amended total tax.
    ///
    /// This is exact; the two attributions above are estimates and need not add up
    /// to it.
    pub tax_saving: Decimal,
}
