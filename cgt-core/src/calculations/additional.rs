//! Capital-gains tax under the 2026 amendment: RIA exemption and FX hedge deduction.
//!
//! The amendment keeps the current-rules waterfall but changes two steps. The RIA
//! exemption is taken off the capital gain itself, before other gains are added. The
//! hedge deduction is added to the basic deduction, and the combined amount is capped
//! at total gains.
//!
//! # Waterfall
//!
//! | Step | Figure | Rule |
//! |------|--------|------|
//! | 1 | RIA discount rate | 100% / 80% / 50% by return quarter, 0 without RIA |
//! | 2 | Hedge deduction | min(min(amount, limit) × 5%, max deduction), 0 without hedge |
//! | 3 | RIA eligible gain | min(capital gain, RIA limit), 0 without RIA |
//! | 4 | RIA exemption | floor(eligible gain × discount rate) |
//! | 5 | Taxable capital gain | max(0, capital gain − RIA exemption) |
//! | 6 | Total gains | taxable capital gain + other gains |
//! | 7 | Total deduction | min(basic + hedge deduction, total gains) |
//! | 8 | Tax base | max(0, total gains − total deduction) |
//! | 9 | National / local tax | floored separately, then summed |
//! | 10 | Net proceeds | sale − total tax |
//! | 11 | Attribution | floor(exemption × 22%), floor(hedge × 22%), baseline − total |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cgt_core::{
//!     AdditionalDeductionEngine, AdditionalDeductionInput, CurrentTaxEngine, CurrentTaxInput,
//!     PolicyParams, ReturnQuarter,
//! };
//!
//! let policy = PolicyParams::amendment_2026();
//! let input = CurrentTaxInput {
//!     acquisition_cost: dec!(10000000),
//!     sale_cost: dec!(100000000),
//!     expenses: dec!(100000),
//!     other_gains: dec!(0),
//! };
//! let baseline = CurrentTaxEngine::new(&policy).compute(&input);
//!
//! let election = AdditionalDeductionInput {
//!     apply_ria: true,
//!     return_quarter: ReturnQuarter::Q1,
//!     apply_hedge: true,
//!     hedge_amount: dec!(100000000),
//! };
//! let result = AdditionalDeductionEngine::new(&policy).compute(&input, &election, &baseline);
//!
//! assert_eq!(result.hedge_deduction, dec!(5000000));
//! assert_eq!(result.tax.tax_base, dec!(32400000));
//! assert_eq!(result.tax.total_tax, dec!(7128000));
//! assert_eq!(result.tax_saving, dec!(12100000));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{floor_won, levy, non_negative};
use crate::{
    AdditionalDeductionInput, AdditionalTaxResult, CurrentTaxInput, PolicyParams, TaxResult,
};

/// Calculator for the amended tax.
///
/// The engine trusts `baseline.capital_gain`; the baseline must come from
/// [`CurrentTaxEngine`](crate::CurrentTaxEngine) run on the same input.
#[derive(Debug, Clone)]
pub struct AdditionalDeductionEngine<'a> {
    policy: &'a PolicyParams,
}

impl<'a> AdditionalDeductionEngine<'a> {
    pub fn new(policy: &'a PolicyParams) -> Self {
        Self { policy }
    }

    /// Recomputes the waterfall with the elected deductions.
    ///
    /// Never fails. A negative hedge amount is treated as zero and an amount above the
    /// recognition limit counts only up to the limit.
    pub fn compute(
        &self,
        input: &CurrentTaxInput,
        election: &AdditionalDeductionInput,
        baseline: &TaxResult,
    ) -> AdditionalTaxResult {
        let ria_discount_rate = self.ria_discount_rate(election);
        let hedge_deduction = self.hedge_deduction(election);
        let ria_eligible_gain = self.ria_eligible_gain(election, baseline.capital_gain);
        let ria_exemption = floor_won(ria_eligible_gain.saturating_mul(ria_discount_rate));

        let taxable_capital_gain =
            non_negative(baseline.capital_gain.saturating_sub(ria_exemption));
        let total_gains = taxable_capital_gain.saturating_add(input.other_gains);
        let total_deduction = self.total_deduction(hedge_deduction, total_gains);
        let tax_base = non_negative(total_gains.saturating_sub(total_deduction));
        let tax = levy(tax_base, self.policy);
        let net_proceeds = input.sale_cost.saturating_sub(tax.total);

        let combined_rate = self.policy.combined_tax_rate();
        let ria_tax_saving = floor_won(ria_exemption.saturating_mul(combined_rate));
        let hedge_tax_saving = floor_won(hedge_deduction.saturating_mul(combined_rate));
        let tax_saving = baseline.total_tax.saturating_sub(tax.total);

        debug!(
            policy = %self.policy.version,
            %ria_exemption,
            %hedge_deduction,
            %tax_base,
            total_tax = %tax.total,
            %tax_saving,
            "computed amended tax"
        );

        AdditionalTaxResult {
            tax: TaxResult {
                capital_gain: baseline.capital_gain,
                taxable_capital_gain,
                total_gains,
                basic_deduction: self.policy.basic_deduction,
                tax_base,
                national_tax: tax.national,
                local_tax: tax.local,
                total_tax: tax.total,
                net_proceeds,
            },
            ria_eligible_gain,
            ria_exemption,
            ria_discount_rate,
            hedge_deduction,
            total_deduction,
            ria_tax_saving,
            hedge_tax_saving,
            tax_saving,
        }
    }

    /// Step 1: exemption rate for the elected quarter, zero without RIA.
    fn ria_discount_rate(
        &self,
        election: &AdditionalDeductionInput,
    ) -> Decimal {
        if election.apply_ria {
            self.policy.ria_discount_rate(election.return_quarter)
        } else {
            Decimal::ZERO
        }
    }

    /// Step 2: hedge deduction, zero without the hedge election.
    fn hedge_deduction(
        &self,
        election: &AdditionalDeductionInput,
    ) -> Decimal {
        if !election.apply_hedge {
            return Decimal::ZERO;
        }

        if election.hedge_amount < Decimal::ZERO {
            warn!(
                hedge_amount = %election.hedge_amount,
                "negative hedge amount; treating as zero"
            );
        } else if election.hedge_amount > self.policy.hedge_limit {
            warn!(
                hedge_amount = %election.hedge_amount,
                hedge_limit = %self.policy.hedge_limit,
                "hedge amount exceeds recognition limit; limit applies"
            );
        }

        self.policy.hedge_deduction_for(election.hedge_amount)
    }

    /// Step 3: part of the capital gain the RIA exemption can reach.
    fn ria_eligible_gain(
        &self,
        election: &AdditionalDeductionInput,
        capital_gain: Decimal,
    ) -> Decimal {
        if election.apply_ria {
            non_negative(capital_gain).min(self.policy.ria_limit)
        } else {
            Decimal::ZERO
        }
    }

    /// Step 7: basic plus hedge deduction, never more than the gains available.
    fn total_deduction(
        &self,
        hedge_deduction: Decimal,
        total_gains: Decimal,
    ) -> Decimal {
        self.policy
            .basic_deduction
            .saturating_add(hedge_deduction)
            .min(non_negative(total_gains))
    }
}
