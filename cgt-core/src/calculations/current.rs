//! Capital-gains tax on foreign stock under the current rules.
//!
//! # Waterfall
//!
//! | Step | Figure | Rule |
//! |------|--------|------|
//! | 1 | Capital gain | max(0, sale − acquisition − expenses) |
//! | 2 | Taxable capital gain | capital gain (no exemption) |
//! | 3 | Total gains | taxable capital gain + other gains |
//! | 4 | Basic deduction | min(basic deduction, total gains) |
//! | 5 | Tax base | max(0, total gains − basic deduction) |
//! | 6 | National / local tax | floor(base × 20%), floor(base × 2%) |
//! | 7 | Net proceeds | sale − total tax |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cgt_core::{CurrentTaxEngine, CurrentTaxInput, PolicyParams};
//!
//! let policy = PolicyParams::amendment_2026();
//! let engine = CurrentTaxEngine::new(&policy);
//!
//! let result = engine.compute(&CurrentTaxInput {
//!     acquisition_cost: dec!(10000000),
//!     sale_cost: dec!(100000000),
//!     expenses: dec!(100000),
//!     other_gains: dec!(0),
//! });
//!
//! assert_eq!(result.capital_gain, dec!(89900000));
//! assert_eq!(result.tax_base, dec!(87400000));
//! assert_eq!(result.total_tax, dec!(19228000));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{levy, non_negative};
use crate::{CurrentTaxInput, PolicyParams, TaxResult};

/// Calculator for the current-rules tax.
#[derive(Debug, Clone)]
pub struct CurrentTaxEngine<'a> {
    policy: &'a PolicyParams,
}

impl<'a> CurrentTaxEngine<'a> {
    pub fn new(policy: &'a PolicyParams) -> Self {
        Self { policy }
    }

    /// Runs the whole waterfall. Never fails: out-of-range inputs are clamped.
    pub fn compute(
        &self,
        input: &CurrentTaxInput,
    ) -> TaxResult {
        warn_on_negative_inputs(input);

        let capital_gain =
            capital_gain(input.sale_cost, input.acquisition_cost, input.expenses);
        let taxable_capital_gain = capital_gain;
        let total_gains = taxable_capital_gain.saturating_add(input.other_gains);
        let basic_deduction = self.basic_deduction(total_gains);
        let tax_base = non_negative(total_gains.saturating_sub(basic_deduction));
        let tax = levy(tax_base, self.policy);
        let net_proceeds = input.sale_cost.saturating_sub(tax.total);

        debug!(
            policy = %self.policy.version,
            %capital_gain,
            %total_gains,
            %tax_base,
            total_tax = %tax.total,
            "computed current-rules tax"
        );

        TaxResult {
            capital_gain,
            taxable_capital_gain,
            total_gains,
            basic_deduction,
            tax_base,
            national_tax: tax.national,
            local_tax: tax.local,
            total_tax: tax.total,
            net_proceeds,
        }
    }

    /// The basic deduction never exceeds the gains it is deducted from.
    fn basic_deduction(
        &self,
        total_gains: Decimal,
    ) -> Decimal {
        self.policy.basic_deduction.min(non_negative(total_gains))
    }
}

/// Sale proceeds less acquisition cost and expenses; a loss counts as zero.
pub(crate) fn capital_gain(
    sale_cost: Decimal,
    acquisition_cost: Decimal,
    expenses: Decimal,
) -> Decimal {
    non_negative(
        sale_cost
            .saturating_sub(acquisition_cost)
            .saturating_sub(expenses),
    )
}

fn warn_on_negative_inputs(input: &CurrentTaxInput) {
    let fields = [
        ("acquisition_cost", input.acquisition_cost),
        ("sale_cost", input.sale_cost),
        ("expenses", input.expenses),
        ("other_gains", input.other_gains),
    ];
    for (field, value) in fields {
        if value < Decimal::ZERO {
            warn!(field, %value, "negative amount in tax input; result will be clamped");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn worked_example() -> CurrentTaxInput {
        CurrentTaxInput {
            acquisition_cost: dec!(10000000),
            sale_cost: dec!(100000000),
            expenses: dec!(100000),
            other_gains: dec!(0),
        }
    }

    // =========================================================================
    // capital_gain tests
    // =========================================================================

    #[test]
    fn capital_gain_subtracts_cost_and_expenses() {
        let result = capital_gain(dec!(100000000), dec!(10000000), dec!(100000));

        assert_eq!(result, dec!(89900000));
    }

    #[test]
    fn capital_gain_is_zero_on_loss() {
        let result = capital_gain(dec!(5000000), dec!(10000000), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn capital_gain_is_zero_when_expenses_consume_gain() {
        let result = capital_gain(dec!(10100000), dec!(10000000), dec!(100000));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // basic_deduction tests
    // =========================================================================

    #[test]
    fn basic_deduction_full_amount_when_gains_exceed_it() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);

        assert_eq!(engine.basic_deduction(dec!(10000000)), dec!(2500000));
    }

    #[test]
    fn basic_deduction_limited_to_gains() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);

        assert_eq!(engine.basic_deduction(dec!(1200000)), dec!(1200000));
    }

    #[test]
    fn basic_deduction_never_negative() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);

        assert_eq!(engine.basic_deduction(dec!(-3000000)), dec!(0));
    }

    // =========================================================================
    // compute tests
    // =========================================================================

    #[test]
    fn compute_worked_example() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);

        let result = engine.compute(&worked_example());

        assert_eq!(
            result,
            TaxResult {
                capital_gain: dec!(89900000),
                taxable_capital_gain: dec!(89900000),
                total_gains: dec!(89900000),
                basic_deduction: dec!(2500000),
                tax_base: dec!(87400000),
                national_tax: dec!(17480000),
                local_tax: dec!(1748000),
                total_tax: dec!(19228000),
                net_proceeds: dec!(80772000),
            }
        );
    }

    #[test]
    fn compute_adds_other_gains_after_capital_gain() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);
        let mut input = worked_example();
        input.other_gains = dec!(5000000);

        let result = engine.compute(&input);

        assert_eq!(result.capital_gain, dec!(89900000));
        assert_eq!(result.total_gains, dec!(94900000));
        // 92,400,000 × 22%
        assert_eq!(result.total_tax, dec!(20328000));
    }

    #[test]
    fn compute_loss_produces_no_tax() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);
        let input = CurrentTaxInput {
            acquisition_cost: dec!(20000000),
            sale_cost: dec!(15000000),
            expenses: dec!(50000),
            other_gains: dec!(0),
        };

        let result = engine.compute(&input);

        assert_eq!(result.capital_gain, dec!(0));
        assert_eq!(result.basic_deduction, dec!(0));
        assert_eq!(result.tax_base, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.net_proceeds, dec!(15000000));
    }

    #[test]
    fn compute_gain_below_basic_deduction_is_untaxed() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);
        let input = CurrentTaxInput {
            acquisition_cost: dec!(10000000),
            sale_cost: dec!(12000000),
            expenses: dec!(0),
            other_gains: dec!(0),
        };

        let result = engine.compute(&input);

        assert_eq!(result.basic_deduction, dec!(2000000));
        assert_eq!(result.tax_base, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }

    #[test]
    fn compute_negative_other_gains_clamps_base() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);
        let input = CurrentTaxInput {
            acquisition_cost: dec!(0),
            sale_cost: dec!(1000000),
            expenses: dec!(0),
            other_gains: dec!(-4000000),
        };

        let result = engine.compute(&input);

        assert_eq!(result.total_gains, dec!(-3000000));
        assert_eq!(result.basic_deduction, dec!(0));
        assert_eq!(result.tax_base, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }

    #[test]
    fn compute_net_proceeds_may_be_negative() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);
        let input = CurrentTaxInput {
            acquisition_cost: dec!(0),
            sale_cost: dec!(1000000),
            expenses: dec!(0),
            other_gains: dec!(50000000),
        };

        let result = engine.compute(&input);

        // base 48,500,000 → tax 10,670,000
        assert_eq!(result.total_tax, dec!(10670000));
        assert_eq!(result.net_proceeds, dec!(-9670000));
    }

    #[test]
    fn compute_total_is_sum_of_floored_parts() {
        let policy = PolicyParams::amendment_2026();
        let engine = CurrentTaxEngine::new(&policy);
        let input = CurrentTaxInput {
            acquisition_cost: dec!(0),
            sale_cost: dec!(2500049),
            expenses: dec!(0),
            other_gains: dec!(0),
        };

        let result = engine.compute(&input);

        assert_eq!(result.tax_base, dec!(49));
        assert_eq!(result.national_tax, dec!(9));
        assert_eq!(result.local_tax, dec!(0));
        assert_eq!(result.total_tax, result.national_tax + result.local_tax);
    }
}
