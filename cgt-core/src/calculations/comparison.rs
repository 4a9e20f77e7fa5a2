//! Side-by-side view of the current rules and the amendment for one disposal.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{
    AdditionalDeductionEngine, AdditionalDeductionInput, AdditionalTaxResult, CurrentTaxEngine,
    CurrentTaxInput, PolicyParams, TaxResult, Warning,
};

/// Both regimes computed from the same input and elections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Version tag of the policy the figures were computed with.
    pub policy_version: String,
    /// Elections the amended figures were computed with.
    pub election: AdditionalDeductionInput,
    pub current: TaxResult,
    pub additional: AdditionalTaxResult,
    /// Input conditions worth pointing out; they did not stop the calculation.
    pub warnings: Vec<Warning>,
}

impl Comparison {
    /// Runs both engines, feeding the current-rules result into the amended one.
    pub fn compute(
        policy: &PolicyParams,
        input: &CurrentTaxInput,
        election: &AdditionalDeductionInput,
    ) -> Self {
        let current = CurrentTaxEngine::new(policy).compute(input);
        let additional = AdditionalDeductionEngine::new(policy).compute(input, election, &current);

        Self {
            policy_version: policy.version.clone(),
            election: election.clone(),
            current,
            additional,
            warnings: election.warnings(policy),
        }
    }

    /// Tax saved by the amendment.
    pub fn tax_saving(&self) -> Decimal {
        self.additional.tax_saving
    }

    /// Saving as a whole-percent share of the current tax, e.g. 63 for the worked example.
    ///
    /// `None` when there is no current tax to compare against.
    pub fn saving_rate(&self) -> Option<Decimal> {
        if self.current.total_tax <= Decimal::ZERO {
            return None;
        }

        // Divide first: the saving can be as large as the tax itself.
        let rate = self
            .tax_saving()
            .checked_div(self.current.total_tax)?
            .checked_mul(Decimal::ONE_HUNDRED)?;
        Some(rate.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Extra cash kept after tax under the amendment.
    pub fn net_proceeds_gain(&self) -> Decimal {
        self.additional
            .tax
            .net_proceeds
            .saturating_sub(self.current.net_proceeds)
    }
}
