//! Capital-gains tax engines for the current rules and the 2026 amendment.
//!
//! Both engines are pure: they hold nothing but a borrowed [`PolicyParams`] and build
//! a fresh result on every call.

pub mod additional;
pub mod common;
pub mod comparison;
pub mod current;

pub use additional::AdditionalDeductionEngine;
pub use comparison::Comparison;
pub use current::CurrentTaxEngine;

use crate::{
    AdditionalDeductionInput, AdditionalTaxResult, CurrentTaxInput, PolicyParams, TaxResult,
};

/// Current-rules tax under the default policy.
pub fn compute_current_tax(input: &CurrentTaxInput) -> TaxResult {
    CurrentTaxEngine::new(&PolicyParams::default()).compute(input)
}

/// Amended tax under the default policy, given the current-rules result for `input`.
pub fn compute_additional_tax(
    input: &CurrentTaxInput,
    election: &AdditionalDeductionInput,
    baseline: &TaxResult,
) -> AdditionalTaxResult {
    AdditionalDeductionEngine::new(&PolicyParams::default()).compute(input, election, baseline)
}
