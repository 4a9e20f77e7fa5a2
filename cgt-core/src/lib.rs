//! Capital-gains tax on foreign stock under the current Korean rules and under the
//! 2026 amendment (RIA exemption and FX hedge deduction).
//!
//! The crate is split the same way the calculation is: [`models`] holds the inputs,
//! results and policy parameters, and [`calculations`] holds the two engines that turn
//! one into the other.
//!
//! ```
//! use cgt_core::{AdditionalDeductionInput, CurrentTaxInput, ReturnQuarter};
//! use rust_decimal_macros::dec;
//!
//! let input = CurrentTaxInput {
//!     acquisition_cost: dec!(10000000),
//!     sale_cost: dec!(100000000),
//!     expenses: dec!(100000),
//!     other_gains: dec!(0),
//! };
//! let baseline = cgt_core::compute_current_tax(&input);
//! assert_eq!(baseline.total_tax, dec!(19228000));
//!
//! let election = AdditionalDeductionInput {
//!     apply_ria: true,
//!     return_quarter: ReturnQuarter::Q1,
//!     ..Default::default()
//! };
//! let amended = cgt_core::compute_additional_tax(&input, &election, &baseline);
//! assert_eq!(amended.tax.total_tax, dec!(8228000));
//! ```

pub mod calculations;
pub mod models;

pub use calculations::{
    AdditionalDeductionEngine, Comparison, CurrentTaxEngine, compute_additional_tax,
    compute_current_tax,
};
pub use models::*;
