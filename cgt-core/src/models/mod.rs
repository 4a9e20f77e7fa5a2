mod deduction_input;
mod policy_params;
mod tax_input;
mod tax_result;
mod warning;

pub use deduction_input::{AdditionalDeductionInput, ParseQuarterError, ReturnQuarter};
pub use policy_params::{PolicyError, PolicyParams};
pub use tax_input::CurrentTaxInput;
pub use tax_result::{AdditionalTaxResult, TaxResult};
pub use warning::Warning;
