//! Loads policy parameters from a TOML file.
//!
//! Every field is optional; anything left out keeps its 2026-amendment value. The
//! loaded policy is validated before it is returned, so callers never see rates
//! outside `[0, 1]` or negative limits.
//!
//! ```toml
//! version = "2027-draft"
//! basic_deduction = 2500000
//! ria_discount_h2 = "0.40"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cgt_core::{PolicyError, PolicyParams};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading a policy file.
#[derive(Debug, Error)]
pub enum PolicyFileError {
    #[error("cannot read policy file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("policy file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("policy file is out of range: {0}")]
    Invalid(#[from] PolicyError),
}

/// Parses and validates policy parameters from TOML text.
pub fn parse_policy(text: &str) -> Result<PolicyParams, PolicyFileError> {
    let policy: PolicyParams = toml::from_str(text)?;
    policy.validate()?;
    Ok(policy)
}

/// Reads, parses and validates the policy file at `path`.
pub fn load_policy(path: &Path) -> Result<PolicyParams, PolicyFileError> {
    let text = fs::read_to_string(path).map_err(|source| PolicyFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let policy = parse_policy(&text)?;
    info!(path = %path.display(), version = %policy.version, "loaded policy file");
    Ok(policy)
}

/// Renders a policy as TOML, suitable as a starting point for a new policy file.
pub fn policy_to_toml(policy: &PolicyParams) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(policy)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_policy_empty_text_gives_defaults() {
        let policy = parse_policy("").unwrap();

        assert_eq!(policy, PolicyParams::amendment_2026());
    }

    #[test]
    fn parse_policy_overrides_listed_fields_only() {
        let text = r#"
            version = "2027-draft"
            ria_limit = 30000000
            ria_discount_h2 = "0.40"
        "#;

        let policy = parse_policy(text).unwrap();

        assert_eq!(policy.version, "2027-draft");
        assert_eq!(policy.ria_limit, dec!(30000000));
        assert_eq!(policy.ria_discount_h2, dec!(0.40));
        assert_eq!(policy.basic_deduction, dec!(2500000));
        assert_eq!(policy.hedge_max_deduction, dec!(5000000));
    }

    #[test]
    fn parse_policy_rejects_out_of_range_rate() {
        let result = parse_policy(r#"local_tax_rate = "2""#);

        assert!(matches!(
            result,
            Err(PolicyFileError::Invalid(PolicyError::RateOutOfRange {
                name: "local_tax_rate",
                ..
            }))
        ));
    }

    #[test]
    fn parse_policy_rejects_malformed_toml() {
        let result = parse_policy("basic_deduction = ");

        assert!(matches!(result, Err(PolicyFileError::Parse(_))));
    }

    #[test]
    fn policy_to_toml_round_trips() {
        let policy = PolicyParams::amendment_2026();

        let text = policy_to_toml(&policy).unwrap();

        assert_eq!(parse_policy(&text).unwrap(), policy);
    }
}
