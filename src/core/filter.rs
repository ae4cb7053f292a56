//! Enable/disable selection of validators.
//!
//! A [`Filter`] is resolved once per invocation against the registry and is
//! immutable afterwards. Invalid selections produce an error and no filter:
//! - both lists non-empty: `MutuallyExclusive`
//! - a code the registry does not know: `UnknownValidator`

use crate::core::error::AddonError;
use crate::core::registry::Registry;
use crate::core::validator::Validator;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Filter {
    validators: Vec<Validator>,
}

impl Filter {
    /// Resolve from comma-separated code lists; an empty string means no
    /// constraint.
    pub fn new(registry: &Registry, disabled: &str, enabled: &str) -> Result<Self, AddonError> {
        Self::from_codes(registry, &parse_codes(disabled), &parse_codes(enabled))
    }

    /// Resolve from already split code lists.
    pub fn from_codes(
        registry: &Registry,
        disabled: &[String],
        enabled: &[String],
    ) -> Result<Self, AddonError> {
        let disabled = normalize(disabled);
        let enabled = normalize(enabled);

        if !disabled.is_empty() && !enabled.is_empty() {
            return Err(AddonError::MutuallyExclusive);
        }

        if let Some(unknown) = disabled
            .iter()
            .chain(enabled.iter())
            .find(|code| !registry.contains(code))
        {
            return Err(AddonError::UnknownValidator(unknown.clone()));
        }

        let all = registry.all();
        let validators = if !enabled.is_empty() {
            let wanted: BTreeSet<&str> = enabled.iter().map(String::as_str).collect();
            all.into_values()
                .filter(|v| wanted.contains(v.code))
                .collect()
        } else {
            all.into_values()
                .filter(|v| !disabled.iter().any(|code| code == v.code))
                .collect()
        };

        Ok(Self { validators })
    }

    /// Active validators ordered by code.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn into_validators(self) -> Vec<Validator> {
        self.validators
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.code).collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_codes(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim, drop empties and repeated codes; first occurrence wins.
fn normalize(codes: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    codes
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty() && seen.insert(*code))
        .map(str::to_string)
        .collect()
}
