//! Validator descriptors and their self-test candidates.

use crate::core::bundle::MetaBundle;
use crate::core::result::ValidatorResult;
use std::fmt;

/// Check executed against a bundle. Receives a shared borrow, so it cannot
/// mutate its input.
pub type Runner = fn(&MetaBundle) -> ValidatorResult;

/// Immutable description of a single rule.
#[derive(Clone, Copy)]
pub struct Validator {
    /// Unique, stable code such as `AM0004`.
    pub code: &'static str,
    /// Short machine-friendly name such as `icon_base64`.
    pub name: &'static str,
    pub description: &'static str,
    pub runner: Runner,
}

impl Validator {
    pub fn run(&self, bundle: &MetaBundle) -> ValidatorResult {
        (self.runner)(bundle)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Validator {}

/// A validator together with inputs known to pass and inputs known to fail.
#[derive(Debug, Clone)]
pub struct ValidatorTest {
    pub validator: Validator,
    pub succeeding_candidates: Vec<MetaBundle>,
    pub failing_candidates: Vec<MetaBundle>,
}

impl ValidatorTest {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            succeeding_candidates: Vec::new(),
            failing_candidates: Vec::new(),
        }
    }

    pub fn with_succeeding(mut self, candidates: Vec<MetaBundle>) -> Self {
        self.succeeding_candidates = candidates;
        self
    }

    pub fn with_failing(mut self, candidates: Vec<MetaBundle>) -> Self {
        self.failing_candidates = candidates;
        self
    }

    pub fn code(&self) -> &'static str {
        self.validator.code
    }

    pub fn name(&self) -> &'static str {
        self.validator.name
    }

    /// True when some bundle is declared both as passing and as failing.
    pub fn has_overlapping_candidates(&self) -> bool {
        self.failing_candidates
            .iter()
            .any(|f| self.succeeding_candidates.contains(f))
    }
}
