//! Validator execution harness.
//!
//! Runs validators against bundles and classifies what comes back. A panic
//! inside a runner is caught here and becomes an `Error` result, so one
//! misbehaving validator cannot take down the rest of the pass.

use crate::core::bundle::MetaBundle;
use crate::core::output;
use crate::core::result::ValidatorResult;
use crate::core::validator::{Validator, ValidatorTest};
use rayon::prelude::*;
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Parallel,
    Sequential,
}

/// One cell of the validator × bundle matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub code: &'static str,
    pub name: &'static str,
    pub addon_id: String,
    pub result: ValidatorResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub success: usize,
    pub failure: usize,
    pub error: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    pub summary: Summary,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        let mut summary = Summary {
            total: outcomes.len(),
            ..Summary::default()
        };
        for outcome in &outcomes {
            match outcome.result {
                ValidatorResult::Success => summary.success += 1,
                ValidatorResult::Failure { .. } => summary.failure += 1,
                ValidatorResult::Error { .. } => summary.error += 1,
            }
        }
        Self { outcomes, summary }
    }

    /// True when any outcome is a failure or an error.
    pub fn has_problems(&self) -> bool {
        self.summary.failure + self.summary.error > 0
    }

    pub fn problems(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.result.is_success())
    }
}

/// Run one validator against one bundle.
pub fn run(validator: &Validator, bundle: &MetaBundle) -> ValidatorResult {
    match panic::catch_unwind(AssertUnwindSafe(|| validator.run(bundle))) {
        Ok(result) => result,
        Err(payload) => ValidatorResult::error(format!(
            "validator {} panicked: {}",
            validator.code,
            panic_message(payload.as_ref())
        )),
    }
}

/// Evaluate every (bundle, validator) pair. Outcomes are ordered by bundle,
/// then by validator, whatever the execution mode.
pub fn run_matrix(validators: &[Validator], bundles: &[MetaBundle], mode: ExecutionMode) -> Report {
    let pairs: Vec<(&MetaBundle, &Validator)> = bundles
        .iter()
        .flat_map(|b| validators.iter().map(move |v| (b, v)))
        .collect();

    let evaluate = |(bundle, validator): &(&MetaBundle, &Validator)| {
        let result = run(validator, bundle);
        output::trace(
            "harness",
            &format!("{} {} -> {}", validator.code, bundle.addon_id(), result.status()),
        );
        Outcome {
            code: validator.code,
            name: validator.name,
            addon_id: bundle.addon_id().to_string(),
            result,
        }
    };

    let outcomes = match mode {
        ExecutionMode::Parallel => pairs.par_iter().map(evaluate).collect(),
        ExecutionMode::Sequential => pairs.iter().map(evaluate).collect(),
    };
    Report::new(outcomes)
}

/// Result of checking one validator against its own candidates.
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestOutcome {
    pub code: &'static str,
    pub name: &'static str,
    pub succeeding_checked: usize,
    pub failing_checked: usize,
    pub mismatches: Vec<String>,
}

impl SelfTestOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Check every self-test: succeeding candidates must yield `Success`,
/// failing candidates must yield `Failure`. Tests run in parallel with each
/// other; candidates within one test run in sequence.
pub fn run_self_tests(tests: &[ValidatorTest]) -> Vec<SelfTestOutcome> {
    tests.par_iter().map(run_self_test).collect()
}

pub fn run_self_test(test: &ValidatorTest) -> SelfTestOutcome {
    let mut mismatches = Vec::new();

    for (i, bundle) in test.succeeding_candidates.iter().enumerate() {
        let result = run(&test.validator, bundle);
        if !result.is_success() {
            mismatches.push(format!(
                "succeeding candidate #{} ({}) returned {}",
                i,
                bundle.addon_id(),
                result
            ));
        }
    }

    for (i, bundle) in test.failing_candidates.iter().enumerate() {
        let result = run(&test.validator, bundle);
        if !result.is_failure() {
            mismatches.push(format!(
                "failing candidate #{} ({}) returned {}",
                i,
                bundle.addon_id(),
                result
            ));
        }
    }

    SelfTestOutcome {
        code: test.code(),
        name: test.name(),
        succeeding_checked: test.succeeding_candidates.len(),
        failing_checked: test.failing_candidates.len(),
        mismatches,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
