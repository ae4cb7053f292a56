//! Process-wide validator registries.
//!
//! Two stores are populated during bootstrap:
//! - **`Registry`**: code → [`Validator`], the set users select from
//! - **`TestRegistry`**: insertion-ordered [`ValidatorTest`]s used by the self-test run
//!
//! Registrars may run concurrently and in any order; every `add` takes the
//! store's write lock, so the sequence of insertions is linearizable. After
//! bootstrap the stores are only read.
//!
//! A guard is only ever poisoned by a panic between acquiring the lock and a
//! single insert/push, which cannot leave the store half-written, so poisoned
//! guards are recovered instead of surfaced.

use crate::core::error::AddonError;
use crate::core::output;
use crate::core::validator::{Validator, ValidatorTest};
use crate::plugins;
use std::collections::BTreeMap;
use std::sync::{OnceLock, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct Registry {
    data: RwLock<BTreeMap<String, Validator>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator. A second registration under the same code is
    /// rejected and the existing entry is left untouched.
    pub fn add(&self, validator: Validator) -> Result<(), AddonError> {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        if data.contains_key(validator.code) {
            return Err(AddonError::DuplicateValidator(validator.code.to_string()));
        }
        data.insert(validator.code.to_string(), validator);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every registered validator, keyed and ordered by code.
    pub fn all(&self) -> BTreeMap<String, Validator> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, code: &str) -> Option<Validator> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
            .copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(code)
    }
}

#[derive(Debug, Default)]
pub struct TestRegistry {
    data: RwLock<Vec<ValidatorTest>>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a self-test. Candidates declared as both passing and failing
    /// are rejected.
    pub fn add(&self, test: ValidatorTest) -> Result<(), AddonError> {
        if test.has_overlapping_candidates() {
            return Err(AddonError::OverlappingCandidates(test.code().to_string()));
        }
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(test);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered self-tests in insertion order.
    pub fn all(&self) -> Vec<ValidatorTest> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Both registries, owned together.
#[derive(Debug, Default)]
pub struct Registries {
    pub validators: Registry,
    pub tests: TestRegistry,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build registries holding every built-in validator.
pub fn bootstrap() -> Result<Registries, AddonError> {
    let registries = Registries::new();
    plugins::register_all(&registries)?;
    output::trace(
        "registry",
        &format!(
            "bootstrapped validators={} self_tests={}",
            registries.validators.len(),
            registries.tests.len()
        ),
    );
    Ok(registries)
}

/// Process-wide registries, bootstrapped on first use.
///
/// A failed bootstrap is not cached: every call reports the same error, and
/// the binary aborts on the first one.
pub fn global() -> Result<&'static Registries, AddonError> {
    static GLOBAL: OnceLock<Registries> = OnceLock::new();
    if let Some(registries) = GLOBAL.get() {
        return Ok(registries);
    }
    let built = bootstrap()?;
    Ok(GLOBAL.get_or_init(move || built))
}
