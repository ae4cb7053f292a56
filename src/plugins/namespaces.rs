use crate::core::bundle::MetaBundle;
use crate::core::error::AddonError;
use crate::core::registry::Registries;
use crate::core::result::ValidatorResult;
use crate::core::validator::{Validator, ValidatorTest};
use crate::plugins::{candidate, reference_bundle};

pub const AM0003: Validator = Validator {
    code: "AM0003",
    name: "namespaces",
    description: "Ensure `targetNamespace` is listed under `namespaces`",
    runner: validate_namespaces,
};

pub fn register(registries: &Registries) -> Result<(), AddonError> {
    registries.validators.add(AM0003)?;
    registries.tests.add(validator_test())
}

pub fn validate_namespaces(mb: &MetaBundle) -> ValidatorResult {
    let meta = &mb.addon_meta;
    if meta.target_namespace.is_empty() {
        return ValidatorResult::failure(format!(
            "`targetNamespace` not found under the addon metadata of {}",
            meta.id
        ));
    }
    if !meta.namespaces.contains(&meta.target_namespace) {
        return ValidatorResult::failure(format!(
            "`targetNamespace` {} is missing from `namespaces` of {}",
            meta.target_namespace, meta.id
        ));
    }
    ValidatorResult::success()
}

pub fn validator_test() -> ValidatorTest {
    ValidatorTest::new(AM0003)
        .with_succeeding(vec![
            reference_bundle(),
            candidate(|m| m.namespaces.insert(0, "reference-addon-extra".to_string())),
        ])
        .with_failing(vec![
            candidate(|m| m.target_namespace.clear()),
            candidate(|m| m.namespaces.clear()),
            candidate(|m| m.target_namespace = "openshift-operators".to_string()),
        ])
}
