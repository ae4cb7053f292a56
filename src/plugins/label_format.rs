use crate::core::bundle::MetaBundle;
use crate::core::error::AddonError;
use crate::core::registry::Registries;
use crate::core::result::ValidatorResult;
use crate::core::validator::{Validator, ValidatorTest};
use crate::plugins::{candidate, reference_bundle};
use regex::Regex;
use std::sync::LazyLock;

const LABEL_PREFIX: &str = "api.openshift.com/addon-";

static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^api\.openshift\.com/addon-[0-9a-z][0-9a-z-]{0,52}[0-9a-z]$").unwrap()
});

pub const AM0002: Validator = Validator {
    code: "AM0002",
    name: "label_format",
    description: "Ensure `label` follows the format api.openshift.com/addon-<id>",
    runner: validate_label_format,
};

pub fn register(registries: &Registries) -> Result<(), AddonError> {
    registries.validators.add(AM0002)?;
    registries.tests.add(validator_test())
}

pub fn validate_label_format(mb: &MetaBundle) -> ValidatorResult {
    let meta = &mb.addon_meta;
    if meta.label.is_empty() {
        return ValidatorResult::failure(format!(
            "`label` not found under the addon metadata of {}",
            meta.id
        ));
    }
    if !LABEL_PATTERN.is_match(&meta.label) {
        return ValidatorResult::failure(format!(
            "`label` {} of {} does not match {}<id>",
            meta.label, meta.id, LABEL_PREFIX
        ));
    }
    let expected = format!("{}{}", LABEL_PREFIX, meta.id);
    if meta.label != expected {
        return ValidatorResult::failure(format!(
            "`label` {} of {} should be {}",
            meta.label, meta.id, expected
        ));
    }
    ValidatorResult::success()
}

pub fn validator_test() -> ValidatorTest {
    ValidatorTest::new(AM0002)
        .with_succeeding(vec![
            reference_bundle(),
            candidate(|m| {
                m.id = "a1".to_string();
                m.label = "api.openshift.com/addon-a1".to_string();
            }),
        ])
        .with_failing(vec![
            candidate(|m| m.label.clear()),
            candidate(|m| m.label = "api.openshift.com/reference-addon".to_string()),
            candidate(|m| m.label = "api.openshift.com/addon-Reference-Addon".to_string()),
            candidate(|m| m.label = "api.openshift.com/addon-other-addon".to_string()),
        ])
}
