use crate::core::bundle::{Channel, MetaBundle};
use crate::core::error::AddonError;
use crate::core::registry::Registries;
use crate::core::result::ValidatorResult;
use crate::core::validator::{Validator, ValidatorTest};
use crate::plugins::{candidate, reference_bundle};

pub const AM0001: Validator = Validator {
    code: "AM0001",
    name: "default_channel",
    description: "Ensure `defaultChannel` is present in the list of channels",
    runner: validate_default_channel,
};

pub fn register(registries: &Registries) -> Result<(), AddonError> {
    registries.validators.add(AM0001)?;
    registries.tests.add(validator_test())
}

pub fn validate_default_channel(mb: &MetaBundle) -> ValidatorResult {
    let meta = &mb.addon_meta;
    if meta.default_channel.is_empty() {
        return ValidatorResult::failure(format!(
            "`defaultChannel` not found under the addon metadata of {}",
            meta.id
        ));
    }
    if !meta.channels.iter().any(|c| c.name == meta.default_channel) {
        return ValidatorResult::failure(format!(
            "`defaultChannel` {} is not part of the channels of {}",
            meta.default_channel, meta.id
        ));
    }
    ValidatorResult::success()
}

pub fn validator_test() -> ValidatorTest {
    ValidatorTest::new(AM0001)
        .with_succeeding(vec![
            reference_bundle(),
            candidate(|m| {
                m.default_channel = "stable".to_string();
                m.channels.push(Channel {
                    name: "stable".to_string(),
                    current_csv: String::new(),
                });
            }),
        ])
        .with_failing(vec![
            candidate(|m| m.default_channel.clear()),
            candidate(|m| m.default_channel = "beta".to_string()),
            candidate(|m| m.channels.clear()),
        ])
}
