//! Built-in addon metadata validators.
//!
//! Each validator lives in its own module and exposes `register`, which adds
//! the validator to the main registry and its candidates to the self-test
//! registry. New validators are wired in by appending to [`REGISTRARS`].

pub mod default_channel;
pub mod icon_base64;
pub mod label_format;
pub mod namespaces;

use crate::core::bundle::{AddonMetadata, Channel, MetaBundle};
use crate::core::error::AddonError;
use crate::core::registry::Registries;

pub type Registrar = fn(&Registries) -> Result<(), AddonError>;

pub const REGISTRARS: &[Registrar] = &[
    default_channel::register,
    label_format::register,
    namespaces::register,
    icon_base64::register,
];

pub fn register_all(registries: &Registries) -> Result<(), AddonError> {
    REGISTRARS.iter().try_for_each(|register| register(registries))
}

/// 1x1 PNG, base64 encoded.
pub(crate) const REFERENCE_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// A bundle every built-in validator accepts; candidates are derived from it.
pub fn reference_bundle() -> MetaBundle {
    MetaBundle::new(AddonMetadata {
        id: "reference-addon".to_string(),
        name: "Reference Addon".to_string(),
        description: "Addon used to exercise validators".to_string(),
        label: "api.openshift.com/addon-reference-addon".to_string(),
        icon: REFERENCE_ICON.to_string(),
        default_channel: "alpha".to_string(),
        channels: vec![Channel {
            name: "alpha".to_string(),
            current_csv: "reference-addon.v0.1.0".to_string(),
        }],
        target_namespace: "reference-addon".to_string(),
        namespaces: vec!["reference-addon".to_string()],
        operator_name: "reference-addon".to_string(),
        ..Default::default()
    })
}

/// Copy of the reference bundle with `edit` applied to its metadata.
pub(crate) fn candidate(edit: impl FnOnce(&mut AddonMetadata)) -> MetaBundle {
    let mut bundle = reference_bundle();
    edit(&mut bundle.addon_meta);
    bundle
}
