//! AM0004: the addon icon must be a base64-encoded PNG.
//!
//! The decoded bytes must be a complete PNG image: the header is read, the
//! first frame is inflated and the chunk stream is followed up to `IEND`.
//! Line breaks inside the base64 text are ignored.

use crate::core::bundle::MetaBundle;
use crate::core::error::AddonError;
use crate::core::registry::Registries;
use crate::core::result::ValidatorResult;
use crate::core::validator::{Validator, ValidatorTest};
use crate::plugins::{candidate, reference_bundle};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const AM0004: Validator = Validator {
    code: "AM0004",
    name: "icon_base64",
    description: "Ensure that `icon` in Addon metadata is rightfully base64 encoded",
    runner: validate_icon_base64,
};

pub fn register(registries: &Registries) -> Result<(), AddonError> {
    registries.validators.add(AM0004)?;
    registries.tests.add(validator_test())
}

pub fn validate_icon_base64(mb: &MetaBundle) -> ValidatorResult {
    let meta = &mb.addon_meta;
    if meta.icon.is_empty() {
        return ValidatorResult::failure(format!(
            "`icon` not found under the addon metadata of {}",
            meta.id
        ));
    }

    let encoded: Vec<u8> = meta
        .icon
        .bytes()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    let decoded = match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(_) => {
            return ValidatorResult::failure(format!(
                "`icon` found to be improperly base64 populated under the addon metadata of {}",
                meta.id
            ));
        }
    };

    if let Err(reason) = decode_png(&decoded) {
        return ValidatorResult::failure(format!(
            "`icon`'s base64 value found to correspond to a non-png data under the addon metadata of {} ({})",
            meta.id, reason
        ));
    }

    ValidatorResult::success()
}

/// Decode the first frame and read the remaining chunks. Bytes after `IEND`
/// are ignored.
fn decode_png(bytes: &[u8]) -> Result<(), png::DecodingError> {
    let mut reader = png::Decoder::new(bytes).read_info()?;
    let mut frame = vec![0; reader.output_buffer_size()];
    reader.next_frame(&mut frame)?;
    reader.finish()
}

pub fn validator_test() -> ValidatorTest {
    ValidatorTest::new(AM0004)
        .with_succeeding(vec![
            reference_bundle(),
            // reference icon wrapped across lines
            candidate(|m| {
                m.icon = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAf\nFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAA\r\nAABJRU5ErkJggg==".to_string()
            }),
        ])
        .with_failing(vec![
            candidate(|m| m.icon.clear()),
            candidate(|m| m.icon = "not-base64!!".to_string()),
            // "hello world, not an image"
            candidate(|m| m.icon = "aGVsbG8gd29ybGQsIG5vdCBhbiBpbWFnZQ==".to_string()),
            // PNG signature followed by garbage
            candidate(|m| m.icon = "iVBORw0KGgpnYXJiYWdl".to_string()),
            // reference icon with a corrupted IDAT byte
            candidate(|m| {
                m.icon = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwD9hwGA60e6kgAAAABJRU5ErkJggg==".to_string()
            }),
            // reference icon without IEND
            candidate(|m| {
                m.icon = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kg==".to_string()
            }),
            // well-formed chunks around image data that is not zlib
            candidate(|m| {
                m.icon = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAF0lEQVR0aGlzIGlzIG5vdCB6bGliIGF0IGFsbE8mvV0AAAAASUVORK5CYII=".to_string()
            }),
        ])
}
