use addon_validator::core::bundle::{AddonMetadata, MetaBundle};
use addon_validator::core::harness;
use addon_validator::core::result::ValidatorResult;
use addon_validator::plugins::icon_base64::{AM0004, validate_icon_base64};
use addon_validator::plugins::reference_bundle;

fn with_icon(icon: &str) -> MetaBundle {
    MetaBundle::new(AddonMetadata {
        id: "icon-addon".to_string(),
        icon: icon.to_string(),
        ..Default::default()
    })
}

fn failure_message(result: ValidatorResult) -> String {
    match result {
        ValidatorResult::Failure { message } => message,
        other => panic!("expected failure, got {}", other),
    }
}

#[test]
fn empty_icon_is_not_found() {
    let msg = failure_message(validate_icon_base64(&with_icon("")));
    assert!(msg.contains("not found"), "{}", msg);
    assert!(msg.contains("icon-addon"), "{}", msg);
}

#[test]
fn invalid_base64_is_improperly_populated() {
    let msg = failure_message(validate_icon_base64(&with_icon("not-base64!!")));
    assert!(msg.contains("improperly base64"), "{}", msg);
}

#[test]
fn base64_of_non_png_bytes_is_rejected() {
    // "hello world, not an image"
    let msg = failure_message(validate_icon_base64(&with_icon(
        "aGVsbG8gd29ybGQsIG5vdCBhbiBpbWFnZQ==",
    )));
    assert!(msg.contains("non-png"), "{}", msg);
    assert!(msg.contains("icon-addon"), "{}", msg);
}

#[test]
fn corrupted_png_is_rejected() {
    let msg = failure_message(validate_icon_base64(&with_icon(
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwD9hwGA60e6kgAAAABJRU5ErkJggg==",
    )));
    assert!(msg.contains("non-png"), "{}", msg);
    assert!(msg.contains("icon-addon"), "{}", msg);
}

#[test]
fn png_framing_around_non_zlib_data_is_rejected() {
    // Valid IHDR, IDAT("this is not zlib at all") and IEND, all with correct CRCs.
    let msg = failure_message(validate_icon_base64(&with_icon(
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAF0lEQVR0aGlzIGlzIG5vdCB6bGliIGF0IGFsbE8mvV0AAAAASUVORK5CYII=",
    )));
    assert!(msg.contains("non-png"), "{}", msg);
}

#[test]
fn line_wrapped_icon_succeeds() {
    let bundle = with_icon(
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAf\nFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAA\r\nAABJRU5ErkJggg==",
    );
    assert_eq!(validate_icon_base64(&bundle), ValidatorResult::Success);
}

#[test]
fn real_png_succeeds() {
    let bundle = reference_bundle();
    assert_eq!(validate_icon_base64(&bundle), ValidatorResult::Success);
    assert!(harness::run(&AM0004, &bundle).is_success());
}
