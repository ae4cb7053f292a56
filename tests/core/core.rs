use addon_validator::core::error::AddonError;
use addon_validator::core::filter::Filter;
use addon_validator::core::harness::{self, ExecutionMode};
use addon_validator::core::registry::{self, Registries};
use addon_validator::plugins::{self, default_channel, reference_bundle};
use std::sync::Arc;
use std::thread;

fn registries() -> &'static Registries {
    registry::global().expect("bootstrap registries")
}

#[test]
fn every_validator_accepts_and_rejects_its_own_candidates() {
    let tests = registries().tests.all();
    assert!(!tests.is_empty());

    for test in &tests {
        for mb in &test.succeeding_candidates {
            let res = harness::run(&test.validator, mb);
            assert!(!res.is_error(), "{}: {}", test.name(), res);
            assert!(res.is_success(), "{}: {}", test.name(), res);
        }
        for mb in &test.failing_candidates {
            let res = harness::run(&test.validator, mb);
            assert!(!res.is_error(), "{}: {}", test.name(), res);
            assert!(!res.is_success(), "{}: unexpectedly passed", test.name());
        }
    }

    let outcomes = harness::run_self_tests(&tests);
    let codes: Vec<_> = outcomes.iter().map(|o| o.code).collect();
    let expected: Vec<_> = tests.iter().map(|t| t.code()).collect();
    assert_eq!(codes, expected, "self-test outcomes keep registration order");
    assert!(outcomes.iter().all(|o| o.passed()));
}

#[test]
fn every_registered_validator_has_candidates() {
    let registries = registries();
    for test in registries.tests.all() {
        assert!(registries.validators.get(test.code()).is_some());
        assert!(!test.succeeding_candidates.is_empty(), "{}", test.code());
        assert!(!test.failing_candidates.is_empty(), "{}", test.code());
    }
}

#[test]
fn filter_disabled_validators() {
    let n_validators = registries().validators.len();
    let cases: [(&str, &[&str]); 3] = [
        ("all_enabled", &[]),
        ("disable_default_channel", &["AM0001"]),
        ("disable_two", &["AM0001", "AM0002"]),
    ];

    for (name, disabled) in cases {
        let filter = Filter::new(&registries().validators, &disabled.join(","), "")
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(filter.len() + disabled.len(), n_validators, "{}", name);
        for code in disabled {
            assert!(!filter.codes().iter().any(|c| c == code), "{}", name);
        }
    }
}

#[test]
fn filter_enabled_validators() {
    let cases: [(&str, &[&str]); 2] = [
        ("enable_default_channel", &["AM0001"]),
        ("enable_two", &["AM0001", "AM0002"]),
    ];

    for (name, enabled) in cases {
        let filter = Filter::new(&registries().validators, "", &enabled.join(","))
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(filter.len(), enabled.len(), "{}", name);
        assert_eq!(filter.codes(), enabled.to_vec(), "{}", name);
    }
}

#[test]
fn empty_filter_enables_everything() {
    let filter = Filter::new(&registries().validators, "", "").expect("empty filter");
    assert_eq!(filter.len(), registries().validators.len());
}

#[test]
fn filter_errors() {
    let cases = [
        ("mutually_exclusive", "AM0001", "AM0001"),
        ("enabled_dont_exist", "", "invalid-code"),
        ("disabled_dont_exist", "invalid-code", ""),
    ];

    for (name, disabled, enabled) in cases {
        let res = Filter::new(&registries().validators, disabled, enabled);
        assert!(res.is_err(), "{} should fail", name);
    }

    assert!(matches!(
        Filter::new(&registries().validators, "AM0001", "AM0001"),
        Err(AddonError::MutuallyExclusive)
    ));
}

#[test]
fn filters_resolve_independently_across_threads() {
    let handles: Vec<_> = ["", "AM0001", "AM0001,AM0002"]
        .into_iter()
        .map(|disabled| {
            thread::spawn(move || {
                let filter = Filter::new(&registries().validators, disabled, "").expect("filter");
                (disabled, filter.len())
            })
        })
        .collect();

    let total = registries().validators.len();
    for handle in handles {
        let (disabled, len) = handle.join().expect("join");
        let n_disabled = disabled.split(',').filter(|c| !c.is_empty()).count();
        assert_eq!(len, total - n_disabled);
    }
}

#[test]
fn duplicate_registration_fails_bootstrap_of_a_fresh_registry() {
    let fresh = Registries::new();
    plugins::register_all(&fresh).expect("first registration");
    let err = default_channel::register(&fresh).unwrap_err();
    assert!(matches!(err, AddonError::DuplicateValidator(code) if code == "AM0001"));
}

#[test]
fn concurrent_registrars_produce_the_same_registry() {
    let fresh = Arc::new(Registries::new());
    let handles: Vec<_> = plugins::REGISTRARS
        .iter()
        .rev()
        .map(|register| {
            let fresh = Arc::clone(&fresh);
            let register = *register;
            thread::spawn(move || register(&fresh))
        })
        .collect();
    for handle in handles {
        handle.join().expect("join").expect("register");
    }

    assert_eq!(
        fresh.validators.all().keys().collect::<Vec<_>>(),
        registries().validators.all().keys().collect::<Vec<_>>()
    );
}

#[test]
fn reference_bundle_passes_every_validator() {
    let filter = Filter::new(&registries().validators, "", "").expect("filter");
    let report = harness::run_matrix(
        filter.validators(),
        &[reference_bundle()],
        ExecutionMode::Parallel,
    );
    assert!(!report.has_problems(), "{:?}", report.outcomes);
    assert_eq!(report.summary.success, filter.len());
}
