//! addon-validator: rule-based validation of addon metadata bundles.
//!
//! Validators are registered once per process into a shared registry keyed
//! by a unique code (`AM0001`, `AM0002`, ...). A run selects a subset with an
//! enable or a disable list, then evaluates every selected validator against
//! every bundle. Each evaluation yields one of three results:
//!
//! - **Success**: the bundle satisfies the rule
//! - **Failure**: a confirmed violation, with a message
//! - **Error**: the rule could not be evaluated, with a cause
//!
//! # Examples
//!
//! ```bash
//! # Run every validator
//! addon-validator validate addon.json
//!
//! # Skip one validator
//! addon-validator validate --disabled AM0003 addon.json
//!
//! # Check the validators against their own candidates
//! addon-validator selftest
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: result type, registries, filter, execution harness, config, output
//! - [`plugins`]: built-in validators

pub mod core;
pub mod plugins;

mod cli;

use cli::{Cli, Command, ListCli, ValidateCli};
use crate::core::config::{self, OutputFormat, Overrides};
use crate::core::error::AddonError;
use crate::core::filter::Filter;
use crate::core::{bundle, harness, output, registry};

use clap::Parser;

pub fn run() -> Result<(), AddonError> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::List(list) => run_list(list),
        Command::Selftest => run_selftest(),
        Command::Validate(validate) => run_validate(validate),
    }
}

fn run_list(cli: ListCli) -> Result<(), AddonError> {
    let json = OutputFormat::parse(&cli.format)? == OutputFormat::Json;
    let registries = registry::global()?;
    let validators: Vec<_> = registries.validators.all().into_values().collect();
    print!("{}", output::render_validator_list(&validators, json)?);
    Ok(())
}

fn run_selftest() -> Result<(), AddonError> {
    let registries = registry::global()?;
    let outcomes = harness::run_self_tests(&registries.tests.all());
    print!("{}", output::render_self_tests(&outcomes));

    let failed: Vec<String> = outcomes
        .iter()
        .filter(|o| !o.passed())
        .map(|o| o.code.to_string())
        .collect();
    if failed.is_empty() {
        println!("selftest: {} validator(s) ok", outcomes.len());
        Ok(())
    } else {
        Err(AddonError::ValidationError(format!(
            "self-test failed for {}",
            failed.join(", ")
        )))
    }
}

fn run_validate(cli: ValidateCli) -> Result<(), AddonError> {
    let current_dir = std::env::current_dir()?;
    let settings = config::load_config(cli.config.as_deref(), &current_dir)?.resolve(&Overrides {
        disabled: cli.disabled,
        enabled: cli.enabled,
        format: cli.format,
        sequential: cli.sequential,
    })?;

    let registries = registry::global()?;
    let filter = Filter::from_codes(&registries.validators, &settings.disabled, &settings.enabled)?;
    output::trace("filter", &format!("active={}", filter.codes().join(",")));

    let bundles = bundle::load_bundles(&cli.bundles)?;
    let report = harness::run_matrix(filter.validators(), &bundles, settings.mode);

    match settings.format {
        OutputFormat::Text => print!("{}", output::render_text(&report)),
        OutputFormat::Json => println!("{}", output::render_json(&report)?),
    }

    if report.has_problems() {
        let problems: Vec<String> = report
            .problems()
            .map(|o| format!("{} {}: {}", o.code, o.addon_id, o.result.message()))
            .collect();
        Err(AddonError::ValidationError(format!(
            "{} problem(s): {}",
            problems.len(),
            output::preview_messages(&problems, 2, 110)
        )))
    } else {
        Ok(())
    }
}
