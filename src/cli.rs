//! CLI struct definitions for the addon-validator command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "addon-validator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate addon metadata bundles against the registered validator set.",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// Disable ANSI colours in output.
    #[clap(long, global = true)]
    pub no_color: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ValidateCli {
    /// Addon metadata files (JSON, or TOML with a .toml extension).
    #[clap(required = true)]
    pub bundles: Vec<PathBuf>,
    /// Comma-separated validator codes to skip. Mutually exclusive with --enabled.
    #[clap(long)]
    pub disabled: Option<String>,
    /// Comma-separated validator codes to run exclusively. Mutually exclusive with --disabled.
    #[clap(long)]
    pub enabled: Option<String>,
    /// Output format: 'text' or 'json'.
    #[clap(long)]
    pub format: Option<String>,
    /// Configuration file (defaults to ./addon-validator.toml when present).
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Run validators one after another instead of in parallel.
    #[clap(long)]
    pub sequential: bool,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ListCli {
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Run the selected validators against one or more bundles
    Validate(ValidateCli),
    /// List registered validators
    List(ListCli),
    /// Check every validator against its own succeeding and failing candidates
    Selftest,
    /// Print the version
    Version,
}
