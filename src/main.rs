//! A policy gate that keeps pre-release versions out of dependency resolution.
//!
//! # Overview
//!
//! `depgate` decides, for every candidate version of every external dependency
//! considered during a build's dependency resolution, whether that version may
//! be selected. Versions built entirely from digits and final-like qualifiers
//! (`release`, `ga`, `final`, `sp`, case-insensitive, plus the separators
//! `-`, `.`, `_`, `+`) count as released; anything else (`SNAPSHOT`, `dev`,
//! `M1`, `alpha`, `rc`, ...) is treated as a pre-release and rejected, unless
//! a whitelist pattern matches the candidate's full `group:module:version`
//! coordinate.
//!
//! The policy engine lives in the `depgate` library crate and is consulted by
//! the host build runtime once per candidate during graph resolution. This
//! binary exposes the same policy for ad-hoc and CI use.
//!
//! # Quick Start
//!
//! Generate a configuration file and evaluate a few candidates:
//!
//! ```bash
//! depgate init
//! depgate check com.example:widget:1.0 com.example:widget:2.0-SNAPSHOT
//! ```
//!
//! # Configuration
//!
//! **Default search locations:**
//! - `depgate.toml`
//! - `depgate.yml`
//! - `depgate.yaml`
//! - `depgate.json`
//!
//! All fields are optional; unspecified fields use their defaults.
//!
//! ```toml
//! [resolution]
//! # Reject candidate versions that look like pre-releases.
//! reject_pre_releases = true
//!
//! # Coordinates exempt from pre-release rejection. `*` matches any run of
//! # characters except `:`; write `\*` for a literal asterisk and `\\` for a
//! # literal backslash.
//! whitelist = ["com.example:*:*", "org.sample:widget:5.1-M1"]
//!
//! [locking]
//! # Gate whether the host installs the policy and lock task at all.
//! enabled = true
//! mode = "strict"   # "default", "strict", or "lenient"
//! ```
//!
//! # CI/CD Integration
//!
//! Fail the build when a pre-release slips into the candidate set:
//!
//! ```bash
//! depgate check --check com.example:widget:2.0-SNAPSHOT
//! ```
//!
//! Exit codes:
//! - `0`: every candidate was accepted
//! - `1`: at least one candidate was rejected, or the configuration is invalid
//!
//! # Other Commands
//!
//! **Validate a configuration file:**
//! ```bash
//! depgate validate --config depgate.toml
//! ```
//!
//! **Convert a configuration file between formats:**
//! ```bash
//! depgate convert depgate.yml depgate.toml
//! ```

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use depgate::Result;

mod commands;

use crate::commands::{
    CheckArgs, ConvertArgs, InitArgs, ValidateArgs, check_candidates, convert_config, init_config, validate_config,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "depgate", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: GateSubcommand,
}

#[derive(Subcommand, Debug)]
enum GateSubcommand {
    /// Evaluate candidate coordinates against the acceptance policy
    Check(Box<CheckArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// Convert a configuration file between formats
    Convert(ConvertArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        GateSubcommand::Check(check_args) => check_candidates(check_args),
        GateSubcommand::Init(init_args) => init_config(init_args),
        GateSubcommand::Validate(validate_args) => validate_config(validate_args),
        GateSubcommand::Convert(convert_args) => convert_config(convert_args),
    }
}
