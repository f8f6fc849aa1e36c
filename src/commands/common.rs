//! Shared plumbing for the depgate subcommands.

use camino::Utf8PathBuf;
use clap::Args;
use clap::ValueEnum;
use depgate::Result;
use depgate::config::Config;
use std::io::{IsTerminal, stdout};

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Control when to use colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn enabled(self) -> bool {
        matches!(self, Self::Always) || (matches!(self, Self::Auto) && stdout().is_terminal())
    }
}

/// Common arguments shared by subcommands that read configuration
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file [default: one of depgate.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH", env = "DEPGATE_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return, // Already checked above, but being explicit
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
        .init();
}

/// Load the configuration named by the arguments, searching the current
/// directory when no explicit path was given.
pub fn load_config(args: &CommonArgs) -> Result<(Config, Vec<String>)> {
    let root = Utf8PathBuf::from(".");
    Config::load(&root, args.config.as_ref())
}

pub fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        eprintln!("\n⚠️  Configuration validation warnings:");
        for warning in warnings {
            eprintln!("   {warning}");
        }
        eprintln!();
    }
}
