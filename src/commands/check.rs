use super::common::{ColorMode, CommonArgs, init_logging, load_config, print_warnings};
use clap::Parser;
use depgate::Result;
use depgate::policy::{AcceptancePolicy, Candidate};
use ohno::bail;
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Candidate coordinates to evaluate, in group:module:version form
    #[arg(value_name = "COORDINATE", required = true)]
    pub coordinates: Vec<String>,

    /// Exit with failure if any candidate is rejected
    #[arg(long)]
    pub check: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Evaluate each coordinate against the configured acceptance policy and
/// print one verdict line per candidate.
pub fn check_candidates(args: &CheckArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let (config, warnings) = load_config(&args.common)?;
    print_warnings(&warnings);

    let policy = AcceptancePolicy::from_settings(&config.resolution);
    let colored = args.color.enabled();

    let mut rejected = 0usize;
    for coordinate in &args.coordinates {
        let candidate = Candidate::parse(coordinate)?;
        match policy.decide(&candidate).reason() {
            None => {
                if colored {
                    println!("{candidate} {}", "accepted".green());
                } else {
                    println!("{candidate} accepted");
                }
            }
            Some(reason) => {
                rejected += 1;
                if colored {
                    println!("{candidate} {} ({reason})", "rejected".red());
                } else {
                    println!("{candidate} rejected ({reason})");
                }
            }
        }
    }

    if args.check && rejected > 0 {
        bail!("{rejected} candidate(s) were rejected by the acceptance policy");
    }

    Ok(())
}
