//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::Format;

#[derive(Parser, Debug)]
#[command(name = "slotted")]
#[command(about = "Inspect, validate and resolve slot-based variant tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve options into per-slot class strings
    Resolve(ResolveArgs),

    /// List a table's slots, axes, defaults and rules
    Describe(DescribeArgs),

    /// Load a table file and check it for consistency
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// YAML table file (defaults to the built-in pagination table)
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Select a variant value, e.g. `--set color=danger`
    #[arg(long = "set", value_name = "AXIS=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<(String, String)>,

    /// Emit base slot classes only
    #[arg(long)]
    pub unstyled: bool,

    /// Print a single slot
    #[arg(long, value_name = "NAME")]
    pub slot: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// YAML table file (defaults to the built-in pagination table)
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// YAML table file to check
    #[arg(long, value_name = "FILE")]
    pub table: PathBuf,
}

/// Parses `axis=value`. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (axis, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=VALUE, got `{raw}`"))?;
    let (axis, value) = (axis.trim(), value.trim());
    if axis.is_empty() {
        return Err(format!("missing axis name in `{raw}`"));
    }
    if value.is_empty() {
        return Err(format!("missing value for axis `{axis}`"));
    }
    Ok((axis.to_string(), value.to_string()))
}
