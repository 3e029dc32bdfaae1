//! Command handlers. Each returns the text to print on success.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use slotted::components::pagination;
use slotted::{Options, Resolver, VariantTable};

use crate::args::{Commands, DescribeArgs, ResolveArgs, ValidateArgs};
use crate::output;

pub fn run(command: &Commands) -> Result<String> {
    match command {
        Commands::Resolve(args) => resolve(args),
        Commands::Describe(args) => describe(args),
        Commands::Validate(args) => validate(args),
    }
}

/// Loads a YAML table, or the built-in pagination table when no path is given.
pub fn load_table(path: Option<&Path>) -> Result<Cow<'static, VariantTable>> {
    let Some(path) = path else {
        tracing::debug!("using built-in pagination table");
        return Ok(Cow::Borrowed(pagination::table()));
    };

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read table file {}", path.display()))?;
    let table = VariantTable::from_yaml(&source)
        .with_context(|| format!("invalid table in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        slots = table.slots().len(),
        axes = table.axes().len(),
        "loaded table"
    );
    Ok(Cow::Owned(table))
}

fn resolve(args: &ResolveArgs) -> Result<String> {
    let table = load_table(args.table.as_deref())?;
    let options: Options = args
        .assignments
        .iter()
        .map(|(axis, value)| (axis.as_str(), value.as_str()))
        .collect();

    let resolved = Resolver::new(&table)
        .disable_variants(args.unstyled)
        .resolve(&options)?;

    match &args.slot {
        Some(name) => {
            let classes = resolved.get(name).ok_or_else(|| {
                anyhow!(
                    "unknown slot `{name}` (available: {})",
                    table.slot_names().collect::<Vec<_>>().join(", ")
                )
            })?;
            output::slot(name, classes, args.format)
        }
        None => output::slots(&resolved, args.format),
    }
}

fn describe(args: &DescribeArgs) -> Result<String> {
    let table = load_table(args.table.as_deref())?;
    output::summary(&table, args.format)
}

fn validate(args: &ValidateArgs) -> Result<String> {
    let table = load_table(Some(&args.table))?;
    Ok(format!(
        "{} {}: {} slots, {} axes, {} compound rules, {} compound slot rules",
        console::style("ok").green().bold(),
        args.table.display(),
        table.slots().len(),
        table.axes().len(),
        table.compound_rules().len(),
        table.compound_slot_rules().len(),
    ))
}
