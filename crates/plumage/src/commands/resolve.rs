//! Resolve a selection against a variants config file.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plumage_core::{Resolver, Selection, VariantsConfig};

/// Run the resolve command.
pub fn run(file: &Path, assignments: &[String], strict: bool) -> Result<()> {
    println!("{}", resolve_file(file, assignments, strict)?);
    Ok(())
}

/// Load `file`, apply `NAME=VALUE` assignments, and return the class string.
pub fn resolve_file(file: &Path, assignments: &[String], strict: bool) -> Result<String> {
    let config = VariantsConfig::from_path(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let selection = Selection::from_assignments(assignments.iter().map(String::as_str))
        .map_err(|bad| anyhow!("Invalid assignment '{}': expected NAME=VALUE", bad))?;

    let resolver = if strict {
        let resolver = Resolver::strict(config)
            .with_context(|| format!("{} failed validation", file.display()))?;
        resolver.check_selection(&selection)?;
        resolver
    } else {
        Resolver::new(config)
    };

    tracing::debug!("Resolving {} selected variants", selection.len());
    Ok(resolver.resolve(&selection))
}
