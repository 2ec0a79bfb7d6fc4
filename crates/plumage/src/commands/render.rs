//! Render inline markup through registered components.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plumage_adapters::{adapter_for, ComponentRegistry};

/// Run the render command.
pub fn run(snippet: &str, components: &Path, framework: &str, strict: bool) -> Result<()> {
    println!("{}", render(snippet, components, framework, strict)?);
    Ok(())
}

/// Render `snippet` to static HTML.
pub fn render(snippet: &str, components: &Path, framework: &str, strict: bool) -> Result<String> {
    let adapter =
        adapter_for(framework).ok_or_else(|| anyhow!("Unknown framework: {}", framework))?;

    let mut registry = if strict {
        ComponentRegistry::strict()
    } else {
        ComponentRegistry::new()
    };
    let count = registry
        .scan(components)
        .with_context(|| format!("Failed to load components from {}", components.display()))?;
    tracing::debug!("Loaded {} components", count);

    let element = registry.render_inline(snippet, adapter.as_ref())?;
    Ok(element.to_html())
}
