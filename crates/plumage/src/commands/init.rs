//! Initialize plumage in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    let root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    init(root, config_path, yes)
}

fn init(root: &Path, config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing plumage...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let components_dir = root.join("components");
    if !components_dir.exists() {
        fs::create_dir_all(&components_dir).context("Failed to create components directory")?;
    }

    let button_path = components_dir.join("button.toml");
    if !button_path.exists() || yes {
        fs::write(&button_path, DEFAULT_BUTTON).context("Failed to write button.toml")?;
        tracing::info!("Created {}", button_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Try: plumage render '<Button tone=\"accent\">Save</Button>'");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Plumage Configuration

[components]
# Directory containing component definitions (.toml, .json, .yaml)
dir = "components"

[output]
# Class prop flavor for `render`: "react" (className) or "preact" (class)
framework = "react"

[resolve]
# Reject invalid configs and unknown selections
strict = false
"#;

const DEFAULT_BUTTON: &str = r#"# Button component
element = "button"
base = "inline-flex items-center gap-2 rounded-md px-4 py-2 font-medium"
forwardProps = ["disabled"]

[variants.tone]
neutral = "bg-slate-100 text-slate-900 hover:bg-slate-200"
accent = "bg-teal-600 text-white hover:bg-teal-500"

[variants.size]
small = "text-sm h-8"
large = "text-lg h-11"

[variants.disabled]
true = "opacity-50 pointer-events-none"

[defaultVariants]
tone = "neutral"
size = "small"

[defaultProps]
type = "button"

[[compoundVariants]]
variants = { tone = "accent", size = "large" }
className = "shadow-md"
"#;
