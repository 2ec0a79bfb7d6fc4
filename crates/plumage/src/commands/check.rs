//! Strict validation of config files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use plumage_adapters::ComponentDefinition;
use plumage_core::ConfigFormat;
use walkdir::WalkDir;

/// Run the check command.
pub fn run(paths: &[PathBuf]) -> Result<()> {
    let files = collect_files(paths);
    if files.is_empty() {
        bail!("No config files found");
    }

    let mut failed = 0;
    for file in &files {
        let problems = check_file(file);
        if problems.is_empty() {
            tracing::info!("ok   {}", file.display());
        } else {
            failed += 1;
            for problem in problems {
                tracing::error!("fail {}: {}", file.display(), problem);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed validation", failed, files.len());
    }

    tracing::info!("Checked {} files", files.len());
    Ok(())
}

/// Expand directories into the config files they contain, sorted.
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(
                WalkDir::new(path)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .map(|e| e.into_path())
                    .filter(|p| ConfigFormat::from_path(p).is_some()),
            );
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files
}

/// Every problem found in one file; empty when the file is valid.
pub fn check_file(path: &Path) -> Vec<String> {
    match ConfigFormat::load::<ComponentDefinition>(path) {
        Ok(definition) => definition
            .config
            .issues()
            .iter()
            .map(ToString::to_string)
            .collect(),
        Err(e) => vec![e.to_string()],
    }
}
