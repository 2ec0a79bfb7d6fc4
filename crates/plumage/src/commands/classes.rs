//! List the classes a config can emit.

use std::path::Path;

use anyhow::{Context, Result};
use plumage_core::{Resolver, Selection, VariantsConfig};

/// Run the classes command.
pub fn run(file: &Path, matrix: bool) -> Result<()> {
    let config = VariantsConfig::from_path(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let resolver = Resolver::new(config);

    let lines = if matrix {
        matrix_lines(&resolver)
    } else {
        resolver.classes_used()
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// One `name=value ...<TAB>classes` line per combination.
pub fn matrix_lines(resolver: &Resolver) -> Vec<String> {
    resolver
        .matrix()
        .into_iter()
        .map(|(selection, classes)| format!("{}\t{}", describe(&selection), classes))
        .collect()
}

fn describe(selection: &Selection) -> String {
    selection
        .iter()
        .map(|(name, option)| format!("{}={}", name, option.as_key()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_line_per_combination() {
        let resolver = Resolver::new(
            VariantsConfig::new()
                .base("chip")
                .variant("size", [("sm", "h-6"), ("lg", "h-8")])
                .variant("active", [("true", "ring")]),
        );

        assert_eq!(
            matrix_lines(&resolver),
            vec![
                "size=sm active=false\tchip h-6",
                "size=sm active=true\tchip h-6 ring",
                "size=lg active=false\tchip h-8",
                "size=lg active=true\tchip h-8 ring",
            ]
        );
    }
}
