//! Plumage CLI - resolve, render, and check variant class configurations.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "plumage")]
#[command(about = "Resolve variant selections into class strings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to plumage.toml config file
    #[arg(short, long, default_value = "plumage.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create plumage.toml and an example component
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Resolve a selection against a variants config file
    Resolve {
        /// Variants config file (.json, .toml, .yaml)
        file: PathBuf,

        /// Variant selection, e.g. --set tone=accent --set disabled=true
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Reject invalid configs and unknown selections
        #[arg(long)]
        strict: bool,
    },

    /// Render inline markup through registered components
    Render {
        /// Markup such as '<Button tone="accent">Go</Button>'
        snippet: String,

        /// Components directory (defaults to config or "components")
        #[arg(long)]
        components: Option<PathBuf>,

        /// Framework flavor: react or preact
        #[arg(short, long)]
        framework: Option<String>,
    },

    /// Validate config files strictly
    Check {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List the classes a config can emit
    Classes {
        /// Variants config file
        file: PathBuf,

        /// Print every option combination with its class string
        #[arg(long)]
        matrix: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so stdout carries only results
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let project = || config::load(&cli.config);

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Resolve { file, set, strict } => {
            let project = project()?;
            commands::resolve::run(&file, &set, strict || project.resolve.strict)?;
        }
        Commands::Render {
            snippet,
            components,
            framework,
        } => {
            let project = project()?;
            let components = components.unwrap_or(project.components.dir);
            let framework = framework.unwrap_or(project.output.framework);
            commands::render::run(&snippet, &components, &framework, project.resolve.strict)?;
        }
        Commands::Check { paths } => {
            project()?;
            commands::check::run(&paths)?;
        }
        Commands::Classes { file, matrix } => {
            project()?;
            commands::classes::run(&file, matrix)?;
        }
    }

    Ok(())
}
