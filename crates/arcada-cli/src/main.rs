//! Arcada CLI — builds and inspects dental-arch manifests.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "arcada")]
#[command(version, about = "Arcada — dental-arch manifest builder")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the manifest from a dataset.
    Build(BuildArgs),

    /// Summarize an existing manifest file.
    Inspect {
        /// Path to the manifest JSON.
        #[arg(default_value = "tooth_manifest.json")]
        path: PathBuf,
    },
}

/// Dataset path selection: flags override the config file, which
/// overrides the conventional names under `--root`.
#[derive(Args)]
struct BuildArgs {
    /// Layout config file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base directory for the conventional dataset filenames.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory of fragment mesh files.
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Legacy positioning script.
    #[arg(long)]
    legacy_script: Option<PathBuf>,

    /// Consolidated assembly mesh.
    #[arg(long)]
    assembly: Option<PathBuf>,

    /// Manifest file to write.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => commands::build(args),
        Commands::Inspect { path } => commands::inspect(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
