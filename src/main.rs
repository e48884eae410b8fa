//! Site-Mirror main entry point
//!
//! This is the command-line interface over the Site-Mirror URL algebra and manifest builder.

use anyhow::Context;
use clap::{Parser, Subcommand};
use site_mirror::config::load_config;
use site_mirror::manifest::build_manifest;
use site_mirror::output::{render, write_output};
use site_mirror::url::{get_filename_from_url, get_hash_from_url, get_relative_path, get_url};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Site-Mirror: URL resolution and resource manifests for offline site copies
#[derive(Parser, Debug)]
#[command(name = "site-mirror")]
#[command(version = "1.0.0")]
#[command(
    about = "URL resolution and resource manifests for offline site copies",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a reference against the URL of the page it was found on
    Resolve {
        /// URL of the referring page
        base: String,
        /// Reference as written in the page
        reference: String,
    },

    /// Print the filename and fragment of a URL
    Filename {
        /// URL to inspect
        url: String,
    },

    /// Print the relative path from one mirrored file to another
    Relative {
        /// File containing the reference
        from: String,
        /// File being referenced
        to: String,
    },

    /// Replay a link log from a TOML config and write the resulting manifest
    Manifest {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Write the manifest here instead of the configured path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Resolve { base, reference } => {
            let url = get_url(&base, &reference)
                .with_context(|| format!("Failed to resolve '{}' against '{}'", reference, base))?;
            println!("{}", url);
        }
        Command::Filename { url } => {
            println!("filename: {}", get_filename_from_url(&url));
            println!("hash: {}", get_hash_from_url(&url));
        }
        Command::Relative { from, to } => {
            println!("{}", get_relative_path(&from, &to));
        }
        Command::Manifest { config, output } => handle_manifest(&config, output.as_deref())?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_mirror=info,warn"),
            1 => EnvFilter::new("site_mirror=debug,info"),
            2 => EnvFilter::new("site_mirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the manifest command: replays the link log and writes the manifest
fn handle_manifest(config_path: &Path, output_override: Option<&Path>) -> anyhow::Result<()> {
    tracing::info!("Loading configuration from: {}", config_path.display());
    let config = load_config(config_path)
        .with_context(|| format!("Failed to load configuration {}", config_path.display()))?;

    let manifest = build_manifest(&config).context("Failed to build manifest")?;

    let destination = output_override
        .map(Path::to_path_buf)
        .or_else(|| config.output.path.as_ref().map(PathBuf::from));

    match destination {
        Some(path) => {
            write_output(&manifest, config.output.format, config.output.pretty, &path)
                .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
            tracing::info!(
                "Manifest with {} resources written to {}",
                manifest.node_count(),
                path.display()
            );
        }
        None => {
            let rendered = render(&manifest, config.output.format, config.output.pretty)?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
