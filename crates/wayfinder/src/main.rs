//! Wayfinder CLI - documentation site configuration and link auditing.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::export::ExportFormat;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "Documentation site configuration and link auditing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a site configuration and starter docs tree
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the configuration and audit links against the docs tree
    Check {
        /// Root of the markdown tree
        #[arg(short, long, default_value = "docs")]
        docs: PathBuf,

        /// Treat dead links as errors even if the config ignores them
        #[arg(long)]
        strict: bool,

        /// Re-run the audit whenever the config or docs change
        #[arg(short, long)]
        watch: bool,
    },

    /// Show how the nav and sidebar resolve for one route
    Inspect {
        /// Route to resolve, e.g. /dev/core/modules
        route: String,

        /// Docs tree to check the route's source file against
        #[arg(short, long)]
        docs: Option<PathBuf>,
    },

    /// Re-serialize the configuration to another format
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(cli.config, yes).await?;
        }
        Commands::Check {
            docs,
            strict,
            watch,
        } => {
            commands::check::run(cli.config, docs, strict, watch).await?;
        }
        Commands::Inspect { route, docs } => {
            commands::inspect::run(cli.config, route, docs).await?;
        }
        Commands::Export { format, output } => {
            commands::export::run(cli.config, format, output).await?;
        }
    }

    Ok(())
}
