//! preflight CLI - Pre-run memory estimation for batch document conversion.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::SettingsOverrides;
use display::Format;

#[derive(Parser)]
#[command(name = "preflight")]
#[command(about = "Estimate batch conversion memory before running it", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Settings directory (defaults to the platform config directory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate memory for a set of input files and recommend a policy
    Estimate {
        /// Input files or directories (directories are walked recursively)
        paths: Vec<PathBuf>,

        #[command(flatten)]
        overrides: SettingsOverrides,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Show per-format and per-bucket counts and the estimate terms
        #[arg(long)]
        breakdown: bool,

        /// Maximum concurrent metadata reads while profiling
        #[arg(long, default_value = "16")]
        concurrency: usize,
    },

    /// List input formats and size buckets with their weights
    Formats,

    /// Show or change the stored performance settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Actions for the stored settings.
#[derive(Subcommand)]
enum SettingsAction {
    /// Print the stored settings
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Update and persist settings
    Set {
        #[command(flatten)]
        overrides: SettingsOverrides,
    },

    /// Delete stored settings and return to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let store = commands::open_store(cli.config_dir)?;

    match command {
        Commands::Estimate {
            paths,
            overrides,
            format,
            breakdown,
            concurrency,
        } => {
            commands::estimate::estimate(
                &store,
                paths,
                &overrides,
                format,
                breakdown,
                concurrency,
                cli.quiet,
            )
            .await
        }
        Commands::Formats => {
            commands::formats::list_formats();
            Ok(())
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show { format } => commands::settings::show(&store, format),
            SettingsAction::Set { overrides } => commands::settings::set(&store, &overrides),
            SettingsAction::Reset { yes } => commands::settings::reset(&store, yes),
        },
    }
}
