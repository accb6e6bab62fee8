use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vidclean::commands::{run_clean, run_scan, CleanOptions, ScanOptions};
use vidclean::core::ConfigOverrides;

/// vidclean - erase video URL values from JSON files, keeping their formatting
#[derive(Parser)]
#[command(name = "vidclean")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Root directory to scan (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(flatten)]
    select: SelectArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command
#[derive(Args, Clone, Default)]
struct SelectArgs {
    /// Override the target field list (comma separated, checked in order)
    #[arg(long, value_delimiter = ',', global = true)]
    fields: Option<Vec<String>>,

    /// Override the file name suffix to look for
    #[arg(long, global = true)]
    extension: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Erase video values in place (default)
    Clean {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Save a .backup copy of each file before changing it
        #[arg(long)]
        backup: bool,
    },

    /// Show which values would be erased without changing any file
    Scan {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging; RUST_LOG wins over --verbose when set
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {}", e);
    }

    let root = match cli.path {
        Some(p) => p,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {}", e);
                std::process::exit(1);
            }
        },
    };

    let command = cli.command.unwrap_or(Commands::Clean {
        yes: false,
        backup: false,
    });

    let result = match command {
        Commands::Clean { yes, backup } => {
            let options = CleanOptions {
                overrides: ConfigOverrides {
                    fields: cli.select.fields,
                    extension: cli.select.extension,
                    backup,
                    assume_yes: yes,
                },
            };
            run_clean(&root, options).map(|_| ())
        }

        Commands::Scan { json } => {
            let options = ScanOptions {
                overrides: ConfigOverrides {
                    fields: cli.select.fields,
                    extension: cli.select.extension,
                    ..ConfigOverrides::default()
                },
                json,
            };
            run_scan(&root, options).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
