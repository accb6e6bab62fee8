use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::{debug, info};

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::core::{load_config, locate, process_file, ConfigOverrides, FieldStripper, ProcessOptions};
use crate::error::VidcleanError;
use crate::models::{Config, FileOutcome, RunSummary};

/// Clean options
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub overrides: ConfigOverrides,
}

/// Erase video values from every candidate file under `root`.
///
/// Nothing is written until the user confirms (unless confirmation is
/// disabled). On a terminal the answer comes from an interactive prompt;
/// otherwise one line is read from stdin. Failures on individual files are
/// reported and counted; they never stop the remaining files from being
/// processed.
pub fn run_clean(root: &Path, options: CleanOptions) -> Result<RunSummary, VidcleanError> {
    if io::stdin().is_terminal() {
        clean_files(root, options, confirm_interactive)
    } else {
        clean_files(root, options, || read_answer(io::stdin().lock()))
    }
}

/// Same as [`run_clean`], with the confirmation answer read from `input`
pub fn run_clean_with_input<R: BufRead>(
    root: &Path,
    options: CleanOptions,
    input: R,
) -> Result<RunSummary, VidcleanError> {
    clean_files(root, options, || read_answer(input))
}

fn clean_files<F>(root: &Path, options: CleanOptions, confirm: F) -> Result<RunSummary, VidcleanError>
where
    F: FnOnce() -> Result<bool, VidcleanError>,
{
    let config = load_config(root, options.overrides)?;
    let stripper = FieldStripper::new(config.fields.names.as_slice())?;
    let files = locate(root, &config.scan.extension)?;

    if files.is_empty() {
        println!("No {} files found under {}", config.scan.extension, root.display());
        return Ok(RunSummary::default());
    }

    println!("Found {} {} file(s):", files.len(), config.scan.extension);
    for path in &files {
        println!("  - {}", display_path(root, path));
    }

    print_plan(&config);

    if config.behavior.confirm && !confirm()? {
        println!("Cancelled, no files were changed.");
        info!("Run cancelled by user");
        return Ok(RunSummary::cancelled());
    }

    let process_options = ProcessOptions {
        dry_run: false,
        backup: config.behavior.backup,
    };

    let mut summary = RunSummary::default();

    for path in &files {
        println!("\nProcessing: {}", display_path(root, path));
        match process_file(path, &stripper, process_options) {
            Ok(outcome) => {
                print_outcome(&outcome);
                summary.record_outcome(&outcome);
            }
            Err(e) => {
                debug!("{}", e);
                println!("  Error ({}): {}", e.kind(), e);
                summary.record_failure();
            }
        }
    }

    println!("\n=== Results ===\n");
    println!("{}", summary);

    if summary.changed > 0 {
        println!("\nReview the changed files before committing them.");
        if config.behavior.backup {
            println!("Originals were saved next to each file with a .backup suffix.");
        }
    }

    Ok(summary)
}

fn print_plan(config: &Config) {
    println!("\nThis will:");
    println!("  - Erase the values of: {}", config.fields.names.join(", "));
    println!("  - Keep every key, the key order and the original formatting");
    if !config.fields.names.iter().any(|f| f == "external_video_url") {
        println!("  - Leave external_video_url untouched");
    }
    if config.behavior.backup {
        println!("  - Save a .backup copy of each file before changing it");
    }
}

/// Ask the user whether to continue, defaulting to no
fn confirm_interactive() -> Result<bool, VidcleanError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Continue?")
        .default(false)
        .interact()
        .map_err(|e| VidcleanError::Prompt(e.to_string()))
}

/// Read a yes/no answer as one line of text; anything but y/yes declines
fn read_answer<R: BufRead>(mut input: R) -> Result<bool, VidcleanError> {
    print!("Continue? (y/N): ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    println!();

    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print the values erased (or that would be erased) from one file
pub fn print_removed_values(outcome: &FileOutcome) {
    for removed in &outcome.removed {
        println!(
            "  - {} (line {}): '{}'",
            removed.field, removed.line, removed.value
        );
    }
}

fn print_outcome(outcome: &FileOutcome) {
    if outcome.changed() {
        print_removed_values(outcome);
        println!("  Saved with {} value(s) erased", outcome.removed.len());
    } else {
        println!("  No video values found");
    }
}

/// Path relative to the scanned root, for display
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
