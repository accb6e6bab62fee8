use std::path::Path;
use tracing::debug;

use crate::commands::clean::{display_path, print_removed_values};
use crate::core::{load_config, locate, process_file, ConfigOverrides, FieldStripper, ProcessOptions};
use crate::error::VidcleanError;
use crate::models::{FileFailure, ScanReport};

/// Scan options
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub overrides: ConfigOverrides,
    /// Print the report as JSON instead of text
    pub json: bool,
}

/// Collect the values a clean run would erase, without writing anything
pub fn scan_values(root: &Path, overrides: ConfigOverrides) -> Result<ScanReport, VidcleanError> {
    let config = load_config(root, overrides)?;
    let stripper = FieldStripper::new(config.fields.names.as_slice())?;
    let files = locate(root, &config.scan.extension)?;

    let options = ProcessOptions {
        dry_run: true,
        backup: false,
    };

    let mut report = ScanReport::default();

    for path in &files {
        match process_file(path, &stripper, options) {
            Ok(outcome) => {
                report.summary.record_outcome(&outcome);
                if outcome.changed() {
                    report.files.push(outcome);
                }
            }
            Err(e) => {
                debug!("{}", e);
                report.summary.record_failure();
                report.failures.push(FileFailure {
                    path: e.path().to_path_buf(),
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Preview the values a clean run would erase
pub fn run_scan(root: &Path, options: ScanOptions) -> Result<ScanReport, VidcleanError> {
    let report = scan_values(root, options.overrides)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_scan_report(root, &report);
    }

    Ok(report)
}

fn print_scan_report(root: &Path, report: &ScanReport) {
    println!("=== Scan ===\n");

    if report.files.is_empty() {
        println!("No video values found.");
    }

    for outcome in &report.files {
        println!("{}", display_path(root, &outcome.path));
        print_removed_values(outcome);
    }

    for failure in &report.failures {
        println!("{}", display_path(root, &failure.path));
        println!("  Error ({}): {}", failure.kind, failure.message);
    }

    println!(
        "\n{} value(s) in {} of {} file(s) would be erased",
        report.total_values(),
        report.summary.changed,
        report.summary.processed
    );
    println!("Run 'vidclean clean' to apply.");
}
