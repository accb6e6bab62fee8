//! Per-file and per-run results reported to the user

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A value erased from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedValue {
    /// Target field whose value was erased
    pub field: String,
    /// The erased value, without its quotes
    pub value: String,
    /// 1-based line number in the document
    pub line: usize,
}

/// Result of processing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub removed: Vec<RemovedValue>,
    /// Whether the file was rewritten on disk
    pub written: bool,
    /// Backup copy created before the rewrite, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// A file that could not be processed
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: String,
    pub message: String,
}

/// Aggregate counters for a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Every file that was attempted, failures included
    pub processed: usize,
    pub changed: usize,
    /// Processed without error and without any value to erase
    pub unchanged: usize,
    pub failed: usize,
    /// The user declined the confirmation prompt
    pub cancelled: bool,
}

impl RunSummary {
    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }

    pub fn record_outcome(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        if outcome.changed() {
            self.changed += 1;
        } else {
            self.unchanged += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.processed += 1;
        self.failed += 1;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cancelled {
            return write!(f, "Cancelled: no files were processed");
        }
        writeln!(f, "Processed: {} file(s)", self.processed)?;
        writeln!(f, "Changed:   {} file(s)", self.changed)?;
        write!(f, "Unchanged: {} file(s)", self.unchanged)?;
        if self.failed > 0 {
            write!(f, "\nFailed:    {} file(s)", self.failed)?;
        }
        Ok(())
    }
}

/// Read-only preview of what a clean run would erase
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Files with at least one value to erase
    pub files: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
    pub summary: RunSummary,
}

impl ScanReport {
    pub fn total_values(&self) -> usize {
        self.files.iter().map(|f| f.removed.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(removed: usize) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from("a.json"),
            removed: (0..removed)
                .map(|i| RemovedValue {
                    field: "video".to_string(),
                    value: format!("clip{}.mp4", i),
                    line: i + 1,
                })
                .collect(),
            written: false,
            backup: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record_outcome(&outcome(2));
        summary.record_outcome(&outcome(0));
        summary.record_failure();

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.cancelled);
    }

    #[test]
    fn test_summary_display() {
        let mut summary = RunSummary::default();
        summary.record_outcome(&outcome(1));
        let text = summary.to_string();
        assert!(text.contains("Processed: 1 file(s)"));
        assert!(text.contains("Changed:   1 file(s)"));
        assert!(!text.contains("Failed"));

        assert_eq!(
            RunSummary::cancelled().to_string(),
            "Cancelled: no files were processed"
        );
    }

    #[test]
    fn test_scan_report_serialization() {
        let mut report = ScanReport::default();
        report.files.push(outcome(2));
        report.summary.record_outcome(&report.files[0]);

        assert_eq!(report.total_values(), 2);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"field\":\"video\""));
        assert!(json.contains("\"value\":\"clip0.mp4\""));
        assert!(json.contains("\"changed\":1"));
        assert!(!json.contains("\"backup\""));
    }
}
