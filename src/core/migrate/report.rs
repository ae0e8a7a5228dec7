//! Run report: the accumulator the driver fills in, and its text rendering.

use serde::Serialize;

use super::rules::{Rule, RuleHit, RULES};
use crate::defaults::{ANALYZE_COMMAND, MANUAL_FOLLOWUPS};

const RULE_WIDTH: usize = 60;

/// What happened to one discovered file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Content changed. In dry-run mode nothing was written.
    Modified { changes: usize, rules: Vec<RuleHit> },
    Unchanged,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Path relative to the project root.
    pub file: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Aggregate result of a migration run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub base_dir: String,
    pub dry_run: bool,
    pub files_found: usize,
    pub files_modified: usize,
    pub files_failed: usize,
    pub total_changes: usize,
    pub files: Vec<FileReport>,
    pub rules: &'static [Rule],
    pub manual_followups: &'static [&'static str],
}

impl MigrationReport {
    pub fn new(base_dir: String, dry_run: bool) -> Self {
        Self {
            base_dir,
            dry_run,
            files_found: 0,
            files_modified: 0,
            files_failed: 0,
            total_changes: 0,
            files: Vec::new(),
            rules: RULES,
            manual_followups: MANUAL_FOLLOWUPS,
        }
    }

    pub fn record_modified(&mut self, file: String, changes: usize, rules: Vec<RuleHit>) {
        self.files_modified += 1;
        self.total_changes += changes;
        self.files.push(FileReport {
            file,
            outcome: FileOutcome::Modified { changes, rules },
        });
    }

    pub fn record_unchanged(&mut self, file: String) {
        self.files.push(FileReport {
            file,
            outcome: FileOutcome::Unchanged,
        });
    }

    pub fn record_failed(&mut self, file: String, error: String) {
        self.files_failed += 1;
        self.files.push(FileReport {
            file,
            outcome: FileOutcome::Failed { error },
        });
    }
}

/// Render the report as the operator-facing text summary.
pub fn render(report: &MigrationReport) -> String {
    let mut lines = Vec::new();

    if report.dry_run {
        lines.push("🔧 ForUI 0.15 automatic migration (dry run)".to_string());
    } else {
        lines.push("🔧 ForUI 0.15 automatic migration".to_string());
    }
    lines.push(format!("📁 Directory: {}", report.base_dir));
    lines.push("-".repeat(RULE_WIDTH));

    if report.files_found == 0 {
        push_file_lines(&mut lines, report);
        lines.push("❌ No .dart files found".to_string());
        return finish(lines);
    }

    lines.push(format!("📝 {} files to process\n", report.files_found));
    push_file_lines(&mut lines, report);

    lines.push(format!("\n{}", "=".repeat(RULE_WIDTH)));
    lines.push("✅ Done!".to_string());
    if report.dry_run {
        lines.push(format!(
            "📊 Files that would change: {}/{}",
            report.files_modified, report.files_found
        ));
    } else {
        lines.push(format!(
            "📊 Files modified: {}/{}",
            report.files_modified, report.files_found
        ));
    }
    lines.push(format!("🔧 Total corrections: {}", report.total_changes));
    if report.files_failed > 0 {
        lines.push(format!("❌ Files with errors: {}", report.files_failed));
    }

    lines.push("\n⚠️  Manual corrections remaining:".to_string());
    for item in report.manual_followups {
        lines.push(format!("  - {}", item));
    }
    lines.push(format!("\n🚀 Run: {}", ANALYZE_COMMAND));

    finish(lines)
}

/// One line per modified or failed entry, in walk order.
fn push_file_lines(lines: &mut Vec<String>, report: &MigrationReport) {
    for entry in &report.files {
        match &entry.outcome {
            FileOutcome::Modified { changes, .. } => {
                lines.push(format!("✅ {}: {} corrections", entry.file, changes));
            }
            FileOutcome::Failed { error } => {
                lines.push(format!("❌ Error on {}: {}", entry.file, error));
            }
            FileOutcome::Unchanged => {}
        }
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
