//! File walk and per-file processing.
//!
//! Files are handled one at a time. A failure on one file is recorded in the
//! report and the walk moves on to the next.

use std::path::{Path, PathBuf};

use super::report::MigrationReport;
use super::rules::{self, RuleHit};
use crate::defaults::MigrationTarget;
use crate::error::{Error, Result};
use crate::utils::io::{read_file, write_file};

#[derive(Debug, Clone, Copy, Default)]
pub struct MigrateOptions {
    /// Run the rules and report, but write nothing.
    pub dry_run: bool,
}

/// Change made to a single file.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub changes: usize,
    pub rules: Vec<RuleHit>,
    pub modified: bool,
}

/// Files found under the base directory, plus entries the walk could not read.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<(PathBuf, Error)>,
}

/// List every `*.<ext>` file below the base directory, sorted by path.
///
/// A missing base directory yields an empty list.
pub fn discover(target: &MigrationTarget) -> Result<Discovery> {
    let base = target.base_dir.to_str().ok_or_else(|| {
        Error::validation_invalid_argument(
            "root",
            "Project root is not valid UTF-8",
            Some(target.base_dir.display().to_string()),
        )
    })?;

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(base),
        target.extension
    );

    let entries = glob::glob(&pattern).map_err(|e| {
        Error::discovery_failed(&pattern, e.to_string())
            .with_hint("Pass --root pointing at the Flutter project directory")
    })?;

    let mut discovery = Discovery::default();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    discovery.files.push(path);
                }
            }
            Err(e) => {
                let path = e.path().to_path_buf();
                let err = Error::internal_io(
                    e.error().to_string(),
                    Some(format!("list {}", path.display())),
                );
                discovery.unreadable.push((path, err));
            }
        }
    }

    discovery.files.sort();
    Ok(discovery)
}

/// Run the rule chain over one file and write it back if the text changed.
pub fn process_file(path: &Path, options: MigrateOptions) -> Result<FileChange> {
    let original = read_file(path, &format!("read {}", path.display()))?;
    let outcome = rules::apply_all(&original);

    if outcome.content == original {
        return Ok(FileChange {
            changes: outcome.total,
            rules: outcome.hits,
            modified: false,
        });
    }

    if !options.dry_run {
        write_file(path, &outcome.content, &format!("write {}", path.display()))?;
    }

    Ok(FileChange {
        changes: outcome.total,
        rules: outcome.hits,
        modified: true,
    })
}

/// Migrate every source file under the target's base directory.
pub fn run(target: &MigrationTarget, options: MigrateOptions) -> Result<MigrationReport> {
    let mut report = MigrationReport::new(target.base_dir.display().to_string(), options.dry_run);

    log_status!("migrate", "Scanning {}", target.base_dir.display());
    let discovery = discover(target)?;

    report.files_found = discovery.files.len();
    for (path, err) in discovery.unreadable {
        let file = relative_to(&path, &target.root);
        log_status!("migrate", "{}: {}", file, err);
        report.record_failed(file, err.to_string());
    }

    if discovery.files.is_empty() {
        log_status!("migrate", "No .{} files found", target.extension);
        return Ok(report);
    }

    for path in &discovery.files {
        let file = relative_to(path, &target.root);
        match process_file(path, options) {
            Ok(change) if change.modified => {
                log_status!("migrate", "{}: {} corrections", file, change.changes);
                report.record_modified(file, change.changes, change.rules);
            }
            Ok(_) => report.record_unchanged(file),
            Err(err) => {
                log_status!("migrate", "{}: {}", file, err);
                report.record_failed(file, err.to_string());
            }
        }
    }

    Ok(report)
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
