//! ForUI 0.15 source migration.
//!
//! Walks `lib/features` for Dart files, threads each file's text through a
//! fixed chain of textual rewrite rules, and writes back whatever changed.
//! Nothing here parses Dart; run `flutter analyze` afterwards.

mod driver;
mod report;
pub mod rules;

pub use driver::{discover, process_file, run, Discovery, FileChange, MigrateOptions};
pub use report::{render, FileOutcome, FileReport, MigrationReport};
pub use rules::{apply_all, ChainOutcome, Rewrite, Rule, RuleHit, RULES};
