//! Built-in migration settings.
//!
//! Everything the migration targets is compiled in: where the feature sources
//! live, which extension is rewritten, and the follow-ups the rules cannot do.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory, relative to the project root, holding the feature modules.
pub const FEATURES_DIR: &[&str] = &["lib", "features"];

/// Extension of the files the rules rewrite.
pub const SOURCE_EXTENSION: &str = "dart";

/// Changes the rule chain knows it does not make. Printed verbatim after
/// every run as operator guidance.
pub const MANUAL_FOLLOWUPS: &[&str] = &[
    "FCard(padding:...) → FCard.raw(child: Padding(...))",
    "Supprimer decoration: sur FTextField",
    "Vérifier FBadge text → label",
];

/// Command the operator should run once the rewrite is done.
pub const ANALYZE_COMMAND: &str = "flutter analyze";

/// The resolved targets of one migration run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationTarget {
    /// Project root; reported paths are relative to it.
    pub root: PathBuf,
    /// `<root>/lib/features`.
    pub base_dir: PathBuf,
    pub extension: &'static str,
}

impl MigrationTarget {
    pub fn for_root(root: &Path) -> Self {
        let base_dir = FEATURES_DIR
            .iter()
            .fold(root.to_path_buf(), |dir, segment| dir.join(segment));

        Self {
            root: root.to_path_buf(),
            base_dir,
            extension: SOURCE_EXTENSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_is_lib_features_under_root() {
        let target = MigrationTarget::for_root(Path::new("/work/app"));
        assert_eq!(target.base_dir, PathBuf::from("/work/app/lib/features"));
        assert_eq!(target.extension, "dart");
    }

    #[test]
    fn followups_are_stable() {
        assert_eq!(MANUAL_FOLLOWUPS.len(), 3);
        assert!(MANUAL_FOLLOWUPS[0].starts_with("FCard(padding:...)"));
    }
}
