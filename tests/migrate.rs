use std::fs;
use std::path::{Path, PathBuf};

use forui_migrate::defaults::MigrationTarget;
use forui_migrate::migrate::{self, FileOutcome, MigrateOptions};

fn features_dir(root: &Path) -> PathBuf {
    let dir = root.join("lib").join("features");
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn save_button_scenario() {
    let root = tempfile::tempdir().unwrap();
    let features = features_dir(root.path());
    fs::write(
        features.join("editor.dart"),
        "FButton(\n  onPressed: () {},\n  label: 'Save',\n)\n",
    )
    .unwrap();

    let target = MigrationTarget::for_root(root.path());
    let report = migrate::run(&target, MigrateOptions::default()).unwrap();

    let content = fs::read_to_string(features.join("editor.dart")).unwrap();
    assert!(content.contains("onPress: () {}"));
    assert!(content.contains("label: const Text('Save')"));

    assert_eq!(report.files_modified, 1);
    assert_eq!(report.total_changes, 2);
    match &report.files[0].outcome {
        FileOutcome::Modified { changes, .. } => assert_eq!(*changes, 2),
        other => panic!("expected modified, got {:?}", other),
    }

    let text = migrate::render(&report);
    assert!(text.contains("✅ lib/features/editor.dart: 2 corrections"));
}

#[test]
fn only_matching_files_are_rewritten() {
    let root = tempfile::tempdir().unwrap();
    let features = features_dir(root.path());
    fs::create_dir_all(features.join("settings")).unwrap();

    let untouched = [
        ("home.dart", "class Home {}\n"),
        ("settings/theme.dart", "final style = FButtonStyle.ghost;\r\n"),
    ];
    for (name, body) in &untouched {
        fs::write(features.join(name), body).unwrap();
    }
    fs::write(
        features.join("settings/form.dart"),
        "FButton(style: FButtonStyle.destructive, design: FButtonCustomStyle(), onPressed: x)",
    )
    .unwrap();
    fs::write(features.join("login.dart"), "FTextField(label: 'Email')").unwrap();

    let target = MigrationTarget::for_root(root.path());
    let report = migrate::run(&target, MigrateOptions::default()).unwrap();

    assert_eq!(report.files_found, 4);
    assert_eq!(report.files_modified, 2);
    assert_eq!(report.files_failed, 0);
    assert_eq!(report.total_changes, 4);

    for (name, body) in &untouched {
        assert_eq!(fs::read(features.join(name)).unwrap(), body.as_bytes());
    }
    assert_eq!(
        fs::read_to_string(features.join("settings/form.dart")).unwrap(),
        "FButton(style: Variant.destructive, onPress: x)"
    );
    assert_eq!(
        fs::read_to_string(features.join("login.dart")).unwrap(),
        "FTextField(label: const Text('Email'))"
    );
}

#[test]
fn second_run_changes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let features = features_dir(root.path());
    fs::write(
        features.join("page.dart"),
        "FButton(style: FButtonStyle.primary, onPressed: go, label: 'Go')\n",
    )
    .unwrap();

    let target = MigrationTarget::for_root(root.path());
    let first = migrate::run(&target, MigrateOptions::default()).unwrap();
    let after_first = fs::read_to_string(features.join("page.dart")).unwrap();
    let second = migrate::run(&target, MigrateOptions::default()).unwrap();

    assert_eq!(first.files_modified, 1);
    assert_eq!(second.files_modified, 0);
    assert_eq!(second.total_changes, 0);
    assert_eq!(
        fs::read_to_string(features.join("page.dart")).unwrap(),
        after_first
    );
}

#[test]
fn empty_directory_prints_no_files_and_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let features = features_dir(root.path());
    fs::write(features.join("README.md"), "label: 'not dart'").unwrap();

    let target = MigrationTarget::for_root(root.path());
    let report = migrate::run(&target, MigrateOptions::default()).unwrap();

    assert_eq!(report.files_found, 0);
    assert_eq!(report.files_modified, 0);
    assert!(migrate::render(&report).contains("❌ No .dart files found"));
    assert_eq!(
        fs::read_to_string(features.join("README.md")).unwrap(),
        "label: 'not dart'"
    );
}

#[test]
fn dry_run_reports_without_writing() {
    let root = tempfile::tempdir().unwrap();
    let features = features_dir(root.path());
    let original = "FButton(onPressed: () {}, label: 'Save')";
    fs::write(features.join("a.dart"), original).unwrap();

    let target = MigrationTarget::for_root(root.path());
    let report = migrate::run(&target, MigrateOptions { dry_run: true }).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.files_modified, 1);
    assert_eq!(report.total_changes, 2);
    assert_eq!(fs::read_to_string(features.join("a.dart")).unwrap(), original);
}
