//! Tests for create and verify runs

#![allow(clippy::expect_used, clippy::panic)]

use crate::audit::{AuditConfig, AuditError, create_baseline, validate_root, verify};
use crate::baseline::BaselineError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Audited tree plus a separate directory holding the baseline
struct Fixture {
    root: TempDir,
    state: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::write(root.path().join("a.txt"), "x").expect("Failed to write file");
        fs::write(root.path().join("b.txt"), "y").expect("Failed to write file");
        Self {
            root,
            state: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn config(&self) -> AuditConfig {
        AuditConfig::new(self.root.path())
            .with_baseline_file(self.state.path().join("baseline.txt"))
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.root.path().join(name), content).expect("Failed to write file");
    }

    fn remove(&self, name: &str) {
        fs::remove_file(self.root.path().join(name)).expect("Failed to remove file");
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn test_validate_root_accepts_directory() {
    let fixture = Fixture::new();

    assert!(validate_root(fixture.root.path()).is_ok());
}

#[test]
fn test_validate_root_rejects_file_and_missing_path() {
    let fixture = Fixture::new();

    assert!(matches!(
        validate_root(&fixture.root.path().join("a.txt")),
        Err(AuditError::NotADirectory { .. })
    ));
    assert!(matches!(
        validate_root(&fixture.root.path().join("missing")),
        Err(AuditError::NotADirectory { .. })
    ));
}

#[test]
fn test_create_writes_one_line_per_file() {
    let fixture = Fixture::new();
    let config = fixture.config();

    let summary = create_baseline(&config).expect("Create failed");

    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.baseline_file, config.baseline_file);
    let content = fs::read_to_string(&config.baseline_file).expect("Failed to read baseline");
    assert_eq!(
        content,
        "a.txt:2d711642b726b04401627ca9fbac32f5c8530fb1903cc4db02258717921a4881\n\
         b.txt:a1fce4363854ff888cff4b8e7875d600c2682390412a8cf79b37d0b11148b0fa\n"
    );
}

#[test]
fn test_create_on_invalid_directory_writes_nothing() {
    let fixture = Fixture::new();
    let config = AuditConfig::new(fixture.root.path().join("missing"))
        .with_baseline_file(fixture.state.path().join("baseline.txt"));

    let result = create_baseline(&config);

    assert!(matches!(result, Err(AuditError::NotADirectory { .. })));
    assert!(!config.baseline_file.exists());
}

#[test]
fn test_verify_right_after_create_is_clean() {
    let fixture = Fixture::new();
    let config = fixture.config();
    create_baseline(&config).expect("Create failed");

    let result = verify(&config).expect("Verify failed");

    assert!(result.is_clean());
    assert_eq!(result.unchanged, 2);
}

#[test]
fn test_verify_detects_modification() {
    let fixture = Fixture::new();
    let config = fixture.config();
    create_baseline(&config).expect("Create failed");

    fixture.write("a.txt", "z");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(result.modified, paths(&["a.txt"]));
    assert!(result.new.is_empty());
    assert!(result.deleted.is_empty());
    assert_eq!(result.unchanged, 1);
}

#[test]
fn test_verify_detects_addition_and_deletion() {
    let fixture = Fixture::new();
    let config = fixture.config();
    create_baseline(&config).expect("Create failed");

    fixture.remove("b.txt");
    fixture.write("c.txt", "new");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(result.new, paths(&["c.txt"]));
    assert_eq!(result.deleted, paths(&["b.txt"]));
    assert!(result.modified.is_empty());
    assert_eq!(result.unchanged, 1);
}

#[test]
fn test_verify_detects_nested_changes() {
    let fixture = Fixture::new();
    let config = fixture.config();
    fs::create_dir(fixture.root.path().join("sub")).expect("Failed to create dir");
    fixture.write("sub/inner.txt", "inner");
    create_baseline(&config).expect("Create failed");

    fixture.write("sub/inner.txt", "changed");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(result.modified, vec![PathBuf::from("sub").join("inner.txt")]);
    assert_eq!(result.unchanged, 2);
}

#[test]
fn test_verify_missing_baseline_is_not_found() {
    let fixture = Fixture::new();

    let result = verify(&fixture.config());

    match result {
        Err(AuditError::Baseline(BaselineError::NotFound { path })) => {
            assert_eq!(path, fixture.state.path().join("baseline.txt"));
        }
        other => panic!("Expected missing baseline, got {other:?}"),
    }
}

#[test]
fn test_verify_invalid_directory_checked_before_baseline() {
    let fixture = Fixture::new();
    let config = AuditConfig::new(fixture.root.path().join("a.txt"))
        .with_baseline_file(fixture.state.path().join("baseline.txt"));

    let result = verify(&config);

    assert!(matches!(result, Err(AuditError::NotADirectory { .. })));
}

#[test]
fn test_verify_malformed_baseline() {
    let fixture = Fixture::new();
    let config = fixture.config();
    fs::write(&config.baseline_file, "not a record\n").expect("Failed to write file");

    let result = verify(&config);

    assert!(matches!(
        result,
        Err(AuditError::Baseline(BaselineError::Malformed { line: 1, .. }))
    ));
}

#[test]
fn test_create_again_overwrites_baseline() {
    let fixture = Fixture::new();
    let config = fixture.config();
    create_baseline(&config).expect("Create failed");

    fixture.write("a.txt", "z");
    fixture.write("c.txt", "new");
    create_baseline(&config).expect("Create failed");
    let result = verify(&config).expect("Verify failed");

    assert!(result.is_clean());
    assert_eq!(result.unchanged, 3);
}

#[test]
fn test_baseline_inside_root_is_not_audited() {
    let fixture = Fixture::new();
    let config = AuditConfig::new(fixture.root.path())
        .with_baseline_file(fixture.root.path().join("baseline.txt"));

    let summary = create_baseline(&config).expect("Create failed");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(summary.file_count, 2);
    assert!(result.is_clean());
    assert_eq!(result.unchanged, 2);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_never_classified() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    let private = fixture.root.path().join("private.txt");
    fs::write(&private, "private").expect("Failed to write file");
    fs::set_permissions(&private, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");
    if fs::read(&private).is_ok() {
        return;
    }
    let config = fixture.config();

    let summary = create_baseline(&config).expect("Create failed");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(summary.file_count, 2);
    assert!(result.is_clean());
    assert_eq!(result.unchanged, 2);
    let content = fs::read_to_string(&config.baseline_file).expect("Failed to read baseline");
    assert!(!content.contains("private.txt"));
}

#[cfg(unix)]
#[test]
fn test_verify_detects_change_behind_file_symlink() {
    let fixture = Fixture::new();
    let outside = TempDir::new().expect("Failed to create temp dir");
    let target = outside.path().join("app.conf");
    fs::write(&target, "x").expect("Failed to write file");
    std::os::unix::fs::symlink(&target, fixture.root.path().join("app.conf"))
        .expect("Failed to create symlink");
    let config = fixture.config();

    let summary = create_baseline(&config).expect("Create failed");
    fs::write(&target, "z").expect("Failed to write file");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(summary.file_count, 3);
    assert_eq!(result.modified, paths(&["app.conf"]));
    assert_eq!(result.unchanged, 2);
}

#[cfg(unix)]
#[test]
fn test_file_that_cannot_be_hashed_is_never_classified() {
    let fixture = Fixture::new();
    std::os::unix::fs::symlink(
        fixture.root.path().join("missing.txt"),
        fixture.root.path().join("dangling.txt"),
    )
    .expect("Failed to create symlink");
    let config = fixture.config();

    let summary = create_baseline(&config).expect("Create failed");
    let result = verify(&config).expect("Verify failed");

    assert_eq!(summary.file_count, 2);
    assert!(result.is_clean());
    assert_eq!(result.unchanged, 2);
    let content = fs::read_to_string(&config.baseline_file).expect("Failed to read baseline");
    assert!(!content.contains("dangling.txt"));
}
