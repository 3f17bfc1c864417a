// tests/scan_directory.rs
//
// Scanner behaviour against a real filesystem (tempfile).

use std::fs;
use std::path::Path;

use driplaunch::fs::RealFileSystem;
use driplaunch::scan::{ArtifactKind, scan_artifacts};

#[test]
fn filters_by_suffix_and_honours_shortcut_flag() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["one.exe", "two.exe", "notes.txt", "a.lnk", "b.lnk", "c.lnk"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }

    let real = RealFileSystem;

    let without = scan_artifacts(&real, dir.path(), false);
    assert_eq!(without.len(), 2);
    assert!(without.iter().all(|a| a.kind == ArtifactKind::Executable));

    let with = scan_artifacts(&real, dir.path(), true);
    assert_eq!(with.len(), 5);

    // Enumeration order within a pass is OS-defined, but all executables
    // come before all shortcuts.
    let first_shortcut = with
        .iter()
        .position(|a| a.kind == ArtifactKind::ShortcutIndirect)
        .unwrap();
    assert_eq!(first_shortcut, 2);
    assert!(
        with[first_shortcut..]
            .iter()
            .all(|a| a.kind == ArtifactKind::ShortcutIndirect)
    );
}

#[test]
fn artifact_paths_point_into_the_scanned_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("setup.exe"), b"").unwrap();

    let artifacts = scan_artifacts(&RealFileSystem, dir.path(), false);
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].path, dir.path().join("setup.exe"));
}

#[test]
fn missing_directory_is_an_empty_result() {
    let artifacts = scan_artifacts(
        &RealFileSystem,
        Path::new("/definitely/not/a/real/directory"),
        true,
    );
    assert!(artifacts.is_empty());
}
