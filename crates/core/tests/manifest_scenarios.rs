use opscope_core::manifest::{FsFileProvider, Manifest};
use std::fs;
use std::sync::Arc;

/// A manifest on disk is parsed for its revision and echoed back verbatim in
/// the information text.
#[test]
fn reads_manifest_from_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("META-INF")).unwrap();
    fs::write(
        dir.path().join("META-INF/MANIFEST.MF"),
        "Revision: 42\nBuild: ok\n",
    )
    .unwrap();

    let mut manifest = Manifest::new(Arc::new(FsFileProvider::new(dir.path())));
    manifest.reload().unwrap();

    assert_eq!(manifest.revision_number(), "42");
    let info = manifest.manifest_information();
    assert!(info.starts_with("Absolute-Path: "));
    assert!(info.contains("Revision: 42"));
    assert!(info.contains("Build: ok"));
}

/// A missing manifest is not an error: the revision falls back to a
/// timestamp and the information text carries the diagnostic.
#[test]
fn missing_manifest_falls_back_to_timestamp() {
    let dir = tempfile::tempdir().unwrap();

    let mut manifest = Manifest::new(Arc::new(FsFileProvider::new(dir.path())));
    manifest.reload().unwrap();

    assert!(manifest.revision_number().parse::<u64>().is_ok());
    assert!(manifest.manifest_information().contains("not found"));
}

/// Repointing the reader reloads from the new resource.
#[test]
fn set_file_path_reloads_from_new_resource() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("build.txt"), "Revision: 7\n").unwrap();

    let mut manifest = Manifest::new(Arc::new(FsFileProvider::new(dir.path())));
    manifest.set_file_path("build.txt").unwrap();

    assert_eq!(manifest.revision_number(), "7");
}
