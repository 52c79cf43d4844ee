//! Filesystem implementation of `AppFileProvider`.

use opscope_api::AppFileProvider;
use std::fs;
use std::path::PathBuf;

/// Resolves manifest resources against a base directory on the local
/// filesystem.
pub struct FsFileProvider {
    base_dir: PathBuf,
}

impl FsFileProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

impl AppFileProvider for FsFileProvider {
    fn file_contents(&self, path: &str) -> Option<Vec<String>> {
        let contents = fs::read_to_string(self.resolve(path)).ok()?;
        Some(contents.lines().map(str::to_string).collect())
    }

    fn absolute_path(&self, path: &str) -> String {
        let resolved = self.resolve(path);
        let absolute = fs::canonicalize(&resolved).unwrap_or(resolved);
        absolute.display().to_string()
    }
}
