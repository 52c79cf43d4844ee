//! Build/version manifest reader.
//!
//! Parses `key: value` lines out of an application resource and exposes the
//! build revision plus the raw manifest text. A missing resource is not an
//! error: a timestamp-based revision is fabricated and the diagnostic is
//! carried in the manifest text instead.

pub mod provider;

pub use provider::FsFileProvider;

use crate::error::{OpscopeError, Result};
use opscope_api::AppFileProvider;
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

pub struct Manifest {
    provider: Arc<dyn AppFileProvider>,
    file_path: String,
    revision: String,
    absolute_path: Option<String>,
    contents: String,
}

impl Manifest {
    /// A manifest over the default resource path. Nothing is read until
    /// `reload` is called.
    pub fn new(provider: Arc<dyn AppFileProvider>) -> Self {
        Self {
            provider,
            file_path: DEFAULT_MANIFEST_PATH.to_string(),
            revision: String::new(),
            absolute_path: None,
            contents: String::new(),
        }
    }

    /// Point the reader at a different resource and reload immediately.
    pub fn set_file_path(&mut self, path: impl Into<String>) -> Result<()> {
        self.file_path = path.into();
        self.reload()
    }

    /// Re-read the manifest resource. On a parse failure the previously
    /// loaded state is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        tracing::info!("Reloading manifest: {}", self.file_path);

        match self.provider.file_contents(&self.file_path) {
            Some(lines) => self.parse(&lines),
            None => {
                let absolute = self.provider.absolute_path(&self.file_path);
                self.absolute_path = None;
                self.contents = format!("Manifest file not found: '{}'", absolute);
                self.revision = unix_millis().to_string();
                tracing::debug!(
                    "Manifest not found, generated revision number {}",
                    self.revision
                );
                Ok(())
            }
        }
    }

    fn parse(&mut self, lines: &[String]) -> Result<()> {
        let mut contents = String::new();
        let mut revision = None;

        for line in lines {
            contents.push_str(line);
            contents.push('\n');
            if revision.is_none() && line.starts_with("Revision") {
                let value = revision_value(line)?;
                tracing::info!("Manifest revision: {}", value);
                revision = Some(value);
            }
        }

        self.absolute_path = Some(self.provider.absolute_path(&self.file_path));
        self.contents = contents;
        if let Some(revision) = revision {
            self.revision = revision;
        }
        Ok(())
    }

    /// The build revision: parsed from the manifest, or a millisecond
    /// timestamp when the resource was absent. Empty before the first
    /// `reload`.
    pub fn revision_number(&self) -> &str {
        &self.revision
    }

    /// The manifest text, prefixed with the resolved absolute path when the
    /// resource was found.
    pub fn manifest_information(&self) -> String {
        match &self.absolute_path {
            Some(path) => format!("Absolute-Path: {}\n{}", path, self.contents),
            None => self.contents.clone(),
        }
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Manifest: {}", self.manifest_information())
    }
}

fn revision_value(line: &str) -> Result<String> {
    let (_, value) = line.split_once(':').ok_or_else(|| {
        OpscopeError::Format(format!("expected ':' separator in manifest line '{line}'"))
    })?;
    Ok(value.trim().to_string())
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
