//! Handle on the directory being generated.
//!
//! Every service that mutates output receives a `TargetTree` instead of
//! relying on the process working directory: it owns the absolute root and
//! turns [`RelativePath`]s into concrete paths for the [`Filesystem`] port.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{FileContent, RelativePath},
    error::FactoryResult,
};

pub struct TargetTree<'a> {
    root: PathBuf,
    filesystem: &'a dyn Filesystem,
}

impl<'a> TargetTree<'a> {
    pub fn new(root: impl Into<PathBuf>, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            root: root.into(),
            filesystem,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a target-relative one.
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        if path.is_root() {
            self.root.clone()
        } else {
            self.root.join(path.as_path())
        }
    }

    /// Destroy whatever is at the root and recreate it empty.
    pub fn reset(&self) -> FactoryResult<()> {
        if self.filesystem.exists(&self.root) {
            debug!(path = %self.root.display(), "removing previous output");
            self.filesystem.remove_all(&self.root)?;
        }
        self.filesystem.create_dir_all(&self.root)
    }

    pub fn create_dir(&self, path: &RelativePath) -> FactoryResult<()> {
        self.filesystem.create_dir_all(&self.resolve(path))
    }

    /// Write `content`, creating parent directories first.
    pub fn write(&self, path: &RelativePath, content: &str) -> FactoryResult<()> {
        let target = self.prepare(path)?;
        debug!(path = %target.display(), bytes = content.len(), "write");
        self.filesystem.write_file(&target, content)
    }

    /// Like [`Self::write`], for a template body that may be binary.
    pub fn write_content(&self, path: &RelativePath, content: &FileContent) -> FactoryResult<()> {
        match content {
            FileContent::Text(text) => self.write(path, text),
            FileContent::Binary(bytes) => {
                let target = self.prepare(path)?;
                debug!(path = %target.display(), bytes = bytes.len(), "write binary");
                self.filesystem.write_bytes(&target, bytes)
            }
        }
    }

    fn prepare(&self, path: &RelativePath) -> FactoryResult<PathBuf> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        Ok(target)
    }

    pub fn read(&self, path: &RelativePath) -> FactoryResult<Option<String>> {
        self.filesystem.read_file(&self.resolve(path))
    }
}
