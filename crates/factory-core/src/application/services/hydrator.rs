//! Template hydration engine.
//!
//! Copies a named bundle into a target-relative directory, substituting
//! `{{key}}` placeholders when the [`TemplateSpec`] carries data. The
//! destination subtree is overwritten; existing files there are never read.

use tracing::{debug, instrument};

use crate::{
    application::{TargetTree, ports::TemplateStore},
    domain::{DomainError, FsEntry, ProjectStructure, RelativePath, TemplateSpec},
    error::FactoryResult,
};

pub struct Hydrator<'a> {
    store: &'a dyn TemplateStore,
    tree: &'a TargetTree<'a>,
}

impl<'a> Hydrator<'a> {
    pub fn new(store: &'a dyn TemplateStore, tree: &'a TargetTree<'a>) -> Self {
        Self { store, tree }
    }

    /// Materialise `spec.name` at `spec.path`.
    ///
    /// # Errors
    /// - `ApplicationError::UnknownTemplate` if the store has no such bundle
    /// - `ApplicationError::FilesystemError` on any write failure
    /// - `DomainError::AbsolutePathNotAllowed` if substitution turns an entry
    ///   path into one that leaves the hydration directory
    #[instrument(skip_all, fields(template = %spec.name, path = %spec.path))]
    pub fn hydrate(&self, spec: &TemplateSpec) -> FactoryResult<()> {
        let bundle = self.store.get(&spec.name)?;
        let structure = bundle.render(&spec.path, spec.data.as_ref());
        debug!(entries = structure.entry_count(), "bundle rendered");
        self.write_structure(&structure)
    }

    fn write_structure(&self, structure: &ProjectStructure) -> FactoryResult<()> {
        self.tree.create_dir(structure.root())?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = checked_join(structure.root(), &dir.path)?;
                    self.tree.create_dir(&path)?;
                }
                FsEntry::File(file) => {
                    let path = checked_join(structure.root(), &file.path)?;
                    self.tree.write_content(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }
}

/// Join a rendered entry path onto the hydration root, refusing anything that
/// would land outside it.
fn checked_join(root: &RelativePath, entry: &std::path::Path) -> FactoryResult<RelativePath> {
    let relative = RelativePath::try_new(entry).map_err(|p| DomainError::AbsolutePathNotAllowed {
        path: p.display().to_string(),
    })?;
    if relative.escapes_root() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: relative.to_string(),
        }
        .into());
    }
    Ok(root.join(relative.as_path()))
}
