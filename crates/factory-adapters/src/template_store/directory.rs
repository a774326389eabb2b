//! Filesystem-backed template store.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── ts-lib-local-storage/    ← bundle named after its directory
//! │   └── index.ts
//! └── ts-component-button/
//!     ├── index.ts
//!     └── styles/
//!         └── button.css
//! ```
//!
//! Bundles are read on demand, so edits to the directory are picked up by
//! the next lookup. UTF-8 files are text; anything else is kept as bytes.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use factory_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, FileContent, TemplateBundle, TemplateName},
    error::FactoryResult,
};

#[derive(Debug, Error)]
enum LoadError {
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to relativise '{0}' against the bundle root")]
    Prefix(PathBuf),
}

/// Template store reading one bundle per immediate sub-directory of `root`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// The directory does not need to exist; lookups against a missing root
    /// find nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding bundle `name`, if `name` is a plain directory name.
    fn bundle_dir(&self, name: &TemplateName) -> Option<PathBuf> {
        let mut components = Path::new(name.as_str()).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(name.as_str())),
            _ => None,
        }
    }

    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn load(&self, name: &TemplateName, dir: &Path) -> Result<TemplateBundle, LoadError> {
        let mut bundle = TemplateBundle::new(name.clone());

        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|_| LoadError::Prefix(entry.path().to_path_buf()))?;
            let relative = normalize_path(&relative.to_string_lossy());

            if entry.file_type().is_dir() {
                bundle = bundle.with_directory(relative);
            } else if entry.file_type().is_file() {
                let bytes = fs::read(entry.path()).map_err(|source| LoadError::Read {
                    path: relative.clone(),
                    source,
                })?;
                bundle = bundle.with_file(relative, FileContent::from_bytes(bytes));
            }
        }

        debug!(files = bundle.file_count(), "loaded bundle");
        Ok(bundle)
    }
}

impl TemplateStore for DirectoryStore {
    fn get(&self, name: &TemplateName) -> FactoryResult<TemplateBundle> {
        let dir = self
            .bundle_dir(name)
            .filter(|dir| dir.is_dir())
            .ok_or_else(|| ApplicationError::UnknownTemplate {
                name: name.to_string(),
            })?;

        let bundle = self
            .load(name, &dir)
            .map_err(|e| ApplicationError::TemplateLoad {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        validator::validate_bundle(&bundle)?;
        Ok(bundle)
    }

    fn contains(&self, name: &TemplateName) -> bool {
        self.bundle_dir(name).is_some_and(|dir| dir.is_dir())
    }

    fn list(&self) -> FactoryResult<Vec<TemplateName>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&self.root).map_err(|e| ApplicationError::FilesystemError {
            path: self.root.clone(),
            reason: format!("Failed to read templates directory: {e}"),
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("Failed to read directory entry: {e}"),
            })?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(TemplateName::new(name));
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Forward slashes on every platform so bundle paths compare identically.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_core::{domain::BundleEntry, error::FactoryError};
    use tempfile::TempDir;

    fn make_templates(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel_path, content) in files {
            let full = temp.path().join(rel_path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        temp
    }

    #[test]
    fn loads_bundle_sorted() {
        let temp = make_templates(&[
            ("ts-lib-a/index.ts", "export const a = 1;"),
            ("ts-lib-a/util/b.ts", "export const b = 2;"),
            ("ts-lib-a/README.md", "# a"),
        ]);
        let store = DirectoryStore::new(temp.path());

        let bundle = store.get(&TemplateName::lib("a")).unwrap();
        let paths: Vec<String> = bundle.entries.iter().map(|e| e.path().to_string()).collect();

        assert_eq!(paths, ["README.md", "index.ts", "util", "util/b.ts"]);
        assert!(matches!(
            &bundle.entries[1],
            BundleEntry::File { content, .. } if content == "export const a = 1;"
        ));
    }

    #[test]
    fn lists_only_directories() {
        let temp = make_templates(&[
            ("ts-project/package.json", "{}"),
            ("ts-lib-a/index.ts", ""),
            ("notes.txt", "not a bundle"),
        ]);
        let names = DirectoryStore::new(temp.path()).list().unwrap();

        assert_eq!(names, [TemplateName::lib("a"), TemplateName::project()]);
    }

    #[test]
    fn missing_bundle_is_unknown() {
        let temp = make_templates(&[]);
        let store = DirectoryStore::new(temp.path());

        assert!(!store.contains(&TemplateName::component("button")));
        assert!(matches!(
            store.get(&TemplateName::component("button")).unwrap_err(),
            FactoryError::Application(ApplicationError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn names_cannot_traverse() {
        let temp = make_templates(&[("ts-lib-a/index.ts", "")]);
        let store = DirectoryStore::new(temp.path().join("ts-lib-a"));

        assert!(!store.contains(&TemplateName::new("../ts-lib-a")));
        assert!(!store.contains(&TemplateName::new("..")));
    }

    #[test]
    fn missing_root_lists_nothing() {
        let store = DirectoryStore::new("/absolutely/does/not/exist");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn non_utf8_file_is_kept_as_bytes() {
        let temp = make_templates(&[("ts-project/package.json", "{\"name\": \"{{name}}\"}")]);
        let icon = [0x00_u8, 0x01, 0xff, 0xfe];
        fs::write(temp.path().join("ts-project/favicon.ico"), icon).unwrap();

        let bundle = DirectoryStore::new(temp.path())
            .get(&TemplateName::project())
            .unwrap();

        assert!(matches!(
            &bundle.entries[0],
            BundleEntry::File { content: FileContent::Binary(bytes), .. } if *bytes == icon
        ));
        assert!(matches!(
            &bundle.entries[1],
            BundleEntry::File { content: FileContent::Text(_), .. }
        ));
    }
}
