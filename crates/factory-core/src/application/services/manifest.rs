//! `package.json` dependency injection.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, TargetTree},
    domain::{DependencyEntry, RelativePath},
    error::{Context, FactoryResult},
};

/// Edits the `dependencies` table of JSON manifests in the target tree.
///
/// Key order of the rest of the document is preserved; the file is rewritten
/// pretty-printed with a trailing newline.
pub struct DependencyInjector<'a> {
    tree: &'a TargetTree<'a>,
}

impl<'a> DependencyInjector<'a> {
    pub fn new(tree: &'a TargetTree<'a>) -> Self {
        Self { tree }
    }

    /// Set `dependencies[name] = version`, creating the table if needed and
    /// overwriting an existing entry for `name`.
    ///
    /// # Errors
    /// `ApplicationError::ManifestCorrupt` when the file is missing, is not
    /// JSON, is not an object, or has a non-object `dependencies` value.
    #[instrument(skip_all, fields(manifest = %manifest, dependency = name))]
    pub fn add_dep(&self, manifest: &RelativePath, name: &str, version: &str) -> FactoryResult<()> {
        let path = self.tree.resolve(manifest);
        let raw = self
            .tree
            .read(manifest)?
            .ok_or_else(|| corrupt(&path, "file does not exist"))?;

        let mut document: Value =
            serde_json::from_str(&raw).map_err(|e| corrupt(&path, e.to_string()))?;
        let root = document
            .as_object_mut()
            .ok_or_else(|| corrupt(&path, "top-level value is not an object"))?;
        let dependencies = root
            .entry("dependencies")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| corrupt(&path, "\"dependencies\" is not an object"))?;

        if let Some(previous) = dependencies.insert(name.to_string(), Value::from(version)) {
            debug!(%previous, "replacing existing entry");
        }

        let mut rendered =
            serde_json::to_string_pretty(&document).context("Failed to serialize manifest")?;
        rendered.push('\n');
        self.tree.write(manifest, &rendered)
    }

    pub fn add(&self, manifest: &RelativePath, dependency: &DependencyEntry) -> FactoryResult<()> {
        self.add_dep(manifest, &dependency.name, &dependency.version)
    }
}

fn corrupt(path: &Path, reason: impl Into<String>) -> ApplicationError {
    ApplicationError::ManifestCorrupt {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{application::ports::MockFilesystem, error::FactoryError};
    use std::sync::{Arc, Mutex};

    fn run(existing: Option<&'static str>) -> (FactoryResult<()>, Option<String>) {
        let written = Arc::new(Mutex::new(None));
        let sink = written.clone();

        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(move |_| Ok(existing.map(str::to_string)));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |_, content| {
            *sink.lock().unwrap() = Some(content.to_string());
            Ok(())
        });

        let tree = TargetTree::new("/out", &fs);
        let result = DependencyInjector::new(&tree).add_dep(
            &"packages/main/package.json".into(),
            "@internal/foo",
            "0.0.0",
        );
        let content = written.lock().unwrap().clone();
        (result, content)
    }

    #[test]
    fn inserts_into_existing_table() {
        let (result, content) = run(Some(r#"{"name":"@internal/main","dependencies":{}}"#));
        result.unwrap();
        assert_eq!(
            content.unwrap(),
            "{\n  \"name\": \"@internal/main\",\n  \"dependencies\": {\n    \"@internal/foo\": \"0.0.0\"\n  }\n}\n"
        );
    }

    #[test]
    fn creates_table_after_existing_keys() {
        let (result, content) = run(Some(r#"{"version":"1.0.0","name":"main"}"#));
        result.unwrap();
        let content = content.unwrap();
        let keys: Vec<String> = serde_json::from_str::<Map<String, Value>>(&content)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["version", "name", "dependencies"]);
    }

    #[test]
    fn overwrites_existing_version() {
        let (result, content) =
            run(Some(r#"{"dependencies":{"@internal/foo":"9.9.9","left-pad":"1.0.0"}}"#));
        result.unwrap();
        let doc: Value = serde_json::from_str(&content.unwrap()).unwrap();
        assert_eq!(doc["dependencies"]["@internal/foo"], "0.0.0");
        assert_eq!(doc["dependencies"]["left-pad"], "1.0.0");
    }

    #[test]
    fn corrupt_inputs_are_rejected_without_writing() {
        for existing in [
            None,
            Some("not json"),
            Some("[1, 2]"),
            Some(r#"{"dependencies": "none"}"#),
        ] {
            let (result, content) = run(existing);
            assert!(
                matches!(
                    result,
                    Err(FactoryError::Application(ApplicationError::ManifestCorrupt { .. }))
                ),
                "{existing:?}"
            );
            assert!(content.is_none());
        }
    }
}
