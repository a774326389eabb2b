//! Template domain model.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateBundle                                             │
//! │  ├── name: TemplateName ("ts-lib-local-storage")            │
//! │  └── entries: Vec<BundleEntry>                              │
//! │       ├── File { path, content }                            │
//! │       └── Directory { path }                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateSpec                                               │
//! │  ├── name: which bundle                                     │
//! │  ├── path: where under the target root                      │
//! │  └── data: Option<RenderContext>                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Flat substitution: {{name}} -> "@internal/foo"         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placeholder substitution is a closed, flat token → value lookup. There is
//! no evaluation, no control flow and no escaping; unknown tokens survive
//! verbatim so that partial contexts can be used on static scaffolds.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::{
    entities::{common::RelativePath, project_structure::ProjectStructure},
    error::DomainError,
};

// ============================================================================
// TemplateName
// ============================================================================

/// Name of a template bundle, e.g. `ts-package` or `ts-component-button`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateName(String);

impl TemplateName {
    pub const PROJECT: &'static str = "ts-project";
    pub const PACKAGE: &'static str = "ts-package";
    pub const LIB_PREFIX: &'static str = "ts-lib-";
    pub const COMPONENT_PREFIX: &'static str = "ts-component-";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Base skeleton hydrated into the target root.
    pub fn project() -> Self {
        Self::new(Self::PROJECT)
    }

    /// Per-package skeleton.
    pub fn package() -> Self {
        Self::new(Self::PACKAGE)
    }

    /// Bundle for a library identifier: `ts-lib-<lib>`.
    pub fn lib(lib: &str) -> Self {
        Self(format!("{}{lib}", Self::LIB_PREFIX))
    }

    /// Bundle for a component identifier: `ts-component-<component>`.
    pub fn component(component: &str) -> Self {
        Self(format!("{}{component}", Self::COMPONENT_PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// TemplateSpec
// ============================================================================

/// One hydration request: which bundle, where, and with what data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub name: TemplateName,
    pub path: RelativePath,
    pub data: Option<RenderContext>,
}

impl TemplateSpec {
    pub fn new(name: TemplateName, path: impl Into<RelativePath>) -> Self {
        Self {
            name,
            path: path.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: RenderContext) -> Self {
        self.data = Some(data);
        self
    }
}

impl fmt::Display for TemplateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.path)
    }
}

// ============================================================================
// RenderContext
// ============================================================================

/// Flat substitution table for `{{key}}` placeholders.
///
/// Whitespace just inside the braces is ignored, so `{{ name }}` and
/// `{{name}}` resolve the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// An empty context. Rendering with it leaves every placeholder in place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replace every known `{{key}}` in `template`.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - an unterminated `{{` is copied through
    /// - `{{{name}}}` keeps the outer braces and replaces the inner token
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            // Extra leading brace: emit it and retry one character later.
            if after_open.starts_with('{') {
                out.push('{');
                rest = &rest[start + 1..];
                continue;
            }

            let Some(end) = after_open.find("}}") else {
                out.push_str("{{");
                rest = after_open;
                continue;
            };

            let raw_key = &after_open[..end];
            match self.variables.get(raw_key.trim()) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(raw_key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }

    /// Render each normal component of `path` separately.
    fn render_path(&self, path: &Path) -> PathBuf {
        path.components()
            .map(|c| match c {
                Component::Normal(segment) => PathBuf::from(self.render(&segment.to_string_lossy())),
                other => PathBuf::from(other.as_os_str()),
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for RenderContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// FileContent
// ============================================================================

/// Body of a template file.
///
/// UTF-8 bodies are `Text` and take part in placeholder substitution.
/// Anything else (icons, fonts) is `Binary` and is copied byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    /// Classify raw bytes read from disk.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(text),
            Err(e) => Self::Binary(e.into_bytes()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes.as_slice(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Binary(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    fn render(&self, ctx: &RenderContext) -> Self {
        match self {
            Self::Text(text) => Self::Text(ctx.render(text)),
            Self::Binary(bytes) => Self::Binary(bytes.clone()),
        }
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl PartialEq<str> for FileContent {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for FileContent {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

// ============================================================================
// TemplateBundle
// ============================================================================

/// A single file or directory inside a bundle, relative to the bundle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleEntry {
    File { path: RelativePath, content: FileContent },
    Directory { path: RelativePath },
}

impl BundleEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File { path, .. } | Self::Directory { path } => path,
        }
    }
}

/// A named tree of template files.
///
/// File bodies are opaque; the only syntax the generator understands inside
/// text bodies is the `{{key}}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBundle {
    pub name: TemplateName,
    pub entries: Vec<BundleEntry>,
}

impl TemplateBundle {
    pub fn new(name: impl Into<TemplateName>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: impl Into<FileContent>) -> Self {
        self.entries.push(BundleEntry::File {
            path: path.into(),
            content: content.into(),
        });
        self
    }

    pub fn with_directory(mut self, path: impl Into<RelativePath>) -> Self {
        self.entries.push(BundleEntry::Directory { path: path.into() });
        self
    }

    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BundleEntry::File { .. }))
            .count()
    }

    /// Reject bundles that could write outside their hydration directory or
    /// that list the same path twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.as_str().trim().is_empty() {
            return Err(DomainError::InvalidTemplate("template name is empty".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if path.escapes_root() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Materialise this bundle under `base` (relative to the target root).
    ///
    /// Without a context, contents and names are copied verbatim. With one,
    /// placeholders are substituted in text contents and in every path
    /// segment; binary contents are never touched.
    pub fn render(&self, base: &RelativePath, data: Option<&RenderContext>) -> ProjectStructure {
        let mut structure = ProjectStructure::new(base.clone());

        for entry in &self.entries {
            match (entry, data) {
                (BundleEntry::Directory { path }, None) => {
                    structure.add_directory(path.as_path());
                }
                (BundleEntry::Directory { path }, Some(ctx)) => {
                    structure.add_directory(ctx.render_path(path.as_path()));
                }
                (BundleEntry::File { path, content }, None) => {
                    structure.add_file(path.as_path(), content.clone());
                }
                (BundleEntry::File { path, content }, Some(ctx)) => {
                    structure.add_file(ctx.render_path(path.as_path()), content.render(ctx));
                }
            }
        }

        structure
    }
}
