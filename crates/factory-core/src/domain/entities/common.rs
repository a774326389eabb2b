use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be **relative**.
///
/// Every path the generator writes is relative to the target root; the
/// target root itself is the only absolute path in a run and lives in
/// [`crate::application::TargetTree`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {path:?}"
        );
        Self(path)
    }

    /// Try to create a relative path.
    ///
    /// This is the non-panicking variant.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, PathBuf> {
        let path = path.into();
        if path.is_absolute() {
            Err(path)
        } else {
            Ok(Self(path))
        }
    }

    /// The target root itself (`.`).
    pub fn root() -> Self {
        Self(PathBuf::from("."))
    }

    /// Join a path segment onto this relative path.
    ///
    /// # Panics
    /// Panics if the joined path is absolute.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = segment.as_ref();
        assert!(
            !segment.is_absolute(),
            "cannot join absolute path to RelativePath"
        );
        if self.is_root() {
            return Self(segment.to_path_buf());
        }
        Self(self.0.join(segment))
    }

    /// `true` for `.` and the empty path.
    pub fn is_root(&self) -> bool {
        self.0.components().all(|c| matches!(c, Component::CurDir))
    }

    /// `true` if any component climbs out with `..`.
    pub fn escapes_root(&self) -> bool {
        self.0.components().any(|c| matches!(c, Component::ParentDir))
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume into a `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        RelativePath::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        RelativePath::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_onto_root_drops_the_dot() {
        let p = RelativePath::root().join("packages/foo");
        assert_eq!(p.as_path(), Path::new("packages/foo"));
    }

    #[test]
    fn try_new_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("packages").is_ok());
    }

    #[test]
    fn detects_parent_components() {
        assert!(RelativePath::new("packages/../../x").escapes_root());
        assert!(!RelativePath::new("packages/x").escapes_root());
    }

    #[test]
    #[should_panic(expected = "cannot be absolute")]
    fn new_panics_on_absolute() {
        let _ = RelativePath::new("/abs");
    }
}
