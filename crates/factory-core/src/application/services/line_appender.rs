//! Idempotent line insertion.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{application::TargetTree, domain::RelativePath, error::FactoryResult};

/// Appends lines to text files in the target tree, skipping any line that is
/// already present verbatim.
pub struct LineAppender<'a> {
    tree: &'a TargetTree<'a>,
}

impl<'a> LineAppender<'a> {
    pub fn new(tree: &'a TargetTree<'a>) -> Self {
        Self { tree }
    }

    /// Ensure `line` appears in `file`, creating the file if absent.
    ///
    /// A value spanning several lines is treated as a block: each of its lines
    /// is checked and appended on its own, in order. Returns whether the file
    /// changed.
    #[instrument(skip_all, fields(file = %file))]
    pub fn add_line(&self, file: &RelativePath, line: &str) -> FactoryResult<bool> {
        let mut content = self.tree.read(file)?.unwrap_or_default();

        let mut present: HashSet<&str> = content.lines().collect();
        let missing: Vec<&str> = line
            .lines()
            .filter(|candidate| present.insert(*candidate))
            .collect();

        if missing.is_empty() {
            debug!("line already present");
            return Ok(false);
        }

        let mut appended = String::new();
        for candidate in missing {
            appended.push_str(candidate);
            appended.push('\n');
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&appended);

        self.tree.write(file, &content)?;
        Ok(true)
    }
}
