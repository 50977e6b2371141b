use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    /// Directory the node paths are resolved against.
    pub root: PathBuf,
    /// Report what would be created without touching the filesystem.
    pub dry_run: bool,
    /// Replace the content of files that already exist.
    pub overwrite: bool,
    /// Seed new files with [`default_content`](crate::default_content).
    pub populate: bool,
    /// Glob patterns; matching paths (and everything below a matching directory) are skipped.
    pub exclude_patterns: Vec<String>,
}
impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            overwrite: false,
            populate: true,
            exclude_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ScaffoldBuilder {
    options: ScaffoldOptions,
}
impl ScaffoldBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScaffoldOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.options.dry_run = yes;
        self
    }
    pub fn overwrite(mut self, yes: bool) -> Self {
        self.options.overwrite = yes;
        self
    }
    pub fn populate(mut self, yes: bool) -> Self {
        self.options.populate = yes;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn build(self) -> ScaffoldOptions {
        self.options
    }
}
