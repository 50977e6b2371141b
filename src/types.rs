use serde::{Deserialize, Serialize};

/// Whether a node names a directory or a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Dir,
    File,
}

impl NodeKind {
    pub fn is_dir(self) -> bool {
        self == NodeKind::Dir
    }
}

/// A single recovered entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Relative path, forward-slash separated, without a leading `./` or a trailing `/`.
    pub path: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(path: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self::new(path, NodeKind::Dir)
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, NodeKind::File)
    }

    /// The last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// The path of the enclosing directory, or `None` for top-level nodes.
    pub fn parent(&self) -> Option<&str> {
        self.path.rfind('/').map(|i| &self.path[..i])
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }
}

/// The complete result of parsing one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Recovered nodes in discovery order. Paths are unique.
    pub nodes: Vec<Node>,
    /// One path per line, directories suffixed with `/`.
    pub normalized: String,
    /// Non-fatal notes about lines that were dropped or reinterpreted.
    pub warnings: Vec<String>,
    /// Whether the first line was promoted to an explicit root directory.
    pub root_inferred: bool,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_dir())
    }

    pub fn files(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.kind.is_dir())
    }
}
