use crate::builder::{build_path_list, build_tree};
use crate::classify::{InputFormat, classify};
use crate::scanner::{LineRecord, scan_lines};
use crate::types::{Node, ParseResult};
use std::collections::{HashMap, HashSet};
#[cfg(feature = "logging")]
use tracing;

/// Parses a tree drawing or path list into nodes.
///
/// Never fails: lines that cannot be interpreted are dropped and reported in
/// [`ParseResult::warnings`]. Empty input yields an empty result.
pub fn parse(input: &str) -> ParseResult {
    let lines = content_lines(scan_lines(input));
    if lines.is_empty() {
        return ParseResult::default();
    }

    let format = classify(&lines);
    #[cfg(feature = "logging")]
    tracing::debug!(lines = lines.len(), ?format, "classified input");

    let (nodes, warnings, root_inferred) = match format {
        InputFormat::PathList => (build_path_list(&lines), Vec::new(), false),
        InputFormat::Tree => {
            let build = build_tree(&lines);
            (build.nodes, build.warnings, build.root_inferred)
        }
    };

    let nodes = correct_directories(nodes);
    #[cfg(feature = "logging")]
    tracing::debug!(
        nodes = nodes.len(),
        warnings = warnings.len(),
        root_inferred,
        "parsed input"
    );
    let normalized = normalize(&nodes);
    ParseResult {
        nodes,
        normalized,
        warnings,
        root_inferred,
    }
}

/// Drops comments and blank lines and rewrites a drive anchor (`C:.`) as `.`.
fn content_lines(lines: Vec<LineRecord>) -> Vec<LineRecord> {
    lines
        .into_iter()
        .filter(|l| !l.comment)
        .map(|l| {
            if is_drive_anchor(&l.name) {
                // Path-like so the junk filter never drops it.
                LineRecord {
                    name: ".".to_string(),
                    text: ".".to_string(),
                    path_like: true,
                    ..l
                }
            } else {
                l
            }
        })
        .collect()
}

fn is_drive_anchor(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() == 3 && b[1] == b':' && b[2] == b'.'
}

/// Collapses duplicate paths and forces every node that is an ancestor of
/// another node to be a directory.
pub fn correct_directories(nodes: Vec<Node>) -> Vec<Node> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
    let mut unique: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match index.get(&node.path) {
            Some(&i) => {
                if node.kind.is_dir() {
                    unique[i] = Node::dir(node.path);
                }
            }
            None => {
                index.insert(node.path.clone(), unique.len());
                unique.push(node);
            }
        }
    }

    let parents: HashSet<&str> = unique
        .iter()
        .flat_map(|n| n.path.match_indices('/').map(|(i, _)| &n.path[..i]))
        .collect();

    unique
        .iter()
        .map(|n| {
            if !n.kind.is_dir() && parents.contains(n.path.as_str()) {
                Node::dir(n.path.clone())
            } else {
                n.clone()
            }
        })
        .collect()
}

/// One path per line in discovery order, directories suffixed with `/`.
pub fn normalize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| {
            if n.kind.is_dir() {
                format!("{}/", n.path)
            } else {
                n.path.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
