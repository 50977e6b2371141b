//! Internal module that turns scanned lines into nodes.
//!
//! Path lists are taken at face value. Tree drawings are rebuilt with a stack
//! of open directories; the individual heuristics (junk filter, root
//! detection, depth clamp, stack settling) are small functions composed by
//! [`build_tree`].

use crate::scanner::LineRecord;
use crate::types::{Node, NodeKind};
use std::collections::HashSet;

/// Names that are files even though they have no extension.
const BARE_FILE_NAMES: &[&str] = &["Makefile", "Dockerfile", "LICENSE", "README"];

/// Converts path-like lines straight into nodes, keeping the first occurrence of each path.
pub(crate) fn build_path_list(lines: &[LineRecord]) -> Vec<Node> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(lines.len());
    for line in lines {
        let Some(node) = path_list_entry(&line.text) else {
            continue;
        };
        if seen.insert(node.path.clone()) {
            nodes.push(node);
        }
    }
    nodes
}

fn path_list_entry(text: &str) -> Option<Node> {
    let clean = text.trim();
    let clean = clean.strip_prefix("./").unwrap_or(clean).replace('\\', "/");
    let kind = if clean.ends_with('/') {
        NodeKind::Dir
    } else {
        NodeKind::File
    };
    let path = join_segments([clean.as_str()]);
    (!path.is_empty()).then(|| Node::new(path, kind))
}

/// Joins path pieces with `/`, dropping empty and `.` segments.
pub(crate) fn join_segments<'a>(pieces: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for segment in pieces
        .into_iter()
        .flat_map(|p| p.split('/'))
        .filter(|s| !s.is_empty() && *s != ".")
    {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(segment);
    }
    out
}

/// Output of [`build_tree`] before directory correction.
#[derive(Debug, Default)]
pub(crate) struct TreeBuild {
    pub nodes: Vec<Node>,
    pub warnings: Vec<String>,
    pub root_inferred: bool,
}

/// Depth bookkeeping for the previously retained line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Level {
    pub logical: usize,
    /// `None` when the previous line was the explicit root.
    pub raw: Option<usize>,
}

/// Rebuilds the hierarchy of a tree drawing.
pub(crate) fn build_tree(lines: &[LineRecord]) -> TreeBuild {
    let mut build = TreeBuild::default();

    let mut retained: Vec<&LineRecord> = Vec::with_capacity(lines.len());
    for line in lines {
        if is_junk(line) {
            build
                .warnings
                .push(format!("skipped line {}: '{}'", line.number, line.raw.trim()));
        } else {
            retained.push(line);
        }
    }

    let mut stack: Vec<String> = Vec::with_capacity(32);
    let mut prev: Option<Level> = None;
    let mut children = retained.as_slice();

    if detect_root(&retained) {
        let root = retained[0];
        let (name, _) = infer_kind(&root.name);
        let path = join_segments([name.as_str()]);
        if !path.is_empty() {
            build.nodes.push(Node::dir(path));
        }
        stack.push(name);
        prev = Some(Level {
            logical: root.depth,
            raw: None,
        });
        build.root_inferred = true;
        children = &retained[1..];
    }

    // Shift applied to logical depths so the first child of an explicit root
    // lands directly under it.
    let mut offset: Option<isize> = None;
    let floor = usize::from(build.root_inferred);

    for line in children {
        if let Some(p) = prev {
            if p.raw != Some(line.depth) && line.depth > p.logical + 1 {
                build.warnings.push(format!(
                    "line {}: indentation jumps {} levels, nested one level under the previous entry",
                    line.number,
                    line.depth - p.logical
                ));
            }
        }
        let logical = clamp_depth(line.depth, prev);
        let shift = *offset.get_or_insert(if build.root_inferred {
            1 - logical as isize
        } else {
            0
        });
        settle_stack(&mut stack, logical as isize + shift, floor);

        let (name, kind) = infer_kind(&line.name);
        stack.push(name);
        let path = join_segments(stack.iter().map(String::as_str));
        if !path.is_empty() {
            build.nodes.push(Node::new(path, kind));
        }

        prev = Some(Level {
            logical,
            raw: Some(line.depth),
        });
    }

    build
}

/// Prose mixed into a paste: no marker, no separator, contains whitespace and
/// does not look like a file name.
pub(crate) fn is_junk(line: &LineRecord) -> bool {
    !line.has_marker()
        && !line.path_like
        && line.name.contains(char::is_whitespace)
        && !looks_like_file(&line.name)
}

/// The first line is an explicit root when it has no marker and either heads
/// the lines below it or is a lone directory.
pub(crate) fn detect_root(lines: &[&LineRecord]) -> bool {
    match lines {
        [first, ..] if first.has_marker() => false,
        [first] => is_dir_like(&first.name),
        [first, second, ..] => second.depth >= first.depth || second.has_marker(),
        [] => false,
    }
}

/// Reconciles a raw depth with the previous retained line.
///
/// A line at exactly the previous raw depth is its sibling; any other line
/// may be at most one level deeper than its predecessor.
pub(crate) fn clamp_depth(raw: usize, prev: Option<Level>) -> usize {
    match prev {
        None => 0,
        Some(p) if p.raw == Some(raw) => p.logical,
        Some(p) => raw.min(p.logical + 1),
    }
}

/// Pops the directory stack down to `target` entries, never below `floor`.
pub(crate) fn settle_stack(stack: &mut Vec<String>, target: isize, floor: usize) {
    let target = usize::try_from(target).unwrap_or(0).max(floor);
    stack.truncate(target);
}

/// Splits a trailing separator off a name and reports the kind it implies.
pub(crate) fn infer_kind(name: &str) -> (String, NodeKind) {
    let name = name.trim().replace('\\', "/");
    if is_dir_like(&name) {
        (name.trim_end_matches('/').to_string(), NodeKind::Dir)
    } else {
        (name, NodeKind::File)
    }
}

pub(crate) fn is_dir_like(name: &str) -> bool {
    let name = name.trim();
    name.ends_with('/') || name.ends_with('\\')
}

pub(crate) fn looks_like_file(name: &str) -> bool {
    let name = name.trim();
    if is_dir_like(name) {
        return false;
    }
    if BARE_FILE_NAMES.contains(&name) {
        return true;
    }
    matches!(name.rfind('.'), Some(dot) if dot > 0 && dot < name.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{scan_line, scan_lines};

    fn record(raw: &str, depth: usize) -> LineRecord {
        LineRecord {
            depth,
            ..scan_line(1, raw)
        }
    }

    fn paths(input: &str) -> Vec<String> {
        let lines: Vec<LineRecord> = scan_lines(input).into_iter().filter(|l| !l.comment).collect();
        build_tree(&lines).nodes.into_iter().map(|n| n.path).collect()
    }

    #[test]
    fn junk_filter() {
        assert!(is_junk(&record("here is my project layout", 0)));
        assert!(!is_junk(&record("My Notes.txt", 0)));
        assert!(!is_junk(&record("Program Files/", 0)));
        assert!(!is_junk(&record("├── some dir", 0)));
        assert!(!is_junk(&record("src", 0)));
    }

    #[test]
    fn looks_like_file_heuristic() {
        assert!(looks_like_file("main.rs"));
        assert!(looks_like_file("Makefile"));
        assert!(!looks_like_file(".gitignore"));
        assert!(!looks_like_file("trailing."));
        assert!(!looks_like_file("dir.d/"));
        assert!(!looks_like_file("src"));
    }

    #[test]
    fn root_detection() {
        let root = record("project/", 0);
        let child = record("├── a.txt", 0);
        let deeper = record("  a.txt", 1);
        let shallower = record("a.txt", 0);
        let nested = record("  b.txt", 1);
        assert!(detect_root(&[&root, &child]));
        assert!(detect_root(&[&root, &deeper]));
        assert!(!detect_root(&[&nested, &shallower]));
        assert!(!detect_root(&[&child, &root]));
        assert!(detect_root(&[&root]));
        assert!(!detect_root(&[&shallower]));
        assert!(!detect_root(&[]));
    }

    #[test]
    fn depth_clamp() {
        assert_eq!(clamp_depth(3, None), 0);
        let prev = Some(Level { logical: 1, raw: Some(4) });
        assert_eq!(clamp_depth(4, prev), 1);
        assert_eq!(clamp_depth(7, prev), 2);
        assert_eq!(clamp_depth(2, prev), 2);
        assert_eq!(clamp_depth(0, prev), 0);
        let after_root = Some(Level { logical: 0, raw: None });
        assert_eq!(clamp_depth(0, after_root), 0);
    }

    #[test]
    fn stack_never_drops_below_floor() {
        let mut stack = vec!["root".to_string(), "a".to_string(), "b".to_string()];
        settle_stack(&mut stack, 2, 1);
        assert_eq!(stack, ["root", "a"]);
        settle_stack(&mut stack, -1, 1);
        assert_eq!(stack, ["root"]);
        settle_stack(&mut stack, 5, 0);
        assert_eq!(stack, ["root"]);
    }

    #[test]
    fn kind_inference() {
        assert_eq!(infer_kind("src/"), ("src".to_string(), NodeKind::Dir));
        assert_eq!(infer_kind("lib\\"), ("lib".to_string(), NodeKind::Dir));
        assert_eq!(infer_kind("main.rs"), ("main.rs".to_string(), NodeKind::File));
    }

    #[test]
    fn join_drops_dots_and_empty_segments() {
        assert_eq!(join_segments([".", "src", "main.rs"]), "src/main.rs");
        assert_eq!(join_segments(["/etc//nginx/"]), "etc/nginx");
        assert_eq!(join_segments(["."]), "");
    }

    #[test]
    fn path_list_entries() {
        let lines: Vec<LineRecord> = scan_lines("./src/\nsrc\\lib.rs\n/etc/hosts\nsrc/\n");
        let nodes = build_path_list(&lines);
        assert_eq!(
            nodes,
            vec![
                Node::dir("src"),
                Node::file("src/lib.rs"),
                Node::file("etc/hosts"),
            ]
        );
    }

    #[test]
    fn explicit_root_nests_flush_children() {
        assert_eq!(
            paths("app/\n├── src/\n│   └── main.rs\n└── Cargo.toml\n"),
            ["app", "app/src", "app/src/main.rs", "app/Cargo.toml"]
        );
    }

    #[test]
    fn implicit_root_keeps_top_level_entries() {
        assert_eq!(
            paths("├── src/\n│   └── main.rs\n└── Cargo.toml\n"),
            ["src", "src/main.rs", "Cargo.toml"]
        );
    }

    #[test]
    fn jumps_are_clamped_to_one_level() {
        let lines: Vec<LineRecord> = scan_lines("a/\n  b/\n          c.txt\n  d.txt\n");
        let build = build_tree(&lines);
        let got: Vec<&str> = build.nodes.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(got, ["a", "a/b", "a/b/c.txt", "a/d.txt"]);
        assert_eq!(build.warnings.len(), 1);
    }

    #[test]
    fn junk_lines_are_reported() {
        let lines: Vec<LineRecord> =
            scan_lines("├── src/\nthis is not a file\n└── lib.rs\n");
        let build = build_tree(&lines);
        assert_eq!(build.nodes, vec![Node::dir("src"), Node::file("lib.rs")]);
        assert_eq!(build.warnings, ["skipped line 2: 'this is not a file'"]);
    }
}
