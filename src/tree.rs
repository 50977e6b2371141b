//! Renders a node list back into a Unicode tree drawing.

use crate::types::Node;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Builds a visual tree string from a list of nodes.
///
/// Siblings are ordered directories first, then files, each group by path.
/// A node whose parent is not in the list is drawn at the top level with its
/// full path. The output is similar to the `tree` command, without the
/// leading `.` line.
///
/// Names are printed verbatim, so [`parse`](crate::parse) does not read every
/// drawing back to the same nodes. A name with whitespace before `#` or `//`
/// loses the rest as an inline comment (`x #1.txt` reads back as `x`), and a
/// name containing `+ ` or `| ` is cut at that broken marker (`a + b.txt`
/// reads back as `b.txt`).
pub fn render_tree(nodes: &[Node]) -> String {
    let known: HashSet<&str> = nodes.iter().map(|n| n.path.as_str()).collect();
    let mut children: HashMap<&str, Vec<&Node>> = HashMap::new();
    let mut roots: Vec<&Node> = Vec::new();
    for node in nodes {
        match node.parent() {
            Some(parent) if known.contains(parent) => {
                children.entry(parent).or_default().push(node)
            }
            _ => roots.push(node),
        }
    }

    // HashMap iteration order is unspecified; every group is sorted before use.
    roots.sort_by(|a, b| sibling_order(a, b));
    for group in children.values_mut() {
        group.sort_by(|a, b| sibling_order(a, b));
    }

    let mut lines = Vec::with_capacity(nodes.len());
    let count = roots.len();
    for (i, root) in roots.into_iter().enumerate() {
        render_node(root, &root.path, "", i + 1 == count, &children, &mut lines);
    }
    lines.join("\n")
}

/// Directories before files; lexicographic by path within a kind.
pub fn sibling_order(a: &Node, b: &Node) -> Ordering {
    b.kind
        .is_dir()
        .cmp(&a.kind.is_dir())
        .then_with(|| a.path.cmp(&b.path))
}

fn render_node(
    node: &Node,
    label: &str,
    prefix: &str,
    is_last: bool,
    children: &HashMap<&str, Vec<&Node>>,
    lines: &mut Vec<String>,
) {
    let marker = if is_last { LAST_BRANCH } else { BRANCH };
    let suffix = if node.kind.is_dir() { "/" } else { "" };
    lines.push(format!("{prefix}{marker}{label}{suffix}"));

    let Some(group) = children.get(node.path.as_str()) else {
        return;
    };
    let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
    for (i, child) in group.iter().enumerate() {
        render_node(
            child,
            child.name(),
            &child_prefix,
            i + 1 == group.len(),
            children,
            lines,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sorted_tree() {
        let nodes = vec![
            Node::file("zeta.txt"),
            Node::dir("src"),
            Node::file("src/main.rs"),
            Node::dir("src/bin"),
            Node::file("alpha.txt"),
        ];
        let expected = "\
├── src/
│   ├── bin/
│   └── main.rs
├── alpha.txt
└── zeta.txt";
        assert_eq!(render_tree(&nodes), expected);
    }

    #[test]
    fn last_branch_uses_blank_continuation() {
        let nodes = vec![Node::dir("p"), Node::dir("p/q"), Node::file("p/q/r.md")];
        assert_eq!(render_tree(&nodes), "└── p/\n    └── q/\n        └── r.md");
    }

    #[test]
    fn orphans_are_drawn_with_their_full_path() {
        let nodes = vec![Node::dir("etc/nginx"), Node::dir("var/log")];
        assert_eq!(render_tree(&nodes), "├── etc/nginx/\n└── var/log/");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_tree(&[]), "");
    }

    #[test]
    fn order_is_independent_of_input_order() {
        let mut nodes = vec![
            Node::dir("b"),
            Node::file("b/2.txt"),
            Node::file("b/1.txt"),
            Node::dir("a"),
        ];
        let first = render_tree(&nodes);
        nodes.reverse();
        assert_eq!(render_tree(&nodes), first);
    }
}
