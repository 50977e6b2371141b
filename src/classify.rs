//! Decides whether scanned content is a flat path list or a drawn tree.

use crate::scanner::LineRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputFormat {
    PathList,
    Tree,
}

/// A path list needs a strict majority of path-like lines and not a single
/// branch marker. Everything else is treated as a tree drawing.
pub(crate) fn classify(lines: &[LineRecord]) -> InputFormat {
    let content: Vec<&LineRecord> = lines
        .iter()
        .filter(|l| !l.comment && !l.name.is_empty())
        .collect();
    let path_like = content.iter().filter(|l| l.path_like).count();
    let markers = content.iter().filter(|l| l.has_marker()).count();

    if path_like * 2 > content.len() && markers == 0 {
        InputFormat::PathList
    } else {
        InputFormat::Tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_lines;

    fn format_of(input: &str) -> InputFormat {
        classify(&scan_lines(input))
    }

    #[test]
    fn majority_of_paths_is_a_path_list() {
        assert_eq!(format_of("src/a.rs\nsrc/b.rs\nCargo.toml\n"), InputFormat::PathList);
        assert_eq!(format_of("/etc/nginx/\n/var/log/\n"), InputFormat::PathList);
    }

    #[test]
    fn half_is_not_a_majority() {
        assert_eq!(format_of("src/a.rs\nCargo.toml\n"), InputFormat::Tree);
    }

    #[test]
    fn a_single_marker_forces_a_tree() {
        assert_eq!(
            format_of("src/a.rs\nsrc/b.rs\nsrc/c.rs\n└── d.rs\n"),
            InputFormat::Tree
        );
    }

    #[test]
    fn comments_do_not_count() {
        assert_eq!(
            format_of("# files\n# more\n# and more\nsrc/a.rs\n"),
            InputFormat::PathList
        );
    }
}
