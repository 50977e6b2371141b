use crate::content::default_content;
use crate::error::TreesketchError;
use crate::options::ScaffoldOptions;
use crate::types::{Node, NodeKind};
use globset::{Glob, GlobSet, GlobSetBuilder};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
#[cfg(feature = "logging")]
use tracing;

/// What a scaffold run created, or would create in a dry run.
///
/// Paths are relative to [`ScaffoldOptions::root`], in node order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<String>,
    pub created_files: Vec<String>,
    /// Entries that already existed and were left alone.
    pub skipped: Vec<String>,
    /// Entries matched by an exclude pattern.
    pub excluded: Vec<String>,
    pub dry_run: bool,
}

/// Creates the directories and files named by `nodes` under `options.root`.
///
/// Every path is checked before anything is written, so an invalid path
/// leaves the filesystem untouched.
///
/// # Errors
///
/// [`TreesketchError::InvalidPath`] for absolute paths or `..` segments,
/// [`TreesketchError::Pattern`] for a bad exclude glob, and
/// [`TreesketchError::Io`] when a directory or file cannot be created.
pub fn scaffold(nodes: &[Node], options: &ScaffoldOptions) -> Result<ScaffoldReport, TreesketchError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Scaffolding {} nodes under {} (dry run: {})",
        nodes.len(),
        options.root.display(),
        options.dry_run
    );
    let matcher = build_matcher(&options.exclude_patterns)?;
    for node in nodes {
        validate_relative(&node.path)?;
    }

    let mut report = ScaffoldReport {
        dry_run: options.dry_run,
        ..Default::default()
    };
    let mut pending: Vec<&str> = Vec::new();
    for node in nodes {
        if is_excluded(matcher.as_ref(), &node.path) {
            report.excluded.push(node.path.clone());
            continue;
        }
        let target = options.root.join(&node.path);
        match node.kind {
            NodeKind::Dir => {
                if target.is_dir() {
                    report.skipped.push(node.path.clone());
                    continue;
                }
                if !options.dry_run {
                    fs::create_dir_all(&target).map_err(|e| TreesketchError::io(&target, e))?;
                }
                report.created_dirs.push(node.path.clone());
            }
            NodeKind::File => {
                if target.exists() && !options.overwrite {
                    #[cfg(feature = "logging")]
                    tracing::debug!("File exists, skipping: {}", target.display());
                    report.skipped.push(node.path.clone());
                    continue;
                }
                pending.push(&node.path);
            }
        }
    }

    if !options.dry_run {
        #[cfg(not(feature = "parallel"))]
        write_files(&pending, options)?;
        #[cfg(feature = "parallel")]
        write_files_parallel(&pending, options)?;
    }
    report.created_files = pending.into_iter().map(String::from).collect();
    Ok(report)
}

fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, TreesketchError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| TreesketchError::Pattern(format!("'{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| TreesketchError::Pattern(format!("Failed to build glob set: {}", e)))
}

/// A path is excluded when it, or any directory above it, matches.
fn is_excluded(matcher: Option<&GlobSet>, path: &str) -> bool {
    let Some(matcher) = matcher else {
        return false;
    };
    matcher.is_match(path)
        || path
            .match_indices('/')
            .any(|(i, _)| matcher.is_match(&path[..i]))
}

fn validate_relative(path: &str) -> Result<(), TreesketchError> {
    let valid = !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if valid {
        Ok(())
    } else {
        Err(TreesketchError::InvalidPath(path.to_string()))
    }
}

fn write_file(path: &str, options: &ScaffoldOptions) -> Result<(), TreesketchError> {
    let target = options.root.join(path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| TreesketchError::io(parent, e))?;
    }
    let content = if options.populate {
        default_content(path)
    } else {
        String::new()
    };
    fs::write(&target, content).map_err(|e| TreesketchError::io(&target, e))
}

#[cfg(not(feature = "parallel"))]
fn write_files(paths: &[&str], options: &ScaffoldOptions) -> Result<(), TreesketchError> {
    for path in paths {
        write_file(path, options)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn write_files_parallel(paths: &[&str], options: &ScaffoldOptions) -> Result<(), TreesketchError> {
    paths.par_iter().try_for_each(|path| write_file(path, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_relative_paths_are_valid() {
        assert!(validate_relative("src/main.rs").is_ok());
        assert!(validate_relative("../escape").is_err());
        assert!(validate_relative("a/../../b").is_err());
        assert!(validate_relative("/etc/passwd").is_err());
        assert!(validate_relative("").is_err());
    }

    #[test]
    fn exclusion_covers_descendants() {
        let matcher = build_matcher(&["node_modules".to_string(), "*.log".to_string()])
            .unwrap()
            .unwrap();
        assert!(is_excluded(Some(&matcher), "node_modules"));
        assert!(is_excluded(Some(&matcher), "node_modules/react/index.js"));
        assert!(is_excluded(Some(&matcher), "logs/app.log"));
        assert!(!is_excluded(Some(&matcher), "src/main.rs"));
        assert!(!is_excluded(None, "node_modules"));
    }

    #[test]
    fn bad_patterns_are_reported() {
        assert!(matches!(
            build_matcher(&["a[".to_string()]),
            Err(TreesketchError::Pattern(_))
        ));
    }
}
