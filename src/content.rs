//! Seed text for newly scaffolded files.

use std::path::Path;

/// Returns default content for a file based on its name, then its extension.
///
/// Unknown files get an empty string.
pub fn default_content(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match base.to_lowercase().as_str() {
        "makefile" => return "all:\n\t@echo 'Hello World'\n".to_string(),
        "dockerfile" => return "FROM alpine:latest\nCMD [\"echo\", \"Hello World\"]\n".to_string(),
        ".gitignore" => return "# Ignore list\n.DS_Store\nnode_modules/\ndist/\nbin/\n".to_string(),
        "license" | "license.txt" | "license.md" => {
            return "MIT License\n\nCopyright (c) 2026\n".to_string();
        }
        _ => {}
    }

    match ext.as_str() {
        "go" if base == "main.go" => {
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello World\")\n}\n"
                .to_string()
        }
        "go" => format!("package {}\n", go_package_name(path)),
        "html" => "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>New Page</title>\n</head>\n<body>\n    <h1>Hello World</h1>\n</body>\n</html>\n".to_string(),
        "css" => "body {\n    font-family: sans-serif;\n    margin: 0;\n}\n".to_string(),
        "js" => "console.log('Hello World');\n".to_string(),
        "jsx" | "tsx" => "import React from 'react';\n\nexport const Component = () => {\n    return <div>Hello</div>;\n};\n".to_string(),
        "json" => "{}\n".to_string(),
        "py" if base == "main.py" || base == "app.py" => {
            "def main():\n    print(\"Hello World\")\n\nif __name__ == \"__main__\":\n    main()\n"
                .to_string()
        }
        "py" => "# New Python Module\n".to_string(),
        "sh" => "#!/bin/bash\nset -euo pipefail\n\necho \"Hello from script\"\n".to_string(),
        "yaml" | "yml" => "version: '1.0'\n".to_string(),
        "md" => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("# {}\n\nDescription goes here.\n", title_case(&stem))
        }
        _ => String::new(),
    }
}

/// Lowercase alphanumeric form of the parent directory name.
fn go_package_name(path: &Path) -> String {
    let dir = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if dir.is_empty() || dir == "." {
        return "main".to_string();
    }
    let clean: String = dir
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if clean.is_empty() {
        "pkg".to_string()
    } else {
        clean
    }
}

/// Upper-cases the first letter of every word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}
