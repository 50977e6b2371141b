//! Built-in example trees.
//!
//! The registry is built once on first use and never mutated afterwards.

use crate::TreesketchError;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const MINIMAL_GO: &str = "
project-root/
├── cmd/
│   └── main.go
├── internal/
├── go.mod
└── README.md
";

const REACT_VITE: &str = "
my-app/
├── public/
│   └── vite.svg
├── src/
│   ├── assets/
│   ├── components/
│   ├── App.css
│   ├── App.tsx
│   ├── index.css
│   └── main.tsx
├── index.html
├── package.json
├── tsconfig.json
└── vite.config.ts
";

const PYTHON_FLASK: &str = "
flask-app/
├── app/
│   ├── templates/
│   │   └── index.html
│   ├── static/
│   │   └── style.css
│   ├── __init__.py
│   └── routes.py
├── tests/
├── venv/
├── config.py
├── requirements.txt
└── run.py
";

fn registry() -> &'static BTreeMap<&'static str, &'static str> {
    static REGISTRY: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        BTreeMap::from([
            ("minimal-go", MINIMAL_GO),
            ("react-vite", REACT_VITE),
            ("python-flask", PYTHON_FLASK),
        ])
    })
}

/// Names of all built-in templates, sorted.
pub fn list() -> Vec<&'static str> {
    registry().keys().copied().collect()
}

/// The drawing of a template, without surrounding blank lines.
pub fn get(name: &str) -> Option<&'static str> {
    registry().get(name).map(|t| t.trim())
}

/// Like [`get`], but unknown names are an error.
pub fn require(name: &str) -> Result<&'static str, TreesketchError> {
    get(name).ok_or_else(|| TreesketchError::UnknownTemplate(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted() {
        assert_eq!(list(), ["minimal-go", "python-flask", "react-vite"]);
    }

    #[test]
    fn templates_are_trimmed() {
        let t = get("minimal-go").unwrap();
        assert!(t.starts_with("project-root/"));
        assert!(t.ends_with("README.md"));
    }

    #[test]
    fn unknown_template() {
        assert!(get("cobol").is_none());
        assert!(matches!(require("cobol"), Err(TreesketchError::UnknownTemplate(n)) if n == "cobol"));
    }
}
