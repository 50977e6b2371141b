//! # Treesketch
//!
//! `treesketch` recovers a directory hierarchy from loosely formatted text:
//! drawings produced by `tree` (Unicode or ASCII, Linux or Windows), flat path
//! lists, and hand-edited mixtures of both with inconsistent indentation,
//! missing markers or stray comments.
//!
//! The core is a pure function, [`parse`], that never fails and returns a
//! [`ParseResult`]; [`render_tree`] turns a node list back into a normalized
//! drawing. Around it sit the input sources ([`read_input`]), a registry of
//! example trees ([`templates`]) and a scaffolder ([`scaffold`]) that creates
//! the parsed structure on disk.
//!
//! # Features
//!
//! - `parallel`: Writes scaffolded files in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use treesketch::{parse, render_tree, NodeKind};
//!
//! let result = parse("app/\n├── src/\n│   └── main.rs\n└── Cargo.toml\n");
//!
//! assert!(result.root_inferred);
//! assert_eq!(result.normalized, "app/\napp/src/\napp/src/main.rs\napp/Cargo.toml");
//! assert_eq!(result.nodes[1].kind, NodeKind::Dir);
//! println!("{}", render_tree(&result.nodes));
//! ```

mod builder;
mod classify;
pub mod clipboard;
mod content;
mod engine;
mod error;
mod input;
mod options;
pub mod output;
mod scaffold;
mod scanner;
pub mod templates;
mod tree;
mod types;

pub use content::default_content;
pub use engine::{correct_directories, normalize, parse};
pub use error::TreesketchError;
pub use input::{InputSource, read_input};
pub use options::{ScaffoldBuilder, ScaffoldOptions};
pub use scaffold::{ScaffoldReport, scaffold};
pub use tree::{render_tree, sibling_order};
pub use types::{Node, NodeKind, ParseResult};
