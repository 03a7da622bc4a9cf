//! vdump - Render structured value trees as colored terminal text, HTML and SVG
//!
//! This library takes an already-built in-memory value tree (null, scalar,
//! ordered sequence, ordered key-value mapping) and produces a formatted,
//! syntax-highlighted rendition of it: JSON-like or YAML-like layout, as
//! ANSI terminal text, a self-contained HTML document, or a sized SVG.
//!
//! # Example
//!
//! ```rust
//! use vdump::{render, Notation, Target};
//!
//! let tree = vdump::from_json_str(r#"{"name": "demo", "tags": ["a", "b"]}"#).unwrap();
//!
//! let text = render(&tree, Notation::Json, Target::TextAnsi).unwrap();
//! println!("{}", text);
//!
//! let svg = render(&tree, Notation::Yaml, Target::Svg).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Supported pairings
//!
//! - JSON notation: text, HTML, SVG
//! - YAML notation: HTML, SVG (YAML to text errors as unsupported)

pub mod adapter;
pub mod dump;
pub mod error;
pub mod highlight;
pub mod theme;
pub mod types;

pub use adapter::{from_env, from_json, from_json_str};
pub use dump::{render_tree, DumpVisitor};
pub use error::RenderError;
pub use highlight::{AnsiSpec, HtmlSpec, RenderSpec, SvgSpec};
pub use theme::{Theme, TreeTheme};
pub use types::{Node, Notation, Target};

/// Render a value tree with the default theme.
///
/// # Example
/// ```rust
/// use vdump::{render, Node, Notation, Target};
///
/// let out = render(&Node::Null, Notation::Json, Target::TextAnsi).unwrap();
/// assert!(out.contains("null"));
/// ```
pub fn render(tree: &Node, notation: Notation, target: Target) -> Result<String, RenderError> {
    dump::render_tree(tree, notation, target, &Theme::default())
}

/// Render a value tree with an explicit theme.
pub fn render_with_theme(
    tree: &Node,
    notation: Notation,
    target: Target,
    theme: &Theme,
) -> Result<String, RenderError> {
    dump::render_tree(tree, notation, target, theme)
}
