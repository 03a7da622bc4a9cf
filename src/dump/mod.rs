//! Dump visitors - tree traversal and per-target rendering.
//!
//! One dumper per target:
//! - ANSI text (render as indented, colorized JSON-style text)
//! - HTML (render as nested row-style block markup)
//! - SVG (render as text rows, accounting widths for container sizing)
//!
//! Pure string building, no DOM manipulation.

pub mod container;
pub mod html;
pub mod svg;
pub mod text;

use std::collections::HashSet;

use log::debug;

use crate::error::RenderError;
use crate::highlight::{AnsiSpec, HtmlSpec, SvgSpec};
use crate::theme::Theme;
use crate::types::{Node, Notation, Target};

/// Traversal contract implemented by every dumper.
///
/// `visit_node` dispatches on the node kind, depth-first, pre-order.
/// `visit_root` is invoked exactly once, only at the top level, and defaults
/// to plain delegation; dumpers that wrap their output in an outer container
/// override it, since sizing metrics only exist after the subtree has been
/// fully visited.
pub trait DumpVisitor {
    fn visit_null(&mut self);
    fn visit_scalar(&mut self, text: &str);
    fn visit_sequence(&mut self, items: &[Node]);
    fn visit_mapping(&mut self, entries: &[(String, Node)]);

    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Null => self.visit_null(),
            Node::Scalar(text) => self.visit_scalar(text),
            Node::Sequence(items) => self.visit_sequence(items),
            Node::Mapping(entries) => self.visit_mapping(entries),
        }
    }

    fn visit_root(&mut self, node: &Node) {
        self.visit_node(node);
    }
}

/// One segment of the traversal path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// The dumper's record of ancestor keys/indices.
///
/// Answers the two questions layout needs: how deep the traversal is, and
/// whether the immediate parent is a mapping.
#[derive(Debug, Default)]
pub struct PathStack {
    segments: Vec<PathSegment>,
}

impl PathStack {
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn push_key(&mut self, key: &str) {
        self.segments.push(PathSegment::Key(key.to_string()));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn parent_is_mapping(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Key(_)))
    }
}

impl std::fmt::Display for PathStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "root");
        }
        for segment in &self.segments {
            match segment {
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "({})", key)?,
            }
        }
        Ok(())
    }
}

/// Wrap text in JSON double quotes
pub(crate) fn quote(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Reject trees that violate the mapping-key uniqueness precondition.
///
/// Cyclic trees are unrepresentable under the owned `Node` type, so no
/// cycle check exists.
fn validate(tree: &Node) -> Result<(), RenderError> {
    let mut path = PathStack::new();
    validate_node(tree, &mut path)
}

fn validate_node(node: &Node, path: &mut PathStack) -> Result<(), RenderError> {
    match node {
        Node::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push_index(index);
                validate_node(item, path)?;
                path.pop();
            }
            Ok(())
        }
        Node::Mapping(entries) => {
            let mut seen: HashSet<&str> = HashSet::new();
            for (key, value) in entries {
                if !seen.insert(key.as_str()) {
                    return Err(RenderError::DuplicateKey {
                        key: key.clone(),
                        path: path.to_string(),
                    });
                }
                path.push_key(key);
                validate_node(value, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Render a tree with the dumper selected by (notation, target).
///
/// Validates the tree before any output is produced, then runs a single
/// traversal to completion. YAML on the text target has no dumper and fails
/// explicitly instead of degrading to another target.
pub fn render_tree(
    tree: &Node,
    notation: Notation,
    target: Target,
    theme: &Theme,
) -> Result<String, RenderError> {
    validate(tree)?;
    debug!("rendering {} tree to {}", notation, target);

    match target {
        Target::TextAnsi => {
            if notation != Notation::Json {
                return Err(RenderError::Unsupported { notation, target });
            }
            let spec = AnsiSpec::default();
            let mut dumper = text::TextDumper::new(&spec);
            dumper.visit_root(tree);
            Ok(dumper.into_output())
        }
        Target::Html => {
            let spec = HtmlSpec;
            let mut dumper = html::HtmlDumper::new(notation, &spec, theme);
            dumper.visit_root(tree);
            Ok(dumper.into_output())
        }
        Target::Svg => {
            let spec = SvgSpec;
            let mut dumper = svg::SvgDumper::new(notation, &spec, theme);
            dumper.visit_root(tree);
            Ok(dumper.into_output())
        }
    }
}
