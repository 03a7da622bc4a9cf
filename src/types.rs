//! Type definitions for value trees and render selection

/// The logical formatting convention applied to a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Json, // brackets, commas, quoted keys
    Yaml, // indented block style, dash-prefixed sequence items
}

impl Notation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Notation::Json),
            "yaml" | "yml" => Some(Notation::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notation::Json => write!(f, "JSON"),
            Notation::Yaml => write!(f, "YAML"),
        }
    }
}

/// The physical output dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    TextAnsi, // plain text with ANSI escape coloring
    Html,     // block markup, one element per row
    Svg,      // text rows inside a sized <svg> root
}

impl Target {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "ansi" => Some(Target::TextAnsi),
            "html" => Some(Target::Html),
            "svg" => Some(Target::Svg),
            _ => None,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::TextAnsi => write!(f, "text"),
            Target::Html => write!(f, "html"),
            Target::Svg => write!(f, "svg"),
        }
    }
}

/// A node in the value tree handed to the renderer.
///
/// Trees are built once by an adapter and treated as read-only by every
/// dumper. Sequence items and mapping entries keep insertion order; mapping
/// keys must be unique within one mapping (checked at the render entry).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(String, Node)>),
}

impl Node {
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }

    pub fn mapping(entries: Vec<(String, Node)>) -> Self {
        Node::Mapping(entries)
    }
}
