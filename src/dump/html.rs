//! HTML block dumper - one block element per rendered row.
//!
//! YAML layout follows block-style indentation rules: a collection nested
//! directly under a mapping key starts on the next row, while a collection
//! nested directly under a sequence dash continues inline on the dash's
//! row. JSON notation reuses the same row machinery with bracket/comma
//! conventions instead.
//!
//! Rows carry a monotonically increasing `data-row` index (a styling hook,
//! e.g. zebra striping) and rely on `white-space: pre` so indentation
//! survives literally.

use super::container::html_document;
use super::{quote, DumpVisitor, PathStack};
use crate::highlight::RenderSpec;
use crate::theme::Theme;
use crate::types::{Node, Notation};

/// Spaces per nesting level
const INDENT: usize = 2;

/// Renders a tree as nested row-style block markup, wrapped into a
/// complete HTML document once the root subtree has been visited.
pub struct HtmlDumper<'a> {
    notation: Notation,
    spec: &'a dyn RenderSpec,
    theme: &'a Theme,
    path: PathStack,
    out: String,
    row_index: usize,
}

impl<'a> HtmlDumper<'a> {
    pub fn new(notation: Notation, spec: &'a dyn RenderSpec, theme: &'a Theme) -> Self {
        Self {
            notation,
            spec,
            theme,
            path: PathStack::new(),
            out: String::new(),
            row_index: 0,
        }
    }

    pub fn into_output(self) -> String {
        self.out
    }

    /// Open a row block indented by the given number of literal spaces.
    fn open_row(&mut self, indent: usize) {
        let tag = format!(r#"<div class="tree-row" data-row="{}">"#, self.row_index);
        self.out.push_str(&tag);
        self.row_index += 1;
        for _ in 0..indent {
            self.out.push(' ');
        }
    }

    fn close_row(&mut self) {
        self.out.push_str("</div>\n");
    }

    /// Close the current row and open the next at the current depth.
    fn next_row(&mut self) {
        self.close_row();
        self.open_row(self.path.depth() * INDENT);
    }

    /// Close the current row and open the next at an explicit level.
    fn next_row_at(&mut self, level: usize) {
        self.close_row();
        self.open_row(level * INDENT);
    }

    fn put_syntax(&mut self, token: &str) {
        let markup = self.spec.highlight_syntax(token);
        self.out.push_str(&markup);
    }
}

impl DumpVisitor for HtmlDumper<'_> {
    fn visit_null(&mut self) {
        if self.notation == Notation::Yaml && self.path.parent_is_mapping() {
            self.out.push(' ');
        }
        let markup = self.spec.highlight_null();
        self.out.push_str(&markup);
    }

    fn visit_scalar(&mut self, text: &str) {
        match self.notation {
            Notation::Yaml => {
                if self.path.parent_is_mapping() {
                    self.out.push(' ');
                }
                let markup = self.spec.highlight_value(text);
                self.out.push_str(&markup);
            }
            Notation::Json => {
                let markup = self.spec.highlight_value(&quote(text));
                self.out.push_str(&markup);
            }
        }
    }

    fn visit_sequence(&mut self, items: &[Node]) {
        match self.notation {
            Notation::Yaml => {
                if items.is_empty() {
                    self.out.push(' ');
                    self.put_syntax("[]");
                    return;
                }
                for (index, item) in items.iter().enumerate() {
                    if index > 0 || self.path.parent_is_mapping() {
                        self.next_row();
                    }
                    self.put_syntax("- ");
                    self.path.push_index(index);
                    self.visit_node(item);
                    self.path.pop();
                }
            }
            Notation::Json => {
                if items.is_empty() {
                    self.put_syntax("[]");
                    return;
                }
                self.put_syntax("[");
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        self.put_syntax(",");
                    }
                    self.next_row_at(self.path.depth() + 1);
                    self.path.push_index(index);
                    self.visit_node(item);
                    self.path.pop();
                }
                self.next_row_at(self.path.depth());
                self.put_syntax("]");
            }
        }
    }

    fn visit_mapping(&mut self, entries: &[(String, Node)]) {
        match self.notation {
            Notation::Yaml => {
                if entries.is_empty() {
                    self.out.push(' ');
                    self.put_syntax("{}");
                    return;
                }
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 || self.path.parent_is_mapping() {
                        self.next_row();
                    }
                    let markup = self.spec.highlight_key(key);
                    self.out.push_str(&markup);
                    self.put_syntax(":");
                    self.path.push_key(key);
                    self.visit_node(value);
                    self.path.pop();
                }
            }
            Notation::Json => {
                if entries.is_empty() {
                    self.put_syntax("{}");
                    return;
                }
                self.put_syntax("{");
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        self.put_syntax(",");
                    }
                    self.next_row_at(self.path.depth() + 1);
                    let markup = self.spec.highlight_key(&quote(key));
                    self.out.push_str(&markup);
                    self.put_syntax(":");
                    self.out.push(' ');
                    self.path.push_key(key);
                    self.visit_node(value);
                    self.path.pop();
                }
                self.next_row_at(self.path.depth());
                self.put_syntax("}");
            }
        }
    }

    fn visit_root(&mut self, node: &Node) {
        self.open_row(0);
        self.visit_node(node);
        self.close_row();

        let inner = std::mem::take(&mut self.out);
        self.out = html_document(inner.trim_end(), self.notation, self.theme);
    }
}
