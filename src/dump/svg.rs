//! SVG row dumper - text rows with exact width accounting.
//!
//! Row-break rules are identical to the HTML dumper, but rows are emitted
//! as `<tspan>` elements with dy offsets inside one text block, and every
//! token also feeds a running row-width counter. The enclosing `<svg>` must
//! declare its size up front while the true size is only knowable after
//! layout, so `visit_root` drives a full inner render against a private
//! buffer and sizes the container from the inner instance's final metrics.
//! No re-measurement pass is taken: widths are counted against the actual
//! emitted content.

use log::debug;

use super::container::{fmt_dim, svg_container, FONT_SIZE, PADDING, ROW_HEIGHT};
use super::{quote, DumpVisitor, PathStack};
use crate::highlight::RenderSpec;
use crate::theme::Theme;
use crate::types::{Node, Notation};

/// Spaces per nesting level
const INDENT: usize = 2;

/// Width and row metrics accumulated while emitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMetrics {
    /// Characters emitted on the current row
    pub row_width: usize,
    /// Maximum row width seen so far (monotonic)
    pub max_row_width: usize,
    /// Rows started so far; the implicit first row counts
    pub row_count: usize,
}

impl RowMetrics {
    /// Account for `width` characters added to the current row.
    fn add(&mut self, width: usize) {
        self.row_width += width;
        if self.row_width > self.max_row_width {
            self.max_row_width = self.row_width;
        }
    }

    /// Reset the running width and bump the row count.
    fn start_row(&mut self) {
        self.row_width = 0;
        self.row_count += 1;
    }
}

/// Renders a tree as SVG text rows and wraps them into a root element
/// sized from the accumulated metrics.
pub struct SvgDumper<'a> {
    notation: Notation,
    spec: &'a dyn RenderSpec,
    theme: &'a Theme,
    path: PathStack,
    out: String,
    metrics: RowMetrics,
}

impl<'a> SvgDumper<'a> {
    pub fn new(notation: Notation, spec: &'a dyn RenderSpec, theme: &'a Theme) -> Self {
        Self {
            notation,
            spec,
            theme,
            path: PathStack::new(),
            out: String::new(),
            metrics: RowMetrics::default(),
        }
    }

    pub fn into_output(self) -> String {
        self.out
    }

    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Emit a markup fragment whose visible width is `width` characters.
    fn put(&mut self, markup: &str, width: usize) {
        self.out.push_str(markup);
        self.metrics.add(width);
    }

    /// Emit literal row text (separator spaces, indentation).
    fn put_literal(&mut self, text: &str) {
        self.out.push_str(text);
        self.metrics.add(text.chars().count());
    }

    fn put_syntax(&mut self, token: &str) {
        let markup = self.spec.highlight_syntax(token);
        self.put(&markup, token.chars().count());
    }

    /// Open a row tspan indented by the given number of literal spaces.
    fn open_row(&mut self, indent: usize) {
        self.metrics.start_row();
        let tag = format!(
            r#"<tspan x="{}" dy="{}">"#,
            fmt_dim(PADDING),
            fmt_dim(ROW_HEIGHT)
        );
        self.out.push_str(&tag);
        if indent > 0 {
            self.put_literal(&" ".repeat(indent));
        }
    }

    fn close_row(&mut self) {
        self.out.push_str("</tspan>");
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
}

impl DumpVisitor for SvgDumper<'_> {
    fn visit_null(&mut self) {
        if self.notation == Notation::Yaml && self.path.parent_is_mapping() {
            self.put_literal(" ");
        }
        let markup = self.spec.highlight_null();
        self.put(&markup, "null".len());
    }

    fn visit_scalar(&mut self, text: &str) {
        match self.notation {
            Notation::Yaml => {
                // Quotes are not drawn in this notation, so they never count
                if self.path.parent_is_mapping() {
                    self.put_literal(" ");
                }
                let markup = self.spec.highlight_value(text);
                self.put(&markup, text.chars().count());
            }
            Notation::Json => {
                let quoted = quote(text);
                let markup = self.spec.highlight_value(&quoted);
                self.put(&markup, quoted.chars().count());
            }
        }
    }

    fn visit_sequence(&mut self, items: &[Node]) {
        match self.notation {
            Notation::Yaml => {
                if items.is_empty() {
                    self.put_literal(" ");
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
                    self.put_literal(" ");
                    self.put_syntax("{}");
                    return;
                }
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 || self.path.parent_is_mapping() {
                        self.next_row();
                    }
                    let markup = self.spec.highlight_key(key);
                    self.put(&markup, key.chars().count());
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
                    let quoted = quote(key);
                    let markup = self.spec.highlight_key(&quoted);
                    self.put(&markup, quoted.chars().count());
                    self.put_syntax(":");
                    self.put_literal(" ");
                    self.path.push_key(key);
                    self.visit_node(value);
                    self.path.pop();
                }
                self.next_row_at(self.path.depth());
                self.put_syntax("}");
            }
        }
    }

    /// Nested self-render: an inner instance produces the rows and the
    /// metrics; the outer instance only wraps them into the sized root.
    fn visit_root(&mut self, node: &Node) {
        let mut inner = SvgDumper::new(self.notation, self.spec, self.theme);
        inner.open_row(0);
        inner.visit_node(node);
        inner.close_row();

        let metrics = inner.metrics();
        debug!(
            "svg inner pass: {} rows, max width {} chars",
            metrics.row_count, metrics.max_row_width
        );

        self.metrics = metrics;
        self.out = svg_container(
            &inner.into_output(),
            self.notation,
            self.theme,
            FONT_SIZE,
            metrics.max_row_width,
            metrics.row_count,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::SvgSpec;

    fn measure(tree: &Node, notation: Notation) -> RowMetrics {
        let spec = SvgSpec;
        let theme = Theme::default();
        let mut dumper = SvgDumper::new(notation, &spec, &theme);
        dumper.visit_root(tree);
        dumper.metrics()
    }

    #[test]
    fn test_single_row_mapping_width() {
        // lead space 1 + key 5 + colon 1 + scalar 3
        let tree = Node::mapping(vec![("alpha".to_string(), Node::scalar("abc"))]);
        let metrics = measure(&tree, Notation::Yaml);
        assert_eq!(metrics.max_row_width, 10);
        assert_eq!(metrics.row_count, 1);
    }

    #[test]
    fn test_dash_rows_reset_running_width() {
        let tree = Node::sequence(vec![Node::scalar("x"), Node::scalar("yy")]);
        let metrics = measure(&tree, Notation::Yaml);
        // "- x" is 3 wide, "- yy" is 4 wide
        assert_eq!(metrics.max_row_width, 4);
        assert_eq!(metrics.row_count, 2);
        assert_eq!(metrics.row_width, 4);
    }

    #[test]
    fn test_indent_counts_toward_width() {
        let tree = Node::mapping(vec![(
            "k".to_string(),
            Node::sequence(vec![Node::scalar("a"), Node::scalar("bb")]),
        )]);
        let metrics = measure(&tree, Notation::Yaml);
        // rows: "k:" (2), "  - a" (5), "  - bb" (6)
        assert_eq!(metrics.max_row_width, 6);
        assert_eq!(metrics.row_count, 3);
    }

    #[test]
    fn test_empty_placeholder_width() {
        let tree = Node::mapping(vec![("a".to_string(), Node::sequence(vec![]))]);
        let metrics = measure(&tree, Notation::Yaml);
        // "a:" plus the " []" placeholder on the same row
        assert_eq!(metrics.max_row_width, 5);
        assert_eq!(metrics.row_count, 1);
    }

    #[test]
    fn test_null_token_width() {
        let metrics = measure(&Node::Null, Notation::Yaml);
        assert_eq!(metrics.max_row_width, 4);
        assert_eq!(metrics.row_count, 1);
    }

    #[test]
    fn test_json_quotes_count_toward_width() {
        let tree = Node::sequence(vec![Node::scalar("ab")]);
        let metrics = measure(&tree, Notation::Json);
        // rows: "[" (1), `  "ab"` (6), "]" (1)
        assert_eq!(metrics.max_row_width, 6);
        assert_eq!(metrics.row_count, 3);
    }

    #[test]
    fn test_root_wraps_inner_rows() {
        let spec = SvgSpec;
        let theme = Theme::default();
        let mut dumper = SvgDumper::new(Notation::Yaml, &spec, &theme);
        dumper.visit_root(&Node::scalar("hi"));
        let out = dumper.into_output();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"<tspan class="tree-value">hi</tspan>"#));
        assert!(out.ends_with("</svg>"));
    }
}
