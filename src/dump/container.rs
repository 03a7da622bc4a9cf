//! Outer container builders - wrap rendered rows into standalone documents.
//!
//! Pure templating, no traversal logic. The SVG container is sized from the
//! row metrics measured during the inner render pass; the HTML document
//! needs no metrics and only supplies the style shell.

use crate::theme::{derived_variables, Theme};
use crate::types::Notation;

/// Pixels per character cell in SVG output (monospace grid)
pub(crate) const CHAR_WIDTH: f64 = 8.0;
/// Pixels per text row in SVG output
pub(crate) const ROW_HEIGHT: f64 = 16.0;
/// Padding around the rendered block, both targets (px)
pub(crate) const PADDING: f64 = 20.0;
/// Font size for rendered rows (px)
pub(crate) const FONT_SIZE: f64 = 13.0;

const FONT_STACK: &str = "ui-monospace, 'Cascadia Code', Menlo, Consolas, monospace";

/// Wrap rendered rows into a complete, self-contained HTML document.
pub fn html_document(inner: &str, notation: Notation, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{notation} tree</title>
<style>
  .tree {{{derived}
    background: var(--bg);
    color: var(--fg);
    font-family: {font};
    font-size: {size}px;
    padding: {pad}px;
  }}
  .tree-row {{ white-space: pre; }}
  .tree-key {{ color: var(--_key); }}
  .tree-value {{ color: var(--_value); }}
  .tree-null {{ color: var(--_null); }}
  .tree-syntax {{ color: var(--_syntax); }}
</style>
</head>
<body style="{vars}">
<div class="tree">
{inner}
</div>
</body>
</html>"#,
        notation = notation,
        derived = derived_variables(),
        font = FONT_STACK,
        size = fmt_dim(FONT_SIZE),
        pad = fmt_dim(PADDING),
        vars = theme.css_variables(),
        inner = inner,
    )
}

/// Wrap rendered row tspans into a sized, self-contained SVG root element.
///
/// `max_row_chars` and `row_count` come from the inner pass; the root
/// dimensions are a pure function of them and the character grid constants.
pub fn svg_container(
    inner: &str,
    notation: Notation,
    theme: &Theme,
    font_size: f64,
    max_row_chars: usize,
    row_count: usize,
) -> String {
    let width = max_row_chars as f64 * CHAR_WIDTH + PADDING * 2.0;
    let height = row_count as f64 * ROW_HEIGHT + PADDING * 2.0;
    // Rows carry dy offsets, so the text origin sits one row above the block
    let text_y = PADDING + font_size - ROW_HEIGHT;

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" data-notation="{notation}" style="{vars};background:var(--bg)">
<style>
  text {{ font-family: {font}; font-size: {size}px; fill: var(--fg); }}
  .tree-key {{ fill: var(--_key); }}
  .tree-value {{ fill: var(--_value); }}
  .tree-null {{ fill: var(--_null); }}
  .tree-syntax {{ fill: var(--_syntax); }}
  svg {{{derived}
  }}
</style>
<text xml:space="preserve" x="{x}" y="{y}">{inner}</text>
</svg>"#,
        w = fmt_dim(width),
        h = fmt_dim(height),
        notation = notation,
        vars = theme.css_variables(),
        font = FONT_STACK,
        size = fmt_dim(font_size),
        derived = derived_variables(),
        x = fmt_dim(PADDING),
        y = fmt_dim(text_y),
        inner = inner,
    )
}

/// Format a dimension - integer when whole, trimmed decimals otherwise
pub(crate) fn fmt_dim(d: f64) -> String {
    if d.fract() == 0.0 {
        format!("{}", d as i64)
    } else {
        let s = format!("{}", d);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
