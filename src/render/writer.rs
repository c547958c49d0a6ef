//! Writing rendered documents as HTML and trees as text outlines.

use crate::model::{LabelTree, NodeIndex};
use crate::parser::parsing_error::{LabelTreeError, Result};
use crate::render::defs::VOID_ELEMENTS;
use crate::render::dom::{Document, DomNodeKind, ElementId};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Average number of characters a node adds to the HTML, for capacity
const HTML_CHARS_PER_NODE: usize = 48;

/// Returns the HTML of a node and its subtree (outer HTML).
///
/// Text and attribute values are escaped; void elements such as `input`
/// get no end tag. No whitespace is added between elements.
///
/// # Example
/// ```
/// use labeltree::render::{Document, to_html};
///
/// let mut doc = Document::new();
/// let div = doc.create_element("div");
/// doc.set_attribute(div, "title", "Fish & \"chips\"");
/// let input = doc.create_element("input");
/// doc.append_child(div, input);
/// let text = doc.create_text("1 <Universe>");
/// doc.append_child(div, text);
///
/// assert_eq!(
///     to_html(&doc, div),
///     r#"<div title="Fish &amp; &quot;chips&quot;"><input>1 &lt;Universe&gt;</div>"#
/// );
/// ```
pub fn to_html(doc: &Document, node: ElementId) -> String {
    /// Pending work of the serializer
    enum Step {
        Open(ElementId),
        Close(ElementId),
    }

    let estimated_capacity = doc.descendants(node).len() * HTML_CHARS_PER_NODE;
    let mut html = String::with_capacity(estimated_capacity);
    let mut stack = vec![Step::Open(node)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open(current) => match doc.node(current).kind() {
                DomNodeKind::Text(text) => push_escaped(&mut html, text, false),
                DomNodeKind::Element { tag, attributes } => {
                    html.push('<');
                    html.push_str(tag);
                    for (name, value) in attributes {
                        html.push(' ');
                        html.push_str(name);
                        html.push_str("=\"");
                        push_escaped(&mut html, value, true);
                        html.push('"');
                    }
                    html.push('>');

                    if !VOID_ELEMENTS.contains(&tag.as_str()) {
                        stack.push(Step::Close(current));
                        stack.extend(doc.children(current).iter().rev().map(|&child| Step::Open(child)));
                    }
                }
            },
            Step::Close(current) => {
                if let Some(tag) = doc.tag(current) {
                    html.push_str("</");
                    html.push_str(tag);
                    html.push('>');
                }
            }
        }
    }
    html
}

/// Returns the HTML of the children of a node (inner HTML).
pub fn to_inner_html(doc: &Document, node: ElementId) -> String {
    doc.children(node).iter().map(|&child| to_html(doc, child)).collect()
}

/// Writes the outer HTML of a node to a file, followed by a newline.
///
/// # Errors
/// Returns [LabelTreeError::Io] if the file cannot be created or written.
pub fn write_html_file<P: AsRef<Path>>(path: P, doc: &Document, node: ElementId) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LabelTreeError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_html(doc, node).as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .and_then(|_| writer.flush())
        .map_err(|e| LabelTreeError::io(path, e))
}

/// Escapes `&`, `<`, `>` and, inside attribute values, `"`.
///
/// # Example
/// ```
/// # use labeltree::render::writer::escape_html;
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("Water"), "Water");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    push_escaped(&mut escaped, text, false);
    escaped
}

fn push_escaped(out: &mut String, text: &str, in_attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Returns a plain-text outline of a tree, one node per line.
///
/// Each line is indented by two spaces per level below the top and shows
/// the label text, or the full key for synthetic nodes.
///
/// # Example
/// ```
/// use labeltree::model::LabelTreeBuilder;
/// use labeltree::render::to_text_outline;
///
/// let tree = LabelTreeBuilder::parse(["1 Universe", "1.1.1 Sun", "2 Person"]);
/// assert_eq!(to_text_outline(&tree), "1 Universe\n  1.1\n    1.1.1 Sun\n2 Person\n");
/// ```
pub fn to_text_outline<I>(tree: &LabelTree<I>) -> String {
    let mut outline = String::new();
    let mut stack: Vec<(NodeIndex, usize)> = tree.root().children().iter().rev().map(|&child| (child, 0)).collect();

    while let Some((index, depth)) = stack.pop() {
        for _ in 0..depth {
            outline.push_str("  ");
        }
        outline.push_str(tree[index].display_text());
        outline.push('\n');
        stack.extend(tree[index].children().iter().rev().map(|&child| (child, depth + 1)));
    }
    outline
}
