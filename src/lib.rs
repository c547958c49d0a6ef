//! Labeltree rebuilds hierarchical taxonomies from flat, dotted labels and
//! renders them as collapsible accordions.
//!
//! Taxonomies such as RapidWords list their semantic domains as flat labels
//! like `"3.2.1 Water"`: a dotted path, a space, and free text. This crate
//! reconstructs the implied hierarchy and turns a flat checklist of such
//! labels into nested, collapsible groups.
//! Core functionality provided:
//! - Label grammar: the path ends at the first space and splits at dots,
//!   see [crate::parser::label_grammar].
//! - Tree model: [LabelTree], an arena of [LabelNode]s in first-appearance
//!   order, with synthetic nodes for ancestors the input never lists.
//! - Tree builder: [LabelTreeBuilder] parses labels in one call or one by
//!   one. Parsing never fails; malformed labels degrade to flat levels and
//!   duplicate keys are resolved last-write-wins.
//! - Rendering: [render](crate::render::render) walks a tree into any
//!   [RenderSurface](crate::render::RenderSurface), moving each label's
//!   checkbox into the header of its group. [Document](crate::render::Document)
//!   is an in-memory surface that serializes to HTML.
//! - Export: JSON outlines via serde ([Outline]) and plain-text outlines.
//! - Command line: [cli] holds the arguments and output of the binary.
//!
//! # Usage patterns
//! 1. Parse labels and query the tree:
//! ```
//! use labeltree::parse_labels;
//!
//! let tree = parse_labels(["1 Universe", "1.1 Sky", "1.1.1 Sun", "2 Person"]);
//! assert_eq!(tree.top_level().count(), 2);
//! assert_eq!(tree.find("1.1.1").unwrap().text(), Some("1.1.1 Sun"));
//! assert_eq!(tree.nearest("1.1.7").unwrap().full_key(), "1.1");
//! ```
//!
//! 2. Rebuild a flat checklist as an accordion:
//! ```
//! use labeltree::render::{Document, RenderConfig, rebuild, to_html};
//!
//! let (mut doc, mount) = Document::checklist("id_rapidwords", &["1 Universe", "1.1 Sky"]);
//! let tree = rebuild(&mut doc, &mount, &RenderConfig::default());
//! assert_eq!(tree.num_nodes(), 2);
//! assert!(doc.find_by_id(mount, "base-rw-1-1").is_some());
//! assert!(to_html(&doc, mount).starts_with(r#"<div id="id_rapidwords" class="accordion">"#));
//! ```
//!
//! 3. Render a taxonomy file to HTML in one go with [render_label_file].

pub mod cli;
pub mod model;
pub mod parser;
pub mod render;

pub use crate::model::{LabelNode, LabelTree, LabelTreeBuilder, Outline};
pub use crate::parser::LabelTreeError;

use crate::parser::label_source::read_label_file;
use crate::parser::parsing_error::Result;
use crate::render::{Document, RenderConfig};
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses plain label strings using default settings.
///
/// See [LabelTreeBuilder::parse] for details.
pub fn parse_labels<S: AsRef<str>>(labels: impl IntoIterator<Item = S>) -> LabelTree {
    LabelTreeBuilder::parse(labels)
}

/// Parses a taxonomy file with one label per line using default settings.
///
/// # Errors
/// Returns [LabelTreeError::Io] if the file cannot be read.
pub fn parse_label_file<P: AsRef<Path>>(path: P) -> Result<LabelTree> {
    Ok(LabelTreeBuilder::parse(read_label_file(path)?))
}

/// Reads a taxonomy file, builds its checklist under `mount_id` and
/// rebuilds it as an accordion.
///
/// # Returns
/// The document, the mount element and the rendered tree.
///
/// # Errors
/// Returns [LabelTreeError::Io] if the file cannot be read.
pub fn render_label_file<P: AsRef<Path>>(
    path: P,
    mount_id: &str,
    config: &RenderConfig,
) -> Result<(Document, render::ElementId, LabelTree<render::ElementId>)> {
    let labels = read_label_file(path)?;
    let (mut doc, mount) = Document::checklist(mount_id, &labels);
    let tree = render::rebuild(&mut doc, &mount, config);
    Ok((doc, mount, tree))
}
