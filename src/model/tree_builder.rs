//! Builder reconstructing a [LabelTree] from flat labels.
//!
//! The [LabelTreeBuilder] reads labels one at a time, in input order, and
//! hangs each below the node of its parent path:
//!
//! ```text
//! "1 Universe"  ──→ root ─ 1
//! "2 Person"    ──→ root ─ 1, 2
//! "1.1.3 Moon"  ──→ root ─ 1 ─ 1.1 ─ 1.1.3     (1.1 is synthetic)
//!                        └ 2
//! ```
//!
//! # Builder lifecycle
//! ```text
//! new() ──→ add_label() / add_item() ... ──→ finish() ──→ LabelTree
//! ```
//! A finished tree is never touched again; build a fresh one per render
//! pass. [LabelTreeBuilder::parse] and [LabelTreeBuilder::parse_items]
//! run the whole lifecycle in one call.
//!
//! # Grammar
//! See [label_grammar](crate::parser::label_grammar): the path ends at the
//! first space and is split at dots. Labels that are empty after trimming
//! are skipped; nothing else is rejected.

use crate::model::label_tree::{LabelTree, NodeIndex, ROOT_INDEX};
use crate::parser::label_grammar::{key_to_id, split_label};
use tracing::{debug, trace, warn};

/// Default prefix of node identifiers.
pub const DEFAULT_ID_PREFIX: &str = "rw-";

// =#========================================================================#=
// LABEL TREE BUILDER
// =#========================================================================#=
/// Incrementally builds a [LabelTree] from flat labels.
///
/// Generic over `I`, the handle of the element a label came from. Handles
/// are stored, never dereferenced; the builder has no access to the
/// elements themselves.
///
/// # Duplicate keys
/// If two labels share a full key, the later one wins: its text, id and
/// handle replace the earlier ones. Children already attached to the node
/// stay where they are, and the node keeps its original position.
#[derive(Debug)]
pub struct LabelTreeBuilder<I = ()> {
    tree: LabelTree<I>,
    num_replaced: usize,
}

impl LabelTreeBuilder<()> {
    /// Parses plain label strings into a tree with default settings.
    ///
    /// # Example
    /// ```
    /// use labeltree::model::LabelTreeBuilder;
    ///
    /// let tree = LabelTreeBuilder::parse(["1 A", "2 B", "1.1 C"]);
    /// let top: Vec<_> = tree.top_level().map(|n| n.key()).collect();
    /// assert_eq!(top, vec!["1", "2"]);
    /// assert_eq!(tree.find("1.1").unwrap().text(), Some("1.1 C"));
    /// ```
    pub fn parse<S: AsRef<str>>(labels: impl IntoIterator<Item = S>) -> LabelTree<()> {
        let mut builder = LabelTreeBuilder::new();
        for label in labels {
            builder.add_label(label.as_ref());
        }
        builder.finish()
    }
}

impl<I> LabelTreeBuilder<I> {
    /// Creates a builder using the [DEFAULT_ID_PREFIX].
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a builder with room for `num_labels` labels.
    pub fn with_capacity(num_labels: usize) -> Self {
        LabelTreeBuilder {
            tree: LabelTree::with_capacity(num_labels, DEFAULT_ID_PREFIX.to_string()),
            num_replaced: 0,
        }
    }

    /// Sets the prefix of node identifiers, e.g. `"rw-"`.
    ///
    /// Ids of labels added before are regenerated with the new prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tree.set_id_prefix(prefix.into());
        self
    }

    /// Parses labels paired with the handle of the element they came from.
    ///
    /// # Example
    /// ```
    /// use labeltree::model::LabelTreeBuilder;
    ///
    /// let tree = LabelTreeBuilder::parse_items([("1 A", Some(10)), ("1.2 B", None)]);
    /// assert_eq!(tree.find("1").unwrap().source_item(), Some(&10));
    /// assert_eq!(tree.find("1.2").unwrap().source_item(), None);
    /// ```
    pub fn parse_items<S: AsRef<str>>(items: impl IntoIterator<Item = (S, Option<I>)>) -> LabelTree<I> {
        let mut builder = Self::new();
        for (label, item) in items {
            builder.add_item(label.as_ref(), item);
        }
        builder.finish()
    }

    /// Adds a label without an element handle.
    ///
    /// # Returns
    /// The index of the node the label terminates at, or `None` if the
    /// label was empty and skipped.
    pub fn add_label(&mut self, label: &str) -> Option<NodeIndex> {
        self.add_item(label, None)
    }

    /// Adds a label together with the handle of the element it came from.
    ///
    /// Missing ancestors are created as synthetic nodes. If the full key
    /// exists already, text, id and handle are overwritten.
    ///
    /// # Returns
    /// The index of the node the label terminates at, or `None` if the
    /// label was empty and skipped.
    pub fn add_item(&mut self, label: &str, item: Option<I>) -> Option<NodeIndex> {
        let Some(parts) = split_label(label) else {
            debug!("skipping empty label");
            return None;
        };

        let mut place = ROOT_INDEX;
        let depth = parts.depth();
        for (level, segment) in parts.segments().enumerate() {
            let (child, created) = self.tree.child_or_insert(place, segment);
            if created && level + 1 < depth {
                trace!(full_key = self.tree[child].full_key(), "created ancestor");
            }
            place = child;
        }

        let id = key_to_id(self.tree.id_prefix(), parts.full_key);
        let replaced = self.tree.node_mut(place).assign(parts.text.to_string(), id, item);
        if replaced {
            self.num_replaced += 1;
            warn!(full_key = parts.full_key, text = parts.text, "duplicate label key; later label replaces earlier");
        }

        Some(place)
    }

    /// Returns how many labels replaced an earlier label with the same key.
    pub fn num_replaced(&self) -> usize {
        self.num_replaced
    }

    /// Finalizes building and returns the tree.
    pub fn finish(self) -> LabelTree<I> {
        debug!(
            nodes = self.tree.num_nodes(),
            labels = self.tree.num_labels(),
            replaced = self.num_replaced,
            "finished label tree"
        );
        self.tree
    }
}

impl<I> Default for LabelTreeBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
