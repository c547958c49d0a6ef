//! Serializable nested view of a [LabelTree].
//!
//! The arena layout of [LabelTree] is convenient for building and lookups,
//! but consumers outside Rust usually want nesting. [Outline] mirrors the
//! tree with owned, nested children and derives [serde::Serialize] so it can
//! be handed out as JSON.
//!
//! Outlines nest as deep as the taxonomy, and serializing or dropping one
//! recurses once per level; [to_json] therefore refuses trees deeper than
//! [MAX_OUTLINE_DEPTH].

use crate::model::label_tree::{LabelTree, NodeIndex};
use crate::parser::parsing_error::{LabelTreeError, Result};
use serde::{Deserialize, Serialize};

/// One node of an outline, with its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub key: String,
    pub full_key: String,
    pub id: String,
    /// Original label; absent for synthetic ancestors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Outline>,
}

impl Outline {
    /// Builds the outlines of all top-level nodes of a tree.
    ///
    /// # Example
    /// ```
    /// use labeltree::model::{LabelTreeBuilder, Outline};
    ///
    /// let tree = LabelTreeBuilder::parse(["1.1 Sky"]);
    /// let outline = Outline::from_tree(&tree);
    /// assert_eq!(outline[0].id, "rw-1");
    /// assert_eq!(outline[0].text, None);
    /// assert_eq!(outline[0].children[0].text.as_deref(), Some("1.1 Sky"));
    /// ```
    pub fn from_tree<I>(tree: &LabelTree<I>) -> Vec<Outline> {
        let order: Vec<NodeIndex> = tree.pre_order_iter().map(|node| node.index()).collect();
        let mut built: Vec<Option<Outline>> = Vec::with_capacity(order.len());
        built.resize_with(order.len(), || None);

        // Children come after their parent in pre-order, so building in
        // reverse finds every child outline finished.
        for &index in order.iter().skip(1).rev() {
            let node = &tree[index];
            let children = node
                .children()
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[index] = Some(Outline {
                key: node.key().to_string(),
                full_key: node.full_key().to_string(),
                id: tree.node_id(index).into_owned(),
                text: node.text().map(str::to_string),
                children,
            });
        }

        tree.root()
            .children()
            .iter()
            .filter_map(|&child| built[child].take())
            .collect()
    }

    /// Returns the number of nodes in this outline, itself included.
    pub fn num_nodes(&self) -> usize {
        1 + self.children.iter().map(Outline::num_nodes).sum::<usize>()
    }
}

/// Deepest tree [to_json] accepts.
///
/// Each level nests an object and a `children` array; `serde_json` reads
/// back at most 127 nested values.
pub const MAX_OUTLINE_DEPTH: usize = 63;

fn check_depth<I>(tree: &LabelTree<I>) -> Result<()> {
    let depth = tree.max_depth();
    if depth > MAX_OUTLINE_DEPTH {
        return Err(LabelTreeError::OutlineTooDeep {
            depth,
            max: MAX_OUTLINE_DEPTH,
        });
    }
    Ok(())
}

/// Serializes the outline of a tree to compact JSON.
///
/// # Errors
/// Returns [LabelTreeError::OutlineTooDeep] for trees deeper than
/// [MAX_OUTLINE_DEPTH].
pub fn to_json<I>(tree: &LabelTree<I>) -> Result<String> {
    check_depth(tree)?;
    Ok(serde_json::to_string(&Outline::from_tree(tree))?)
}

/// Serializes the outline of a tree to indented JSON.
///
/// # Errors
/// Returns [LabelTreeError::OutlineTooDeep] for trees deeper than
/// [MAX_OUTLINE_DEPTH].
pub fn to_json_pretty<I>(tree: &LabelTree<I>) -> Result<String> {
    check_depth(tree)?;
    Ok(serde_json::to_string_pretty(&Outline::from_tree(tree))?)
}
