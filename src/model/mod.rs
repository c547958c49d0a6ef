//! Data model for taxonomy trees.
//!
//! # Tree representation
//! Trees are represented by [LabelTree], which uses the arena pattern to
//! store [LabelNode]s referenced by [NodeIndex]. The root is synthetic; each
//! other node stands for one segment of a dotted label path.
//!
//! | Node kind | `text` | Created by |
//! |-----------|--------|------------|
//! | labelled  | set    | an input label ending at this path |
//! | synthetic | unset  | a deeper label whose ancestor was never listed |
//!
//! # Building trees
//! Trees are constructed by [LabelTreeBuilder], either in one call
//! ([LabelTreeBuilder::parse], [LabelTreeBuilder::parse_items]) or label by
//! label. Trees are immutable once finished.
//!
//! # Exporting trees
//! [Outline] gives a nested, serde-serializable view of a tree.

pub mod label_node;
pub mod label_tree;
pub mod outline;
pub mod tree_builder;

pub use label_node::LabelNode;
pub use label_tree::{LabelTree, NodeIndex, PreOrderIter, ROOT_INDEX};
pub use outline::Outline;
pub use tree_builder::{DEFAULT_ID_PREFIX, LabelTreeBuilder};
