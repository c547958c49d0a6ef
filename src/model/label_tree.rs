//! Hierarchical taxonomy tree reconstructed from dotted labels.
//!
//! Provides:
//! * [`LabelTree<I>`] - the tree, stored in an arena of [LabelNode]s
//! * [NodeIndex] - the type used to index nodes in a tree
//! * [PreOrderIter] - depth-first traversal in first-appearance order

use crate::model::label_node::LabelNode;
use crate::parser::label_grammar::{join_key, key_to_id, parent_key};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// Index of the synthetic root; it is always the first node in the arena.
pub const ROOT_INDEX: NodeIndex = 0;

// =#========================================================================#=
// LABEL TREE
// =#========================================================================#=
/// A taxonomy tree represented using the arena pattern on [LabelNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex];
/// a map from full key to index allows direct lookups.
///
/// Generic over `I`, the handle of the element each label came from
/// (use `()` when labels are plain strings).
///
/// # Structure
/// - The root is synthetic, has an empty key and sits at [ROOT_INDEX].
/// - Every other node is reachable from the root by its dotted `full_key`.
/// - Children are kept in the order their key first appeared in the input.
/// - Ancestors missing from the input exist as nodes without text.
///
/// # Construction
/// Trees are built by [LabelTreeBuilder](crate::model::LabelTreeBuilder) and
/// are not mutated afterwards. Test consistency with [`LabelTree::is_valid()`].
#[derive(Debug, Clone)]
pub struct LabelTree<I = ()> {
    /// Nodes of this tree (arena pattern), root first
    nodes: Vec<LabelNode<I>>,

    /// Map from full key to node index, root excluded
    lookup: HashMap<String, NodeIndex>,

    /// Prefix of node identifiers, e.g. `"rw-"`
    id_prefix: String,
}

// ============================================================================
// New, Construction (crate)
// ============================================================================
impl<I> LabelTree<I> {
    /// Creates a tree holding only the synthetic root.
    pub(crate) fn with_capacity(num_labels: usize, id_prefix: String) -> Self {
        let mut nodes = Vec::with_capacity(num_labels + 1);
        nodes.push(LabelNode::new_root(ROOT_INDEX));
        LabelTree {
            nodes,
            lookup: HashMap::with_capacity(num_labels),
            id_prefix,
        }
    }

    /// Returns the child of `parent` with the given segment, creating a
    /// synthetic node if there is none yet.
    ///
    /// # Returns
    /// The index of the child and whether it was created.
    pub(crate) fn child_or_insert(&mut self, parent: NodeIndex, segment: &str) -> (NodeIndex, bool) {
        let full_key = self.child_key(parent, segment);
        if let Some(&index) = self.lookup.get(&full_key) {
            return (index, false);
        }

        let index = self.nodes.len();
        self.nodes.push(LabelNode::new_synthetic(index, parent, segment.to_string(), full_key.clone()));
        self.nodes[parent].push_child(index);
        self.lookup.insert(full_key, index);
        (index, true)
    }

    /// Sets the id prefix and regenerates the ids of labelled nodes.
    pub(crate) fn set_id_prefix(&mut self, id_prefix: String) {
        self.id_prefix = id_prefix;
        for node in &mut self.nodes[1..] {
            if node.has_label() {
                let id = key_to_id(&self.id_prefix, node.full_key());
                node.set_id(id);
            }
        }
    }

    /// Returns the full key of a child of `parent` with the given segment.
    fn child_key(&self, parent: NodeIndex, segment: &str) -> String {
        if parent == ROOT_INDEX {
            segment.to_string()
        } else {
            join_key(self.nodes[parent].full_key(), segment)
        }
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut LabelNode<I> {
        &mut self.nodes[index]
    }
}

// ============================================================================
// Getters / Accessors, Lookups (pub)
// ============================================================================
impl<I> LabelTree<I> {
    /// Returns a reference to the synthetic root.
    pub fn root(&self) -> &LabelNode<I> {
        &self.nodes[ROOT_INDEX]
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &LabelNode<I> {
        &self[index]
    }

    /// Returns the prefix used for node identifiers.
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    /// Returns the identifier of a node.
    ///
    /// Labelled nodes carry their id; synthetic ancestors get one derived
    /// the same way, so every rendered node can be addressed.
    pub fn node_id(&self, index: NodeIndex) -> Cow<'_, str> {
        match self[index].id() {
            Some(id) => Cow::Borrowed(id),
            None => Cow::Owned(key_to_id(&self.id_prefix, self[index].full_key())),
        }
    }

    /// Returns the node with the given full key, e.g. `"3.2.1"`.
    pub fn find(&self, full_key: &str) -> Option<&LabelNode<I>> {
        self.lookup.get(full_key).map(|&index| &self.nodes[index])
    }

    /// Returns the node for `full_key` if it carries a label, else the
    /// closest ancestor that does.
    ///
    /// The key is cut back at its last `.` until a labelled node turns up,
    /// so an over-specific or misspelled category resolves to the nearest
    /// one that exists.
    ///
    /// # Example
    /// ```
    /// use labeltree::model::LabelTreeBuilder;
    ///
    /// let tree = LabelTreeBuilder::parse(["3 Language", "3.2 Talk"]);
    /// assert_eq!(tree.nearest("3.2.9").unwrap().full_key(), "3.2");
    /// assert_eq!(tree.nearest("3.7").unwrap().full_key(), "3");
    /// assert!(tree.nearest("8.1").is_none());
    /// ```
    pub fn nearest(&self, full_key: &str) -> Option<&LabelNode<I>> {
        let mut candidate = Some(full_key);
        while let Some(key) = candidate {
            if let Some(node) = self.find(key).filter(|node| node.has_label()) {
                return Some(node);
            }
            candidate = parent_key(key);
        }
        None
    }

    /// Returns the parent of the given node, `None` for the root.
    pub fn parent(&self, index: NodeIndex) -> Option<&LabelNode<I>> {
        self[index].parent_index().map(|parent| &self.nodes[parent])
    }

    /// Returns an iterator over the children of the given node,
    /// in order of first appearance.
    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = &LabelNode<I>> {
        self[index].children().iter().map(move |&child| &self.nodes[child])
    }

    /// Returns an iterator over the top-level nodes.
    pub fn top_level(&self) -> impl Iterator<Item = &LabelNode<I>> {
        self.children(ROOT_INDEX)
    }

    /// Returns the depth of a node; top-level nodes have depth 1, the root 0.
    pub fn depth(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = self[index].parent_index();
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent].parent_index();
        }
        depth
    }

    /// Returns the depth of the deepest node, 0 for an empty tree.
    pub fn max_depth(&self) -> usize {
        let mut depths = vec![0; self.nodes.len()];
        let mut max = 0;
        // Arena order puts parents before their children
        for node in &self.nodes[1..] {
            let depth = node.parent_index().map_or(0, |parent| depths[parent]) + 1;
            depths[node.index()] = depth;
            max = max.max(depth);
        }
        max
    }

    /// Returns the number of nodes, excluding the root.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns the number of nodes an input label terminates at.
    pub fn num_labels(&self) -> usize {
        self.nodes.iter().filter(|node| node.has_label()).count()
    }

    /// Returns `true` if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns the full keys of all nodes but the root, in pre-order.
    pub fn full_keys(&self) -> Vec<&str> {
        self.pre_order_iter().skip(1).map(|node| node.full_key()).collect()
    }

    /// Validates the structure and all index references.
    ///
    /// Checks:
    /// - The root sits at [ROOT_INDEX], has no parent and an empty key
    /// - All node indices match their position in the arena
    /// - Every child points back to its parent
    /// - Every full key is the parent's full key joined with the node's key
    /// - Sibling keys are unique and the lookup map agrees with the arena
    /// - Node ids are unique
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let root = self.root();
        if !root.is_root() || root.index() != ROOT_INDEX || !root.full_key().is_empty() {
            return false;
        }

        if self.lookup.len() != self.nodes.len() - 1 {
            return false;
        }

        let mut ids = HashSet::with_capacity(self.nodes.len());
        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            // Only the root lacks a parent
            if node.is_root() != (index == ROOT_INDEX) {
                return false;
            }

            if let Some(parent) = node.parent_index() {
                let Some(parent_node) = self.nodes.get(parent) else {
                    return false;
                };
                if !parent_node.children().contains(&index) {
                    return false;
                }
                if self.child_key(parent, node.key()) != node.full_key() {
                    return false;
                }
                if self.lookup.get(node.full_key()) != Some(&index) {
                    return false;
                }
            }

            let mut seen = Vec::with_capacity(node.children().len());
            for &child in node.children() {
                let Some(child_node) = self.nodes.get(child) else {
                    return false;
                };
                if child_node.parent_index() != Some(index) || seen.contains(&child_node.key()) {
                    return false;
                }
                seen.push(child_node.key());
            }

            if node.has_label() != node.id().is_some() {
                return false;
            }
            if index != ROOT_INDEX && !ids.insert(self.node_id(index)) {
                return false;
            }
        }

        true
    }

    /// Returns an iterator over the tree in pre-order (parents before children),
    /// starting at the root and following first-appearance order among siblings.
    ///
    /// # Example
    /// ```
    /// use labeltree::model::LabelTreeBuilder;
    ///
    /// let tree = LabelTreeBuilder::parse(["1 A", "2 B", "1.1 C"]);
    /// let keys: Vec<_> = tree.pre_order_iter().map(|n| n.full_key()).collect();
    /// assert_eq!(keys, vec!["", "1", "1.1", "2"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, I> {
        PreOrderIter::new(self)
    }
}

impl<I> std::ops::Index<NodeIndex> for LabelTree<I> {
    type Output = LabelNode<I>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// Uses an explicit stack, so deep taxonomies don't recurse.
pub struct PreOrderIter<'a, I> {
    tree: &'a LabelTree<I>,
    stack: Vec<NodeIndex>,
}

impl<'a, I> PreOrderIter<'a, I> {
    fn new(tree: &'a LabelTree<I>) -> Self {
        PreOrderIter {
            tree,
            stack: vec![ROOT_INDEX],
        }
    }
}

impl<'a, I> Iterator for PreOrderIter<'a, I> {
    type Item = &'a LabelNode<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children in reverse, so the first one is visited first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}
