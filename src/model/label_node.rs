//! Node type of a label tree.

use crate::model::label_tree::NodeIndex;

// =#========================================================================#=
// LABEL NODE
// =#========================================================================#=
/// One path segment of a taxonomy together with its subtree links.
///
/// A node either *terminates* an input label, in which case it carries the
/// label's `text` and optionally a handle to the element the label came
/// from, or it is a *synthetic* ancestor created because some input label
/// skipped intermediate levels.
///
/// Generic over `I`, the handle type of the element a label came from.
/// The tree only stores the handle; the element is owned by whatever render
/// surface produced it.
///
/// # Invariants
/// - `full_key` is the parent's `full_key` + `.` + `key`; top-level nodes
///   have `full_key == key`, the root has both empty
/// - `children` are unique by `key` and in order of first appearance
/// - `id` is set if and only if `text` is set
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode<I> {
    index: NodeIndex,
    parent: Option<NodeIndex>,
    key: String,
    full_key: String,
    id: Option<String>,
    text: Option<String>,
    source_item: Option<I>,
    children: Vec<NodeIndex>,
}

impl<I> LabelNode<I> {
    /// Creates the synthetic root.
    pub(crate) fn new_root(index: NodeIndex) -> Self {
        LabelNode {
            index,
            parent: None,
            key: String::new(),
            full_key: String::new(),
            id: None,
            text: None,
            source_item: None,
            children: Vec::new(),
        }
    }

    /// Creates a node without label data below `parent`.
    pub(crate) fn new_synthetic(index: NodeIndex, parent: NodeIndex, key: String, full_key: String) -> Self {
        LabelNode {
            index,
            parent: Some(parent),
            key,
            full_key,
            id: None,
            text: None,
            source_item: None,
            children: Vec::new(),
        }
    }

    /// Sets label data, replacing whatever an earlier label with the same
    /// key left behind. Returns `true` if something was replaced.
    pub(crate) fn assign(&mut self, text: String, id: String, source_item: Option<I>) -> bool {
        let replaced = self.text.is_some();
        self.text = Some(text);
        self.id = Some(id);
        self.source_item = source_item;
        replaced
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }

    /// Returns the arena index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the parent index, `None` for the root.
    pub fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the single path segment of this node, e.g. `"1"`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the dotted path from the root, e.g. `"3.2.1"`.
    pub fn full_key(&self) -> &str {
        &self.full_key
    }

    /// Returns the identifier, e.g. `"rw-3-2-1"`, if a label terminates here.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the original trimmed label, if a label terminates here.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the text to show for this node: its label, else its full key.
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.full_key)
    }

    /// Returns the handle of the element this node's label came from.
    pub fn source_item(&self) -> Option<&I> {
        self.source_item.as_ref()
    }

    /// Returns the child indices in order of first appearance.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns `true` if this is the synthetic root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if no child hangs below this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if an input label terminates at this node.
    pub fn has_label(&self) -> bool {
        self.text.is_some()
    }

    /// Returns `true` for ancestors created only to host deeper labels.
    pub fn is_synthetic(&self) -> bool {
        !self.is_root() && self.text.is_none()
    }
}
