//! In-memory element tree implementing [RenderSurface].
//!
//! [Document] is a minimal DOM: elements with attributes, text nodes and
//! parent links, stored in an arena and addressed by [ElementId]. Moving a
//! node keeps its [ElementId], which is how relocated controls keep their
//! identity. Detached nodes stay in the arena until the document is
//! dropped.

use crate::render::defs::{
    ATTR_ARIA_CONTROLS, ATTR_ARIA_EXPANDED, ATTR_ARIA_LABELLEDBY, ATTR_CLASS, ATTR_DATA_PARENT,
    ATTR_DATA_TARGET, ATTR_DATA_TOGGLE, ATTR_ID, CLASS_ACCORDION, CLASS_CHECK, CLASS_CHECK_INPUT,
    CLASS_CHECK_LABEL, CLASS_COLLAPSE, CLASS_GROUP, CLASS_HEADER, CLASS_SHOW, TAG_DIV, TAG_INPUT,
    TAG_LABEL,
};
use crate::render::surface::{ContentSpec, HeaderSpec, RenderSurface};

/// Index of a node in a [Document] (arena).
pub type ElementId = usize;

/// Content of a document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNodeKind {
    /// Element with tag name and attributes in insertion order
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    /// Text content
    Text(String),
}

/// A node of a [Document].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    parent: Option<ElementId>,
    kind: DomNodeKind,
    children: Vec<ElementId>,
}

impl DomNode {
    pub fn kind(&self) -> &DomNodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

// =#========================================================================#=
// DOCUMENT
// =#========================================================================#=
/// Arena-backed element tree.
///
/// # Example
/// ```
/// use labeltree::render::Document;
///
/// let mut doc = Document::new();
/// let div = doc.create_element("div");
/// let text = doc.create_text("Sky");
/// doc.append_child(div, text);
/// doc.set_attribute(div, "id", "rw-1-1");
/// assert_eq!(doc.text_content(div), "Sky");
/// assert_eq!(doc.find_by_id(div, "rw-1-1"), Some(div));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<DomNode>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a flat checklist, one checkbox label per taxonomy label.
    ///
    /// Produces the markup a form framework emits for a multiple-choice
    /// checkbox field:
    /// ```text
    /// <div id="id_rapidwords">
    ///   <div><label for="id_rapidwords_0"><input type="checkbox" name="rapidwords"
    ///        value="0" id="id_rapidwords_0"> 1 Universe</label></div>
    ///   ...
    /// ```
    ///
    /// # Returns
    /// The document and the id of the mount element.
    pub fn checklist<S: AsRef<str>>(mount_id: &str, labels: &[S]) -> (Document, ElementId) {
        let mut doc = Document::new();
        let mount = doc.create_element(TAG_DIV);
        doc.set_attribute(mount, ATTR_ID, mount_id);
        let name = mount_id.strip_prefix("id_").unwrap_or(mount_id).to_string();

        for (i, label) in labels.iter().enumerate() {
            let input_id = format!("{mount_id}_{i}");
            let wrapper = doc.create_element(TAG_DIV);
            let label_element = doc.create_element(TAG_LABEL);
            doc.set_attribute(label_element, "for", &input_id);

            let input = doc.create_element(TAG_INPUT);
            doc.set_attribute(input, "type", "checkbox");
            doc.set_attribute(input, "name", &name);
            doc.set_attribute(input, "value", &i.to_string());
            doc.set_attribute(input, ATTR_ID, &input_id);

            let text = doc.create_text(&format!(" {}", label.as_ref()));
            doc.append_child(label_element, input);
            doc.append_child(label_element, text);
            doc.append_child(wrapper, label_element);
            doc.append_child(mount, wrapper);
        }

        (doc, mount)
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.push(DomNodeKind::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
        })
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, text: &str) -> ElementId {
        self.push(DomNodeKind::Text(text.to_string()))
    }

    fn push(&mut self, kind: DomNodeKind) -> ElementId {
        let id = self.nodes.len();
        self.nodes.push(DomNode {
            parent: None,
            kind,
            children: Vec::new(),
        });
        id
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    pub fn node(&self, id: ElementId) -> &DomNode {
        &self.nodes[id]
    }

    /// Returns the number of nodes ever created, attached or not.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Appends `child` as last child of `parent`, moving it if it is
    /// attached elsewhere.
    ///
    /// # Panics
    /// Panics if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        assert!(!self.contains(child, parent), "cannot append a node into its own subtree");
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Removes a node from its parent; the node keeps its subtree.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|&child| child != id);
        }
    }

    /// Removes all children of a node and returns them.
    pub fn remove_children(&mut self, id: ElementId) -> Vec<ElementId> {
        let children = std::mem::take(&mut self.nodes[id].children);
        for &child in &children {
            self.nodes[child].parent = None;
        }
        children
    }

    /// Returns the parent of a node, `None` if detached.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes[id].parent
    }

    /// Returns the children of a node.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.nodes[id].children
    }

    /// Returns `true` if `descendant` is `ancestor` or lies below it.
    pub fn contains(&self, ancestor: ElementId, descendant: ElementId) -> bool {
        let mut current = Some(descendant);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id].parent;
        }
        false
    }

    /// Returns the tag name, `None` for text nodes.
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        match &self.nodes[id].kind {
            DomNodeKind::Element { tag, .. } => Some(tag.as_str()),
            DomNodeKind::Text(_) => None,
        }
    }

    /// Sets an attribute, replacing an earlier value. No-op on text nodes.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let DomNodeKind::Element { attributes, .. } = &mut self.nodes[id].kind {
            match attributes.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    /// Returns the value of an attribute.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        match &self.nodes[id].kind {
            DomNodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            DomNodeKind::Text(_) => None,
        }
    }

    /// Returns the attributes of an element in insertion order.
    pub fn attributes(&self, id: ElementId) -> &[(String, String)] {
        match &self.nodes[id].kind {
            DomNodeKind::Element { attributes, .. } => attributes.as_slice(),
            DomNodeKind::Text(_) => &[],
        }
    }

    /// Adds a class unless present.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let classes = match self.attribute(id, ATTR_CLASS) {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute(id, ATTR_CLASS, &classes);
    }

    /// Returns `true` if the element has the class.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.attribute(id, ATTR_CLASS)
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Returns the concatenated text of a node and its descendants.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut text = String::new();
        for node in self.descendants(id) {
            if let DomNodeKind::Text(t) = &self.nodes[node].kind {
                text.push_str(t);
            }
        }
        text
    }

    /// Returns a node and all its descendants in document order.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.nodes[current].children.iter().rev());
        }
        result
    }

    /// Returns the elements with the given tag below (and including) a node.
    pub fn descendants_by_tag(&self, id: ElementId, tag: &str) -> Vec<ElementId> {
        self.descendants(id)
            .into_iter()
            .filter(|&node| self.tag(node) == Some(tag))
            .collect()
    }

    /// Returns the first element below (and including) a node with the given id.
    pub fn find_by_id(&self, root: ElementId, element_id: &str) -> Option<ElementId> {
        self.descendants(root)
            .into_iter()
            .find(|&node| self.attribute(node, ATTR_ID) == Some(element_id))
    }

    /// Returns the element children of a node.
    pub fn element_children(&self, id: ElementId) -> Vec<ElementId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(|&child| self.tag(child).is_some())
            .collect()
    }

    fn append_element(&mut self, parent: ElementId, tag: &str, class: Option<&str>) -> ElementId {
        let element = self.create_element(tag);
        if let Some(class) = class {
            self.set_attribute(element, ATTR_CLASS, class);
        }
        self.append_child(parent, element);
        element
    }
}

// ============================================================================
// Render surface
// ============================================================================
impl RenderSurface for Document {
    type Item = ElementId;
    type Control = ElementId;
    type Container = ElementId;

    fn label_items(&self, mount: &ElementId) -> Vec<(ElementId, String)> {
        self.descendants_by_tag(*mount, TAG_LABEL)
            .into_iter()
            .map(|label| (label, self.text_content(label)))
            .collect()
    }

    fn container_id(&self, container: &ElementId) -> Option<String> {
        self.attribute(*container, ATTR_ID).map(str::to_string)
    }

    fn is_accordion(&self, mount: &ElementId) -> bool {
        self.has_class(*mount, CLASS_ACCORDION)
    }

    fn prepare_mount(&mut self, mount: &ElementId) {
        self.remove_children(*mount);
        self.add_class(*mount, CLASS_ACCORDION);
    }

    fn detach_control(&mut self, item: &ElementId) -> Option<ElementId> {
        let input = self.descendants_by_tag(*item, TAG_INPUT).into_iter().next()?;
        self.detach(input);
        Some(input)
    }

    fn append_group(&mut self, parent: &ElementId) -> ElementId {
        self.append_element(*parent, TAG_DIV, Some(CLASS_GROUP))
    }

    fn append_header(&mut self, group: &ElementId, header: &HeaderSpec<'_>, control: Option<ElementId>) {
        let base = self.append_element(*group, TAG_DIV, Some(CLASS_HEADER));
        let check = self.append_element(base, TAG_DIV, Some(CLASS_CHECK));

        if let Some(control) = control {
            self.add_class(control, CLASS_CHECK_INPUT);
            self.append_child(check, control);
        }

        let toggle = self.append_element(check, TAG_DIV, None);
        self.set_attribute(toggle, ATTR_ID, header.header_id);
        self.set_attribute(toggle, ATTR_CLASS, CLASS_CHECK_LABEL);
        self.set_attribute(toggle, ATTR_DATA_TOGGLE, CLASS_COLLAPSE);
        self.set_attribute(toggle, ATTR_DATA_TARGET, &format!("#{}", header.target_id));
        self.set_attribute(toggle, ATTR_ARIA_EXPANDED, if header.expanded { "true" } else { "false" });
        self.set_attribute(toggle, ATTR_ARIA_CONTROLS, header.target_id);
        let text = self.create_text(header.text);
        self.append_child(toggle, text);
    }

    fn append_content(&mut self, group: &ElementId, content: &ContentSpec<'_>) -> ElementId {
        let collapse = self.append_element(*group, TAG_DIV, Some(CLASS_COLLAPSE));
        if content.expanded {
            self.add_class(collapse, CLASS_SHOW);
        }
        self.set_attribute(collapse, ATTR_ID, content.id);
        self.set_attribute(collapse, ATTR_ARIA_LABELLEDBY, content.header_id);
        if let Some(parent_id) = content.parent_id {
            self.set_attribute(collapse, ATTR_DATA_PARENT, &format!("#{parent_id}"));
        }
        collapse
    }

    fn append_nested(&mut self, content: &ElementId) -> ElementId {
        self.append_element(*content, TAG_DIV, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child_moves_node() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let input = doc.create_element("input");
        doc.append_child(a, input);
        doc.append_child(b, input);
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[input]);
        assert_eq!(doc.parent(input), Some(b));
    }

    #[test]
    #[should_panic]
    fn test_append_into_own_subtree_panics() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner);
        doc.append_child(inner, outer);
    }

    #[test]
    fn test_classes() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.add_class(div, "card");
        doc.add_class(div, "card");
        doc.add_class(div, "show");
        assert_eq!(doc.attribute(div, "class"), Some("card show"));
        assert!(doc.has_class(div, "show"));
        assert!(!doc.has_class(div, "car"));
    }

    #[test]
    fn test_checklist_markup() {
        let (doc, mount) = Document::checklist("id_rapidwords", &["1 Universe", "1.1 Sky"]);
        let labels = doc.descendants_by_tag(mount, "label");
        assert_eq!(labels.len(), 2);
        assert_eq!(doc.text_content(labels[1]), " 1.1 Sky");

        let input = doc.descendants_by_tag(labels[1], "input")[0];
        assert_eq!(doc.attribute(input, "name"), Some("rapidwords"));
        assert_eq!(doc.attribute(input, "id"), Some("id_rapidwords_1"));
    }

    #[test]
    fn test_text_nodes_have_no_attributes() {
        let mut doc = Document::new();
        let text = doc.create_text("x");
        doc.set_attribute(text, "id", "y");
        assert_eq!(doc.attribute(text, "id"), None);
        assert_eq!(doc.tag(text), None);
    }
}
