//! Constants for rendering accordions.
//!
//! Class and attribute names follow the Bootstrap 4 collapse/card markup
//! the taxonomy checklist is styled with.

/// Default prefix of header identifiers, prepended to the node id
pub const DEFAULT_HEADER_PREFIX: &str = "base-";

/// Default id of the element holding the flat checklist
pub const DEFAULT_MOUNT_ID: &str = "id_rapidwords";

// Classes
pub(crate) const CLASS_ACCORDION: &str = "accordion";
pub(crate) const CLASS_GROUP: &str = "card";
pub(crate) const CLASS_HEADER: &str = "card-header";
pub(crate) const CLASS_CHECK: &str = "form-check";
pub(crate) const CLASS_CHECK_INPUT: &str = "form-check-input";
pub(crate) const CLASS_CHECK_LABEL: &str = "form-check-label";
pub(crate) const CLASS_COLLAPSE: &str = "collapse";
pub(crate) const CLASS_SHOW: &str = "show";

// Attributes
pub(crate) const ATTR_ID: &str = "id";
pub(crate) const ATTR_CLASS: &str = "class";
pub(crate) const ATTR_DATA_TOGGLE: &str = "data-toggle";
pub(crate) const ATTR_DATA_TARGET: &str = "data-target";
pub(crate) const ATTR_DATA_PARENT: &str = "data-parent";
pub(crate) const ATTR_ARIA_EXPANDED: &str = "aria-expanded";
pub(crate) const ATTR_ARIA_CONTROLS: &str = "aria-controls";
pub(crate) const ATTR_ARIA_LABELLEDBY: &str = "aria-labelledby";

// Tags
pub(crate) const TAG_DIV: &str = "div";
pub(crate) const TAG_LABEL: &str = "label";
pub(crate) const TAG_INPUT: &str = "input";

/// Elements serialized without end tag
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];
