//! Trait for surfaces an accordion is rendered into.
//!
//! The [RenderSurface] trait decouples the accordion walk in
//! [render](crate::render::render) from any concrete UI. The walk decides
//! *what* to emit and in which order; the surface decides how groups,
//! headers and content containers look.
//!
//! # Ownership of controls
//! Flat label items may embed an interactive control (a checkbox). The
//! surface owns items and controls. During rendering each control is
//! detached from its item with [detach_control](RenderSurface::detach_control)
//! and handed back, by value, to
//! [append_header](RenderSurface::append_header). Controls are moved, never
//! recreated, so whatever is bound to them keeps working.
//!
//! # Render lifecycle
//! ```text
//! label_items() ──→ parse ──→ prepare_mount() ──→ for each node:
//!     append_group() ──→ detach_control() ──→ append_header()
//!       ──→ append_content() ──→ [append_nested() ──→ children ...]
//! ```
//!
//! See [Document](crate::render::Document) for the in-memory implementation.

/// Header emitted for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec<'a> {
    /// Id of the header's toggle, e.g. `"base-rw-3-2"`
    pub header_id: &'a str,
    /// Id of the content container the toggle expands, e.g. `"rw-3-2"`
    pub target_id: &'a str,
    /// Label text, or the full key for synthetic nodes
    pub text: &'a str,
    /// Whether the content starts out expanded
    pub expanded: bool,
}

/// Collapsible content container emitted for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSpec<'a> {
    /// Id of the container, e.g. `"rw-3-2"`
    pub id: &'a str,
    /// Id of the header labelling the container
    pub header_id: &'a str,
    /// Id of the enclosing container, if it has one
    pub parent_id: Option<&'a str>,
    /// Whether the content starts out expanded
    pub expanded: bool,
}

// =#========================================================================#=
// RENDER SURFACE (trait)
// =#========================================================================#=
/// Abstraction of the UI an accordion is built in.
///
/// # Implementing this trait
/// Handles are cheap references into surface-owned state (e.g. indices
/// into an arena). The render walk only holds handles it got from the
/// surface itself.
pub trait RenderSurface {
    /// Handle of a flat label item.
    type Item;

    /// A control detached from an item, owned by whoever holds it.
    type Control;

    /// Handle of a container that groups can be appended to.
    type Container;

    /// Returns the flat label items below `mount`, in document order,
    /// together with their text content.
    fn label_items(&self, mount: &Self::Container) -> Vec<(Self::Item, String)>;

    /// Returns the id of a container, if it has one.
    fn container_id(&self, container: &Self::Container) -> Option<String>;

    /// Returns `true` if `mount` was already marked as accordion root by
    /// [prepare_mount](RenderSurface::prepare_mount).
    ///
    /// The default assumes every mount still holds its flat items.
    fn is_accordion(&self, _mount: &Self::Container) -> bool {
        false
    }

    /// Removes the flat items from `mount` and marks it as accordion root.
    ///
    /// Removed items are no longer part of the mount but their controls
    /// must stay detachable.
    fn prepare_mount(&mut self, mount: &Self::Container);

    /// Detaches the control embedded in an item, if there is one.
    fn detach_control(&mut self, item: &Self::Item) -> Option<Self::Control>;

    /// Appends a new group below `parent` and returns it.
    fn append_group(&mut self, parent: &Self::Container) -> Self::Container;

    /// Appends the header of a group, taking ownership of `control`.
    fn append_header(&mut self, group: &Self::Container, header: &HeaderSpec<'_>, control: Option<Self::Control>);

    /// Appends the collapsible content container of a group and returns it.
    fn append_content(&mut self, group: &Self::Container, content: &ContentSpec<'_>) -> Self::Container;

    /// Appends the container holding child groups below a content container.
    fn append_nested(&mut self, content: &Self::Container) -> Self::Container;
}
