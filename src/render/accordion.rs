//! Rendering a [LabelTree] as nested collapsible groups.

use crate::model::{LabelTree, LabelTreeBuilder, NodeIndex, ROOT_INDEX};
use crate::render::config::RenderConfig;
use crate::render::surface::{ContentSpec, HeaderSpec, RenderSurface};
use tracing::{debug, trace, warn};

/// Open group level of the render walk.
struct Level<'t, C> {
    /// Children of the level's node still to be rendered
    children: std::slice::Iter<'t, NodeIndex>,
    /// Container the children go into, `None` for the mount
    container: Option<C>,
    /// Id of that container
    container_id: Option<String>,
}

/// Renders a tree into `mount`, replacing the flat label items there.
///
/// For each top-level node, in first-appearance order, a group is
/// appended holding a header and a collapsible content container; child
/// nodes are rendered into a nested container inside the content. Each
/// node's control is detached from its original item and moved into the
/// node's header.
///
/// The walk uses an explicit stack, so label depth is not bounded by the
/// call stack. Nothing here can fail; an empty tree leaves an empty mount.
pub fn render<S: RenderSurface>(tree: &LabelTree<S::Item>, surface: &mut S, mount: &S::Container, config: &RenderConfig) {
    surface.prepare_mount(mount);
    let mut stack = vec![Level {
        children: tree[ROOT_INDEX].children().iter(),
        container: None,
        container_id: surface.container_id(mount),
    }];

    while let Some(level) = stack.last_mut() {
        let Some(&index) = level.children.next() else {
            stack.pop();
            continue;
        };

        let node = &tree[index];
        let id = tree.node_id(index);
        let header_id = config.header_id(&id);
        trace!(full_key = node.full_key(), id = %id, "rendering group");

        let group = surface.append_group(level.container.as_ref().unwrap_or(mount));

        let control = node.source_item().and_then(|item| surface.detach_control(item));
        let header = HeaderSpec {
            header_id: &header_id,
            target_id: &id,
            text: node.display_text(),
            expanded: config.expanded(),
        };
        surface.append_header(&group, &header, control);

        let content = ContentSpec {
            id: &id,
            header_id: &header_id,
            parent_id: level.container_id.as_deref(),
            expanded: config.expanded(),
        };
        let content = surface.append_content(&group, &content);

        if !node.is_leaf() {
            let nested = surface.append_nested(&content);
            stack.push(Level {
                children: node.children().iter(),
                container: Some(nested),
                container_id: Some(id.into_owned()),
            });
        }
    }
    debug!(groups = tree.num_nodes(), "rendered accordion");
}

/// Rebuilds the flat checklist below `mount` as an accordion.
///
/// Collects the label items below `mount`, parses them into a fresh tree
/// with the configured id prefix and renders that tree in place.
///
/// A mount that already holds an accordion is left untouched, since its
/// flat items are gone; an empty tree is returned in that case.
///
/// # Returns
/// The tree that was rendered.
pub fn rebuild<S: RenderSurface>(surface: &mut S, mount: &S::Container, config: &RenderConfig) -> LabelTree<S::Item> {
    if surface.is_accordion(mount) {
        warn!("mount already holds an accordion; skipping rebuild");
        return LabelTreeBuilder::new().with_id_prefix(config.id_prefix()).finish();
    }

    let items = surface.label_items(mount);
    debug!(items = items.len(), "collected label items");

    let mut builder = LabelTreeBuilder::with_capacity(items.len()).with_id_prefix(config.id_prefix());
    for (item, text) in items {
        builder.add_item(&text, Some(item));
    }
    let tree = builder.finish();

    render(&tree, surface, mount, config);
    tree
}
