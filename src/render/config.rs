//! Settings for building accordions.

use crate::model::DEFAULT_ID_PREFIX;
use crate::render::defs::DEFAULT_HEADER_PREFIX;

/// Configuration of a render pass.
///
/// Defaults reproduce the RapidWords checklist ids: nodes `rw-3-2-1`,
/// headers `base-rw-3-2-1`, all groups collapsed.
///
/// # Example
/// ```
/// use labeltree::render::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_id_prefix("sd-")
///     .with_expanded(true);
/// assert_eq!(config.header_id("sd-1-2"), "base-sd-1-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    id_prefix: String,
    header_prefix: String,
    expanded: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
            expanded: false,
        }
    }
}

impl RenderConfig {
    /// Sets the prefix of node identifiers used when the tree is built
    /// during [rebuild](crate::render::rebuild).
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Sets the prefix prepended to a node id to form its header id.
    pub fn with_header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_prefix = prefix.into();
        self
    }

    /// Sets whether groups start out expanded.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    pub fn header_prefix(&self) -> &str {
        &self.header_prefix
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the header id for a node id.
    pub fn header_id(&self, node_id: &str) -> String {
        format!("{}{}", self.header_prefix, node_id)
    }
}
