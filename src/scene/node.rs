use crate::scene::NodeHandle;

/// A scene-graph node reduced to what room visibility needs.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: List of child node handles
///
/// # Activation
///
/// `active` is the node's own flag. A node is only effectively shown when
/// it and every ancestor are active; see
/// [`Scene::is_active_in_hierarchy`](crate::scene::Scene::is_active_in_hierarchy).
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,
    pub(crate) active: bool,
}

impl Node {
    /// Creates an active root node with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            active: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// The node's own active flag, ignoring ancestors.
    #[inline]
    #[must_use]
    pub fn active_self(&self) -> bool {
        self.active
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("Node")
    }
}
