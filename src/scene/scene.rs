use slotmap::SlotMap;

use crate::resources::material::SharedMaterial;
use crate::resources::version_tracker::{ChangeTracker, MutGuard};
use crate::scene::environment::Environment;
use crate::scene::node::Node;
use crate::scene::{MaterialHandle, NodeHandle};

/// Host scene graph.
///
/// Stores the node hierarchy, the scene-wide ambient [`Environment`] and the
/// shared materials. Rooms only ever hold [`NodeHandle`]s into it; removing a
/// node makes every handle to it stale, and all accessors treat a stale
/// handle as "not wired" rather than panicking.
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub(crate) materials: SlotMap<MaterialHandle, SharedMaterial>,

    environment: Environment,
    environment_tracker: ChangeTracker,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            materials: SlotMap::with_key(),
            environment: Environment::new(),
            environment_tracker: ChangeTracker::new(),
        }
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Adds a node at the root of the scene.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Creates an empty, active root node.
    pub fn create_node(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::new(name))
    }

    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.add_node(child);
        self.attach(handle, parent);
        handle
    }

    /// Moves `child` under `parent`, detaching it from its old parent.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::error!("attach: stale node handle");
            return;
        }

        let old_parent = self.nodes[child].parent;
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    /// Removes a node and its whole subtree.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        let children = node.children.clone();
        let parent = node.parent;

        for child in children {
            self.remove_node(child);
        }

        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(p)
                && let Some(pos) = parent_node.children.iter().position(|&x| x == handle)
            {
                parent_node.children.remove(pos);
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(pos);
        }

        self.nodes.remove(handle);
    }

    #[must_use]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    /// Finds the first node with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.name == name).then_some(handle))
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Sets a node's own active flag.
    ///
    /// Returns `false` (and changes nothing) if the handle is stale.
    pub fn set_active(&mut self, handle: NodeHandle, active: bool) -> bool {
        match self.nodes.get_mut(handle) {
            Some(node) => {
                node.active = active;
                true
            }
            None => false,
        }
    }

    /// The node's own flag; `None` for a stale handle.
    #[must_use]
    pub fn is_active_self(&self, handle: NodeHandle) -> Option<bool> {
        self.nodes.get(handle).map(|n| n.active)
    }

    /// `true` only if the node and all of its ancestors are active.
    #[must_use]
    pub fn is_active_in_hierarchy(&self, handle: NodeHandle) -> bool {
        let mut cursor = Some(handle);
        while let Some(h) = cursor {
            match self.nodes.get(h) {
                Some(node) if node.active => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    // ========================================================================
    // Environment
    // ========================================================================

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access that bumps [`environment_version`](Self::environment_version)
    /// when the guard is dropped.
    pub fn environment_mut(&mut self) -> MutGuard<'_, Environment> {
        MutGuard::new(&mut self.environment, &mut self.environment_tracker)
    }

    #[must_use]
    pub fn environment_version(&self) -> u64 {
        self.environment_tracker.version()
    }

    // ========================================================================
    // Materials
    // ========================================================================

    pub fn add_material(&mut self, material: SharedMaterial) -> MaterialHandle {
        self.materials.insert(material)
    }

    pub fn remove_material(&mut self, handle: MaterialHandle) -> Option<SharedMaterial> {
        self.materials.remove(handle)
    }

    #[must_use]
    pub fn material(&self, handle: MaterialHandle) -> Option<&SharedMaterial> {
        self.materials.get(handle)
    }

    pub fn material_mut(&mut self, handle: MaterialHandle) -> Option<&mut SharedMaterial> {
        self.materials.get_mut(handle)
    }
}
