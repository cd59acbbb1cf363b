//! Scene graph module
//!
//! The host-side collaborators the room system drives:
//! - Node: hierarchy plus an active flag (the `set_active` primitive)
//! - Scene: node storage, ambient environment, shared materials
//! - Environment: scene-wide ambient colour and intensities

pub mod environment;
pub mod node;
pub mod scene;

pub use environment::Environment;
pub use node::Node;
pub use scene::Scene;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MaterialHandle;
}
