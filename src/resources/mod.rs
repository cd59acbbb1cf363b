//! Material-side resources touched by the lighting transitions.

pub mod keywords;
pub mod material;
pub mod version_tracker;

pub use keywords::MaterialKeywords;
pub use material::SharedMaterial;
pub use version_tracker::{ChangeTracker, MutGuard};
