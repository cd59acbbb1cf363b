//! Room visibility module
//!
//! - VisibilityLevel: the three visibility tiers
//! - Room: per-room wiring, propagation list and lighting configuration
//! - RoomRegistry: owner of all rooms, hands out [`RoomKey`]s
//! - RoomManager: current/previous room and the entry protocol
//! - RoomTrigger: boundary-crossing adapter

pub mod manager;
pub mod registry;
pub mod room;
pub mod trigger;
pub mod visibility;

pub use manager::{NEUTRAL_EMISSION_COLOR, RoomContext, RoomManager};
pub use registry::RoomRegistry;
pub use room::{LightState, Room, RoomVisibilityInfo};
pub use trigger::{RoomEntrySink, RoomTrigger};
pub use visibility::VisibilityLevel;

use slotmap::new_key_type;

new_key_type! {
    pub struct RoomKey;
}
