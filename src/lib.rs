#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_arguments)]

pub mod engine;
pub mod errors;
pub mod level;
pub mod lighting;
pub mod resources;
pub mod rooms;
pub mod scene;
pub mod settings;
pub mod utils;

pub use engine::Engine;
pub use errors::{Result, RoomError};
pub use level::{Level, LevelDescription, RoomDescription, VisibilityEntry};
pub use lighting::{TaskStatus, TransitionEngine};
pub use resources::{MaterialKeywords, SharedMaterial};
pub use rooms::{
    LightState, NEUTRAL_EMISSION_COLOR, Room, RoomContext, RoomEntrySink, RoomKey, RoomManager,
    RoomRegistry, RoomTrigger, RoomVisibilityInfo, VisibilityLevel,
};
pub use scene::{Environment, MaterialHandle, Node, NodeHandle, Scene};
pub use settings::{EngineSettings, PropagationMode, TransitionSettings};
pub use utils::interner;
