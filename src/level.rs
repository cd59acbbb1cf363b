//! Level Descriptions
//!
//! A level file is the authored data for one scene: its rooms, how they
//! reference each other by id, the starting room and optional engine
//! settings. Loading it builds the scene subtrees each room controls, the
//! character material, the [`RoomRegistry`] and a wired [`RoomManager`].
//!
//! ```json
//! {
//!   "starting_room": 1,
//!   "rooms": [
//!     { "name": "Hall", "id": 1, "emission": [255, 180, 120],
//!       "visible_from_here": [ { "room": 1, "visibility": "FULL_VISIBLE" },
//!                              { "room": 2, "visibility": "PARTIAL_VISIBLE" } ] },
//!     { "name": "Cellar", "id": 2, "light_on": false,
//!       "override_ambient_light": true, "ambient_light_color": [0.1, 0.1, 0.3, 1.0],
//!       "ambient_intensity": 0.3 }
//!   ]
//! }
//! ```
//!
//! Each room gets a root node named after it with `<name>/Structure`,
//! `<name>/Interior` and (when `has_light`) `<name>/Light` children.

use glam::Vec4;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::errors::{Result, RoomError};
use crate::lighting::TransitionEngine;
use crate::resources::SharedMaterial;
use crate::rooms::{
    Room, RoomKey, RoomManager, RoomRegistry, RoomTrigger, RoomVisibilityInfo, VisibilityLevel,
};
use crate::scene::{MaterialHandle, Node, Scene};
use crate::settings::EngineSettings;

// ============================================================================
// Serialized form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    /// Id of the target room.
    pub room: i32,
    pub visibility: VisibilityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDescription {
    pub name: String,
    pub id: i32,
    pub is_central_hub: bool,

    /// Whether the room has a main light node at all.
    pub has_light: bool,
    /// Initial state of that light.
    pub light_on: bool,

    pub visible_from_here: Vec<VisibilityEntry>,

    pub override_ambient_light: bool,
    pub ambient_light_color: Vec4,
    pub ambient_intensity: f32,

    /// Character emission tint, 0-255 per channel.
    pub emission: [f32; 3],
}

impl Default for RoomDescription {
    fn default() -> Self {
        Self {
            name: "Room".to_string(),
            id: 0,
            is_central_hub: false,
            has_light: true,
            light_on: true,
            visible_from_here: Vec::new(),
            override_ambient_light: false,
            ambient_light_color: Vec4::ONE,
            ambient_intensity: 1.0,
            emission: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelDescription {
    pub settings: EngineSettings,
    pub starting_room: Option<i32>,
    /// Name of the shared character material; `None` builds a level
    /// without one (emission requests then do nothing).
    pub character_material: Option<String>,
    pub rooms: Vec<RoomDescription>,
}

impl Default for LevelDescription {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            starting_room: None,
            character_material: Some("Character".to_string()),
            rooms: Vec::new(),
        }
    }
}

// ============================================================================
// Built level
// ============================================================================

/// A loaded level, ready to be turned into an [`Engine`].
pub struct Level {
    pub scene: Scene,
    pub rooms: RoomRegistry,
    pub manager: RoomManager,
    pub transitions: TransitionEngine,
    pub character_material: Option<MaterialHandle>,
    ids: FxHashMap<i32, RoomKey>,
}

impl Level {
    pub fn from_json(json: &str) -> Result<Self> {
        let description: LevelDescription = serde_json::from_str(json)?;
        Self::from_description(&description)
    }

    pub fn from_description(description: &LevelDescription) -> Result<Self> {
        let mut scene = Scene::new();
        let mut rooms = RoomRegistry::new();
        let mut ids: FxHashMap<i32, RoomKey> = FxHashMap::default();

        // Pass 1: nodes and rooms
        for desc in &description.rooms {
            if let Some(&existing) = ids.get(&desc.id) {
                return Err(RoomError::DuplicateRoomId {
                    id: desc.id,
                    first: rooms[existing].name.clone(),
                    second: desc.name.clone(),
                });
            }

            let room = build_room(&mut scene, desc);
            let key = rooms.insert(room);
            ids.insert(desc.id, key);
        }

        // Pass 2: propagation lists
        for desc in &description.rooms {
            let mut list = Vec::with_capacity(desc.visible_from_here.len());
            for entry in &desc.visible_from_here {
                let target = ids.get(&entry.room).copied().ok_or_else(|| {
                    RoomError::UnknownRoomReference {
                        room: desc.name.clone(),
                        target: entry.room,
                    }
                })?;
                list.push(RoomVisibilityInfo::new(target, entry.visibility));
            }

            let key = ids[&desc.id];
            if let Some(room) = rooms.get_mut(key) {
                room.visible_from_here = list;
                room.validate(&scene);
            }
        }

        let starting_room = match description.starting_room {
            Some(id) => Some(
                ids.get(&id)
                    .copied()
                    .ok_or(RoomError::UnknownStartingRoom(id))?,
            ),
            None => None,
        };

        let character_material = description
            .character_material
            .as_deref()
            .map(|name| scene.add_material(SharedMaterial::new(name)));

        let mut manager = RoomManager::new(description.settings.propagation)
            .with_rooms(description.rooms.iter().map(|desc| ids[&desc.id]));
        manager.set_starting_room(starting_room);

        let mut transitions = TransitionEngine::new(description.settings.transitions.clone());
        transitions.set_character_material(character_material);

        log::info!(
            "Loaded level: {} rooms, starting room {:?}",
            rooms.len(),
            description.starting_room
        );

        Ok(Self {
            scene,
            rooms,
            manager,
            transitions,
            character_material,
            ids,
        })
    }

    /// Key of the room with the given id.
    #[must_use]
    pub fn room(&self, id: i32) -> Option<RoomKey> {
        self.ids.get(&id).copied()
    }

    /// A trigger linked to the room with the given id.
    #[must_use]
    pub fn trigger_for(&self, id: i32) -> Option<RoomTrigger> {
        self.room(id).map(RoomTrigger::new)
    }

    #[must_use]
    pub fn into_engine(self) -> Engine {
        Engine::from_parts(self.scene, self.rooms, self.manager, self.transitions)
    }
}

fn build_room(scene: &mut Scene, desc: &RoomDescription) -> Room {
    let root = scene.create_node(&desc.name);
    let structure = scene.add_to_parent(Node::new(&format!("{}/Structure", desc.name)), root);
    let interior = scene.add_to_parent(Node::new(&format!("{}/Interior", desc.name)), root);

    let mut room = Room::new(&desc.name, desc.id).with_subtrees(structure, interior);
    room.is_central_hub = desc.is_central_hub;

    if desc.has_light {
        let light = scene.add_to_parent(Node::new(&format!("{}/Light", desc.name)), root);
        scene.set_active(light, desc.light_on);
        room.room_light = Some(light);
    }

    if desc.override_ambient_light {
        room = room.with_ambient_override(desc.ambient_light_color, desc.ambient_intensity);
    } else {
        room.ambient_light_color = desc.ambient_light_color;
        room.ambient_intensity = desc.ambient_intensity;
    }

    let [r, g, b] = desc.emission;
    room.set_emission_channels(r, g, b);
    room
}
