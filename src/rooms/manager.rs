use glam::Vec4;

use crate::lighting::TransitionEngine;
use crate::rooms::RoomKey;
use crate::rooms::registry::RoomRegistry;
use crate::rooms::room::LightState;
use crate::rooms::visibility::VisibilityLevel;
use crate::scene::Scene;
use crate::settings::PropagationMode;

/// Emission tint used when the entered room's light is switched off.
pub const NEUTRAL_EMISSION_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Everything a room entry touches, borrowed for the duration of one call.
pub struct RoomContext<'a> {
    pub rooms: &'a RoomRegistry,
    pub scene: &'a mut Scene,
    pub transitions: &'a mut TransitionEngine,
}

/// Tracks which room the player is in and applies each entry to the scene.
///
/// # Entry protocol
///
/// [`enter_room`](Self::enter_room) is the only state transition:
///
/// 1. Entering the current room again does nothing at all.
/// 2. `previous = current; current = new`.
/// 3. The new room's propagation list is applied (see [`PropagationMode`]).
/// 4. An ambient override sets the base colour instantly and blends both
///    intensities toward the room's `ambient_intensity`.
/// 5. If the room has a light, the character emission blends toward the
///    room's colour (light on) or [`NEUTRAL_EMISSION_COLOR`] (light off).
///
/// [`start`](Self::start) hides every room, then enters the starting room
/// through the same protocol.
#[derive(Debug)]
pub struct RoomManager {
    starting_room: Option<RoomKey>,
    all_rooms: Vec<RoomKey>,

    current_room: Option<RoomKey>,
    previous_room: Option<RoomKey>,

    propagation: PropagationMode,
    neutral_emission: Vec4,
}

impl RoomManager {
    #[must_use]
    pub fn new(propagation: PropagationMode) -> Self {
        Self {
            starting_room: None,
            all_rooms: Vec::new(),
            current_room: None,
            previous_room: None,
            propagation,
            neutral_emission: NEUTRAL_EMISSION_COLOR,
        }
    }

    #[must_use]
    pub fn with_starting_room(mut self, room: RoomKey) -> Self {
        self.starting_room = Some(room);
        self
    }

    #[must_use]
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = RoomKey>) -> Self {
        self.all_rooms.extend(rooms);
        self
    }

    pub fn set_starting_room(&mut self, room: Option<RoomKey>) {
        self.starting_room = room;
    }

    pub fn register_room(&mut self, room: RoomKey) {
        self.all_rooms.push(room);
    }

    pub fn set_propagation(&mut self, propagation: PropagationMode) {
        self.propagation = propagation;
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Forces every registered room invisible, then enters the starting room.
    pub fn start(&mut self, ctx: &mut RoomContext<'_>) {
        if self.starting_room.is_none() {
            log::warn!("Starting room is not assigned!");
        }

        for &key in &self.all_rooms {
            if let Some(room) = ctx.rooms.get(key) {
                room.set_visibility(ctx.scene, VisibilityLevel::Invisible);
            }
        }

        self.enter_room(self.starting_room, ctx);
    }

    // ========================================================================
    // Room Entry Logic
    // ========================================================================

    /// Applies the entry protocol for `new_room`.
    ///
    /// `None` stands for an unassigned room reference; like any other key it
    /// is a no-op when it equals the current room.
    pub fn enter_room(&mut self, new_room: Option<RoomKey>, ctx: &mut RoomContext<'_>) {
        if new_room == self.current_room {
            return;
        }
        let Some(key) = new_room else {
            log::warn!("enter_room called without a room");
            return;
        };
        let Some(room) = ctx.rooms.get(key) else {
            log::warn!("enter_room: room {key:?} is not registered");
            return;
        };

        self.previous_room = self.current_room;
        self.current_room = Some(key);
        log::debug!("Entered room '{}' (id {})", room.name, room.id);

        // Update visibility of linked rooms
        match self.propagation {
            PropagationMode::Declared => {
                for info in &room.visible_from_here {
                    if let Some(target) = info.room.and_then(|k| ctx.rooms.get(k)) {
                        target.set_visibility(ctx.scene, info.visibility);
                    }
                }
            }
            PropagationMode::Literal => {
                let previous = self.previous_room.and_then(|k| ctx.rooms.get(k));
                for _ in &room.visible_from_here {
                    if let Some(previous) = previous {
                        previous.set_visibility(ctx.scene, VisibilityLevel::FullVisible);
                    }
                }
            }
        }

        // Adjust ambient lighting if room overrides it
        if room.override_ambient_light {
            ctx.scene
                .environment_mut()
                .set_ambient_color(room.ambient_light_color);
            ctx.transitions.set_ambient_intensity_smooth(
                ctx.scene,
                room.ambient_intensity,
                room.ambient_intensity,
            );
        }

        // Adjust character emission
        match room.light_state(ctx.scene) {
            LightState::Active => {
                ctx.transitions
                    .set_emission_color_smooth(ctx.scene, room.character_emission_color(), false);
            }
            LightState::Inactive => {
                ctx.transitions
                    .set_emission_color_smooth(ctx.scene, self.neutral_emission, false);
            }
            LightState::Missing => {}
        }
    }

    // ========================================================================
    // Public Accessors
    // ========================================================================

    #[must_use]
    pub fn current_room(&self) -> Option<RoomKey> {
        self.current_room
    }

    #[must_use]
    pub fn previous_room(&self) -> Option<RoomKey> {
        self.previous_room
    }

    #[must_use]
    pub fn starting_room(&self) -> Option<RoomKey> {
        self.starting_room
    }

    #[must_use]
    pub fn all_rooms(&self) -> &[RoomKey] {
        &self.all_rooms
    }

    #[must_use]
    pub fn propagation(&self) -> PropagationMode {
        self.propagation
    }

    /// Name of the room the player is in.
    #[must_use]
    pub fn character_location<'r>(&self, rooms: &'r RoomRegistry) -> Option<&'r str> {
        self.current_room
            .and_then(|k| rooms.get(k))
            .map(|room| room.name.as_str())
    }

    /// Id of the room the player is in.
    #[must_use]
    pub fn character_location_id(&self, rooms: &RoomRegistry) -> Option<i32> {
        self.current_room.and_then(|k| rooms.get(k)).map(|room| room.id)
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::new(PropagationMode::default())
    }
}
