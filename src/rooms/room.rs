use glam::Vec4;

use crate::rooms::RoomKey;
use crate::rooms::visibility::VisibilityLevel;
use crate::scene::{NodeHandle, Scene};

/// One entry of a room's propagation list: "when the player enters me,
/// `room` goes to `visibility`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomVisibilityInfo {
    /// Target room. `None` is an unassigned slot and is skipped.
    pub room: Option<RoomKey>,
    pub visibility: VisibilityLevel,
}

impl RoomVisibilityInfo {
    #[must_use]
    pub fn new(room: RoomKey, visibility: VisibilityLevel) -> Self {
        Self {
            room: Some(room),
            visibility,
        }
    }
}

/// State of a room's main light as read on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    /// No light wired, or its node was removed.
    Missing,
    Active,
    Inactive,
}

/// A spatial zone with its own visual subtrees and lighting configuration.
///
/// The room owns none of the nodes it points at; it only flips their active
/// flags. Lifetime of the subtrees belongs to the [`Scene`].
#[derive(Debug, Clone)]
pub struct Room {
    // === Metadata ===
    pub name: String,
    pub id: i32,
    /// Marks a hub whose doors should close on entry. Carried as data only.
    pub is_central_hub: bool,

    // === Visibility components ===
    /// Structure: lights, walls, floor and ceiling.
    pub partial_visible: Option<NodeHandle>,
    /// Interior: everything except lights and walls.
    pub fully_visible: Option<NodeHandle>,
    /// The room's main light. Read on entry, never toggled here.
    pub room_light: Option<NodeHandle>,

    pub visible_from_here: Vec<RoomVisibilityInfo>,

    // === Ambient override ===
    pub override_ambient_light: bool,
    pub ambient_light_color: Vec4,
    pub ambient_intensity: f32,

    // === Character emission (0-255 per channel) ===
    red: f32,
    green: f32,
    blue: f32,
    emission_color: Vec4,
}

impl Room {
    #[must_use]
    pub fn new(name: &str, id: i32) -> Self {
        Self {
            name: name.to_string(),
            id,
            is_central_hub: false,
            partial_visible: None,
            fully_visible: None,
            room_light: None,
            visible_from_here: Vec::new(),
            override_ambient_light: false,
            ambient_light_color: Vec4::ONE,
            ambient_intensity: 1.0,
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            emission_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    // -- Builders --

    #[must_use]
    pub fn with_subtrees(mut self, partial: NodeHandle, fully: NodeHandle) -> Self {
        self.partial_visible = Some(partial);
        self.fully_visible = Some(fully);
        self
    }

    #[must_use]
    pub fn with_light(mut self, light: NodeHandle) -> Self {
        self.room_light = Some(light);
        self
    }

    #[must_use]
    pub fn with_ambient_override(mut self, color: Vec4, intensity: f32) -> Self {
        self.override_ambient_light = true;
        self.ambient_light_color = color;
        self.ambient_intensity = intensity;
        self
    }

    #[must_use]
    pub fn with_emission(mut self, red: f32, green: f32, blue: f32) -> Self {
        self.set_emission_channels(red, green, blue);
        self
    }

    // ========================================================================
    // Configuration-time
    // ========================================================================

    /// Sets the emission channels (0-255) and recomputes the cached colour.
    pub fn set_emission_channels(&mut self, red: f32, green: f32, blue: f32) {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.normalize_emission();
    }

    /// Raw `(red, green, blue)` channels after clamping.
    #[must_use]
    pub fn emission_channels(&self) -> (f32, f32, f32) {
        (self.red, self.green, self.blue)
    }

    fn normalize_emission(&mut self) {
        self.red = self.red.clamp(0.0, 255.0);
        self.green = self.green.clamp(0.0, 255.0);
        self.blue = self.blue.clamp(0.0, 255.0);

        self.emission_color = Vec4::new(self.red / 255.0, self.green / 255.0, self.blue / 255.0, 1.0);
    }

    /// Re-normalises the emission colour and reports broken wiring.
    ///
    /// Returns the number of problems found. Nothing about the runtime
    /// wiring is changed; a broken room simply ignores
    /// [`set_visibility`](Self::set_visibility).
    pub fn validate(&mut self, scene: &Scene) -> usize {
        self.normalize_emission();

        let mut problems = 0;
        if !self.partial_visible.is_some_and(|h| scene.contains(h)) {
            log::warn!("{}: Missing reference to PartialVisible object.", self.name);
            problems += 1;
        }
        if !self.fully_visible.is_some_and(|h| scene.contains(h)) {
            log::warn!("{}: Missing reference to FullyVisible object.", self.name);
            problems += 1;
        }
        problems
    }

    // ========================================================================
    // Runtime
    // ========================================================================

    /// Switches the structure and interior subtrees to match `level`.
    ///
    /// Silently does nothing unless both subtrees are wired to live nodes.
    pub fn set_visibility(&self, scene: &mut Scene, level: VisibilityLevel) {
        let (Some(partial), Some(fully)) = (self.partial_visible, self.fully_visible) else {
            return;
        };
        if !scene.contains(partial) || !scene.contains(fully) {
            return;
        }

        let (structure, interior) = level.subtree_flags();
        scene.set_active(partial, structure);
        scene.set_active(fully, interior);
        log::debug!("Room '{}' -> {:?}", self.name, level);
    }

    /// Reads the current tier back from the subtree flags.
    ///
    /// `None` when the room is not fully wired or the flags form the one
    /// combination no tier produces (interior shown without structure).
    #[must_use]
    pub fn visibility(&self, scene: &Scene) -> Option<VisibilityLevel> {
        let structure = scene.is_active_self(self.partial_visible?)?;
        let interior = scene.is_active_self(self.fully_visible?)?;
        match (structure, interior) {
            (true, true) => Some(VisibilityLevel::FullVisible),
            (true, false) => Some(VisibilityLevel::PartialVisible),
            (false, false) => Some(VisibilityLevel::Invisible),
            (false, true) => None,
        }
    }

    #[must_use]
    pub fn light_state(&self, scene: &Scene) -> LightState {
        match self.room_light.and_then(|h| scene.is_active_self(h)) {
            Some(true) => LightState::Active,
            Some(false) => LightState::Inactive,
            None => LightState::Missing,
        }
    }

    // -- Accessors --

    #[inline]
    #[must_use]
    pub fn character_emission_color(&self) -> Vec4 {
        self.emission_color
    }
}
