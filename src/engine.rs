//! Engine Core Module
//!
//! [`Engine`] bundles the scene, the room registry, the [`RoomManager`] and
//! the [`TransitionEngine`] and drives them from a host frame loop. It has
//! no window or physics of its own; the host feeds it room entries (usually
//! through a [`RoomTrigger`](crate::rooms::RoomTrigger)) and frame time.
//!
//! # Example
//!
//! ```rust,ignore
//! use roomlight::{Engine, Level};
//!
//! let mut engine = Level::from_json(json)?.into_engine();
//! engine.start();
//!
//! loop {
//!     // physics reports a boundary crossing:
//!     engine.enter_room(Some(room));
//!     engine.update(dt);
//! }
//! ```

use crate::lighting::TransitionEngine;
use crate::rooms::{RoomContext, RoomEntrySink, RoomKey, RoomManager, RoomRegistry};
use crate::scene::Scene;
use crate::settings::EngineSettings;
use crate::utils::time::Timer;

/// Single-threaded owner of all room and lighting state.
///
/// # Lifecycle
///
/// 1. Create with [`Engine::new`] (or load a [`Level`](crate::level::Level))
/// 2. Populate `scene`, `rooms` and `manager`
/// 3. Call [`Engine::start`] once
/// 4. Call [`Engine::update`] (or [`Engine::tick`]) every frame
pub struct Engine {
    pub scene: Scene,
    pub rooms: RoomRegistry,
    pub manager: RoomManager,
    pub transitions: TransitionEngine,

    timer: Timer,
    frame_count: u64,
}

impl Engine {
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        crate::utils::interner::preload_material_names();
        Self {
            scene: Scene::new(),
            rooms: RoomRegistry::new(),
            manager: RoomManager::new(settings.propagation),
            transitions: TransitionEngine::new(settings.transitions),
            timer: Timer::new(),
            frame_count: 0,
        }
    }

    /// Assembles an engine from parts built elsewhere.
    #[must_use]
    pub fn from_parts(
        scene: Scene,
        rooms: RoomRegistry,
        manager: RoomManager,
        transitions: TransitionEngine,
    ) -> Self {
        crate::utils::interner::preload_material_names();
        Self {
            scene,
            rooms,
            manager,
            transitions,
            timer: Timer::new(),
            frame_count: 0,
        }
    }

    /// Hides every room and enters the starting room.
    ///
    /// Also restarts the wall clock, so the first [`tick`](Self::tick)
    /// measures from here rather than from construction.
    pub fn start(&mut self) {
        self.timer = Timer::new();
        let Self {
            scene,
            rooms,
            manager,
            transitions,
            ..
        } = self;
        let mut ctx = RoomContext {
            rooms,
            scene,
            transitions,
        };
        manager.start(&mut ctx);
        log::info!(
            "Room system started in '{}'",
            self.manager.character_location(&self.rooms).unwrap_or("<none>")
        );
    }

    /// Applies the entry protocol for `room`.
    pub fn enter_room(&mut self, room: Option<RoomKey>) {
        let Self {
            scene,
            rooms,
            manager,
            transitions,
            ..
        } = self;
        let mut ctx = RoomContext {
            rooms,
            scene,
            transitions,
        };
        manager.enter_room(room, &mut ctx);
    }

    /// Advances both lighting transitions by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.transitions.update(dt, &mut self.scene);
        self.frame_count += 1;
    }

    /// Like [`update`](Self::update), with `dt` taken from the wall clock.
    pub fn tick(&mut self) {
        let dt = self.timer.tick();
        self.update(dt);
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn character_location(&self) -> Option<&str> {
        self.manager.character_location(&self.rooms)
    }

    #[must_use]
    pub fn character_location_id(&self) -> Option<i32> {
        self.manager.character_location_id(&self.rooms)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl RoomEntrySink for Engine {
    fn enter_room(&mut self, room: Option<RoomKey>) {
        Engine::enter_room(self, room);
    }
}
