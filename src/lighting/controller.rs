use glam::Vec4;

use crate::lighting::transition::{self, AmbientTransition, EmissionTransition, TaskStatus};
use crate::scene::{MaterialHandle, Scene};
use crate::settings::TransitionSettings;
use crate::utils::interner::{self, Symbol};

/// Drives the two smoothed lighting properties: scene ambient/reflection
/// intensity and the character material's emission colour.
///
/// Holds at most one task of each kind. Starting a task drops whatever task
/// of the same kind was in flight, so the last request always wins and a
/// superseded task never writes its final value.
///
/// The engine owns no scene state. Callers pass the [`Scene`] to every
/// method that reads or writes it, and call [`update`](Self::update) once
/// per frame.
pub struct TransitionEngine {
    settings: TransitionSettings,
    emission_property: Symbol,
    character_material: Option<MaterialHandle>,

    ambient: Option<AmbientTransition>,
    emission: Option<EmissionTransition>,
}

impl TransitionEngine {
    #[must_use]
    pub fn new(settings: TransitionSettings) -> Self {
        let emission_property = interner::intern(&settings.emission_property);
        Self {
            settings,
            emission_property,
            character_material: None,
            ambient: None,
            emission: None,
        }
    }

    #[must_use]
    pub fn with_material(mut self, material: MaterialHandle) -> Self {
        self.character_material = Some(material);
        self
    }

    pub fn set_character_material(&mut self, material: Option<MaterialHandle>) {
        self.character_material = material;
    }

    #[must_use]
    pub fn character_material(&self) -> Option<MaterialHandle> {
        self.character_material
    }

    #[must_use]
    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Starts blending ambient and reflection intensity toward the targets
    /// over `ambient_transition_duration`, replacing any blend in flight.
    pub fn set_ambient_intensity_smooth(
        &mut self,
        scene: &Scene,
        target_intensity: f32,
        target_reflection: f32,
    ) {
        if self.ambient.take().is_some() {
            log::trace!("ambient transition superseded");
        }

        self.ambient = Some(AmbientTransition::begin(
            scene,
            target_intensity,
            target_reflection,
            self.settings.ambient_transition_duration,
        ));
    }

    /// Starts blending the character emission toward
    /// `target_color * emission_intensity`, replacing any blend in flight.
    ///
    /// With `instant` the exact value is written to the material before this
    /// returns and no blend is left running. Without a live character
    /// material the request only cancels the previous blend.
    pub fn set_emission_color_smooth(&mut self, scene: &mut Scene, target_color: Vec4, instant: bool) {
        if self.emission.take().is_some() {
            log::trace!("emission transition superseded");
        }

        let Some(material) = self.character_material else {
            return;
        };

        if instant {
            transition::write_emission_now(
                scene,
                material,
                self.emission_property,
                &self.settings.emission_keyword,
                target_color,
                self.settings.emission_intensity,
            );
            return;
        }

        self.emission = EmissionTransition::begin(
            scene,
            material,
            self.emission_property,
            &self.settings.emission_keyword,
            target_color,
            self.settings.emission_intensity,
            self.settings.emission_transition_duration,
        );
    }

    /// Drops both tasks without writing their targets.
    pub fn cancel_all(&mut self) {
        self.ambient = None;
        self.emission = None;
    }

    // ========================================================================
    // Frame update
    // ========================================================================

    /// Resumes each live task once with the frame's elapsed seconds.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        if self
            .ambient
            .as_mut()
            .is_some_and(|task| task.resume(dt, scene) == TaskStatus::Finished)
        {
            self.ambient = None;
        }

        if self
            .emission
            .as_mut()
            .is_some_and(|task| task.resume(dt, scene) == TaskStatus::Finished)
        {
            self.emission = None;
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    #[must_use]
    pub fn is_ambient_transitioning(&self) -> bool {
        self.ambient.is_some()
    }

    #[must_use]
    pub fn is_emission_transitioning(&self) -> bool {
        self.emission.is_some()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.ambient.is_none() && self.emission.is_none()
    }

    /// `(intensity, reflection)` of the ambient blend in flight.
    #[must_use]
    pub fn ambient_target(&self) -> Option<(f32, f32)> {
        self.ambient.as_ref().map(AmbientTransition::target)
    }

    /// Final emission colour (already scaled) of the blend in flight.
    #[must_use]
    pub fn emission_target(&self) -> Option<Vec4> {
        self.emission.as_ref().map(EmissionTransition::final_color)
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new(TransitionSettings::default())
    }
}
