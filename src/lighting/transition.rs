//! Resumable interpolation tasks.
//!
//! Each task is the state of one in-flight blend. The owner calls
//! [`resume`](AmbientTransition::resume) once per frame with the frame's
//! elapsed time; the task writes its interpolated value and reports whether
//! it is still running. Every task follows the same two-step shape:
//!
//! 1. While `elapsed < duration`: advance `elapsed` by `dt`, write
//!    `lerp(start, target, elapsed / duration)` and suspend.
//! 2. On the first resumption after that: write the exact target and finish.
//!
//! Step 2 is what removes the drift left by frame-time quantisation. A task
//! dropped before step 2 never writes its target.
//!
//! Instant emission requests never become a task; see
//! [`write_emission_now`].

use glam::Vec4;

use crate::scene::{MaterialHandle, Scene};
use crate::utils::interner::Symbol;

/// Result of resuming a task for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Running,
    Finished,
}

/// Blend parameter for `elapsed` seconds into a `duration`, clamped to
/// `[0, 1]` as the host's lerp clamps it.
#[inline]
fn progress(elapsed: f32, duration: f32) -> f32 {
    (elapsed / duration).clamp(0.0, 1.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ============================================================================
// Ambient
// ============================================================================

/// Blends ambient and reflection intensity toward a target.
#[derive(Debug, Clone)]
pub struct AmbientTransition {
    start_intensity: f32,
    start_reflection: f32,
    target_intensity: f32,
    target_reflection: f32,
    duration: f32,
    elapsed: f32,
}

impl AmbientTransition {
    /// Captures the live intensities as the start of the blend.
    #[must_use]
    pub fn begin(scene: &Scene, target_intensity: f32, target_reflection: f32, duration: f32) -> Self {
        let env = scene.environment();
        Self {
            start_intensity: env.ambient_intensity,
            start_reflection: env.reflection_intensity,
            target_intensity,
            target_reflection,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn resume(&mut self, dt: f32, scene: &mut Scene) -> TaskStatus {
        if self.elapsed < self.duration {
            self.elapsed += dt;
            let t = progress(self.elapsed, self.duration);

            let intensity = lerp(self.start_intensity, self.target_intensity, t);
            let reflection = lerp(self.start_reflection, self.target_reflection, t);
            scene.environment_mut().set_intensities(intensity, reflection);
            log::trace!("ambient t={t:.3} intensity={intensity:.4} reflection={reflection:.4}");

            return TaskStatus::Running;
        }

        scene
            .environment_mut()
            .set_intensities(self.target_intensity, self.target_reflection);
        TaskStatus::Finished
    }

    #[must_use]
    pub fn target(&self) -> (f32, f32) {
        (self.target_intensity, self.target_reflection)
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Blends a shared material's emission colour toward `target * intensity`.
#[derive(Debug, Clone)]
pub struct EmissionTransition {
    material: MaterialHandle,
    property: Symbol,
    start: Vec4,
    target: Vec4,
    intensity: f32,
    duration: f32,
    elapsed: f32,
}

impl EmissionTransition {
    /// Enables the emission keyword and captures the current colour.
    ///
    /// Returns `None` when the material handle is stale.
    pub fn begin(
        scene: &mut Scene,
        material: MaterialHandle,
        property: Symbol,
        keyword: &str,
        target: Vec4,
        intensity: f32,
        duration: f32,
    ) -> Option<Self> {
        let mat = scene.material_mut(material)?;
        mat.enable_keyword(keyword);
        let start = mat.color_symbol(property).unwrap_or(Vec4::ZERO);

        Some(Self {
            material,
            property,
            start,
            target,
            intensity,
            duration,
            elapsed: 0.0,
        })
    }

    pub fn resume(&mut self, dt: f32, scene: &mut Scene) -> TaskStatus {
        let Some(mat) = scene.material_mut(self.material) else {
            // Material removed mid-blend: nothing left to write to.
            return TaskStatus::Finished;
        };

        if self.elapsed < self.duration {
            self.elapsed += dt;
            let t = progress(self.elapsed, self.duration);

            let color = self.start.lerp(self.target, t) * self.intensity;
            mat.set_color_symbol(self.property, color);
            log::trace!("emission t={t:.3} color={color}");

            return TaskStatus::Running;
        }

        mat.set_color_symbol(self.property, self.final_color());
        TaskStatus::Finished
    }

    /// The exact value written when the blend completes.
    #[must_use]
    pub fn final_color(&self) -> Vec4 {
        self.target * self.intensity
    }
}

/// Enables the emission keyword and writes `target * intensity` at once.
///
/// Returns `false` when the material handle is stale.
pub fn write_emission_now(
    scene: &mut Scene,
    material: MaterialHandle,
    property: Symbol,
    keyword: &str,
    target: Vec4,
    intensity: f32,
) -> bool {
    let Some(mat) = scene.material_mut(material) else {
        return false;
    };
    mat.enable_keyword(keyword);
    mat.set_color_symbol(property, target * intensity);
    true
}
