//! Scene-wide ambient lighting block.

use glam::Vec4;

/// Ambient light settings shared by the whole scene.
///
/// `ambient_color` is switched instantly on room entry; the two intensity
/// scalars are the ones the ambient transition interpolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Base ambient light colour (linear RGBA)
    pub ambient_color: Vec4,
    /// Ambient light intensity multiplier
    pub ambient_intensity: f32,
    /// Multiplier on environment reflections
    pub reflection_intensity: f32,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ambient_color: Vec4::ONE,
            ambient_intensity: 1.0,
            reflection_intensity: 1.0,
        }
    }

    pub fn set_ambient_color(&mut self, color: Vec4) {
        self.ambient_color = color;
    }

    pub fn set_intensities(&mut self, ambient: f32, reflection: f32) {
        self.ambient_intensity = ambient;
        self.reflection_intensity = reflection;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
