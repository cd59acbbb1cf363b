//! Engine Settings
//!
//! Timing and naming for the lighting transitions, and the rule used to
//! apply a room's propagation list.
//!
//! Every struct here deserialises with `#[serde(default)]`, so a level file
//! only needs to spell out what it changes:
//!
//! ```json
//! { "transitions": { "ambient_transition_duration": 0.5 }, "propagation": "literal" }
//! ```

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PropagationMode
// ---------------------------------------------------------------------------

/// How the entered room's `visible_from_here` list is applied.
///
/// | Mode | Effect per entry `(target, level)` |
/// |------|-------------------------------------|
/// | `Declared` | `target` is set to `level`; entries without a target are skipped |
/// | `Literal`  | the previous room (if any) is set to `FULL_VISIBLE`; target and level are ignored |
///
/// `Literal` reproduces scenes authored against the behaviour where the
/// declared tier was never read. New scenes should use `Declared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationMode {
    #[default]
    Declared,
    Literal,
}

// ---------------------------------------------------------------------------
// TransitionSettings
// ---------------------------------------------------------------------------

/// Timing and material naming for [`TransitionEngine`](crate::lighting::TransitionEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Seconds to blend ambient and reflection intensity.
    pub ambient_transition_duration: f32,
    /// Seconds to blend the character emission colour.
    pub emission_transition_duration: f32,
    /// Multiplier applied to every emission colour written to the material.
    pub emission_intensity: f32,
    /// Colour property on the shared material holding the emission.
    pub emission_property: String,
    /// Keyword that must be enabled for the emission to render.
    pub emission_keyword: String,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            ambient_transition_duration: 2.0,
            emission_transition_duration: 1.0,
            emission_intensity: 1.0,
            emission_property: "_EmissionColor".to_string(),
            emission_keyword: "_EMISSION".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// EngineSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub transitions: TransitionSettings,
    pub propagation: PropagationMode,
}
