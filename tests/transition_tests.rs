//! Lighting Transition Integration Tests
//!
//! Tests for:
//! - Ambient intensity blending: interpolation, exact final snap
//! - Emission blending: keyword enable, start capture, intensity scaling
//! - Last caller wins for both kinds
//! - Missing or removed character material

use glam::Vec4;
use roomlight::scene::{MaterialHandle, Scene};
use roomlight::{SharedMaterial, TransitionEngine, TransitionSettings};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec4(a: Vec4, b: Vec4) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn settings(ambient: f32, emission: f32) -> TransitionSettings {
    TransitionSettings {
        ambient_transition_duration: ambient,
        emission_transition_duration: emission,
        ..TransitionSettings::default()
    }
}

fn scene_with_material() -> (Scene, MaterialHandle) {
    let mut scene = Scene::new();
    let material = scene.add_material(SharedMaterial::new("Character"));
    (scene, material)
}

fn emission(scene: &Scene, material: MaterialHandle) -> Option<Vec4> {
    scene.material(material).and_then(|m| m.color("_EmissionColor"))
}

// ============================================================================
// Ambient
// ============================================================================

#[test]
fn ambient_interpolates_linearly() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(2.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.0, 0.5);
    engine.update(0.5, &mut scene);

    let env = scene.environment();
    assert!(approx(env.ambient_intensity, 0.75));
    assert!(approx(env.reflection_intensity, 0.875));
    assert!(engine.is_ambient_transitioning());
}

#[test]
fn ambient_snaps_exactly_on_completion() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.3, 0.7);
    // Frame times that never sum exactly to the duration.
    for _ in 0..200 {
        engine.update(0.013, &mut scene);
    }

    let env = scene.environment();
    assert_eq!(env.ambient_intensity, 0.3);
    assert_eq!(env.reflection_intensity, 0.7);
    assert!(!engine.is_ambient_transitioning());
}

#[test]
fn ambient_snap_happens_one_frame_after_duration() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.0, 0.0);
    engine.update(1.0, &mut scene);
    assert!(engine.is_ambient_transitioning());

    engine.update(0.0, &mut scene);
    assert!(!engine.is_ambient_transitioning());
    assert_eq!(scene.environment().ambient_intensity, 0.0);
}

#[test]
fn ambient_long_frame_never_overshoots() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.5, 0.5);
    engine.update(5.0, &mut scene);

    assert!(approx(scene.environment().ambient_intensity, 0.5));
}

#[test]
fn ambient_zero_duration_snaps_on_first_update() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(0.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.2, 0.4);
    engine.update(0.016, &mut scene);

    assert_eq!(scene.environment().ambient_intensity, 0.2);
    assert!(engine.is_idle());
}

#[test]
fn ambient_last_caller_wins() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.0, 0.0);
    engine.set_ambient_intensity_smooth(&scene, 2.0, 3.0);

    let mut lowest = f32::MAX;
    while engine.is_ambient_transitioning() {
        engine.update(0.1, &mut scene);
        lowest = lowest.min(scene.environment().ambient_intensity);
    }

    // Never moved toward the superseded target.
    assert!(lowest >= 1.0);
    assert_eq!(scene.environment().ambient_intensity, 2.0);
    assert_eq!(scene.environment().reflection_intensity, 3.0);
}

#[test]
fn ambient_superseded_mid_blend_starts_from_live_value() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.0, 0.0);
    engine.update(0.5, &mut scene);
    engine.set_ambient_intensity_smooth(&scene, 1.0, 1.0);
    engine.update(0.5, &mut scene);

    // Second blend runs 0.5 -> 1.0 and is halfway.
    assert!(approx(scene.environment().ambient_intensity, 0.75));
    assert_eq!(engine.ambient_target(), Some((1.0, 1.0)));
}

#[test]
fn cancelled_ambient_never_writes_target() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.0, 0.0);
    engine.update(0.5, &mut scene);
    engine.cancel_all();
    engine.update(1.0, &mut scene);

    assert!(approx(scene.environment().ambient_intensity, 0.5));
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn emission_request_enables_keyword() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);

    let enabled = scene
        .material(material)
        .is_some_and(|m| m.is_keyword_enabled("_EMISSION"));
    assert!(enabled);
}

#[test]
fn emission_interpolates_from_current_color() {
    let (mut scene, material) = scene_with_material();
    if let Some(m) = scene.material_mut(material) {
        m.set_color("_EmissionColor", Vec4::new(0.0, 0.0, 1.0, 1.0));
    }
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    engine.set_emission_color_smooth(&mut scene, Vec4::new(1.0, 0.0, 0.0, 1.0), false);
    engine.update(0.5, &mut scene);

    let color = emission(&scene, material);
    assert!(color.is_some_and(|c| approx_vec4(c, Vec4::new(0.5, 0.0, 0.5, 1.0))));
}

#[test]
fn emission_unset_property_starts_from_zero() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);
    engine.update(0.25, &mut scene);

    let color = emission(&scene, material);
    assert!(color.is_some_and(|c| approx_vec4(c, Vec4::splat(0.25))));
}

#[test]
fn emission_snaps_exactly_scaled_target() {
    let (mut scene, material) = scene_with_material();
    let mut config = settings(1.0, 0.3);
    config.emission_intensity = 1.5;
    let mut engine = TransitionEngine::new(config).with_material(material);

    let target = Vec4::new(0.1, 0.2, 0.3, 1.0);
    engine.set_emission_color_smooth(&mut scene, target, false);
    for _ in 0..100 {
        engine.update(0.007, &mut scene);
    }

    assert_eq!(emission(&scene, material), Some(target * 1.5));
    assert!(!engine.is_emission_transitioning());
}

#[test]
fn emission_instant_writes_during_request() {
    let (mut scene, material) = scene_with_material();
    let mut config = settings(1.0, 10.0);
    config.emission_intensity = 2.0;
    let mut engine = TransitionEngine::new(config).with_material(material);

    let target = Vec4::new(0.2, 0.4, 0.6, 1.0);
    engine.set_emission_color_smooth(&mut scene, target, true);

    assert_eq!(emission(&scene, material), Some(target * 2.0));
    assert!(!engine.is_emission_transitioning());
    let enabled = scene
        .material(material)
        .is_some_and(|m| m.is_keyword_enabled("_EMISSION"));
    assert!(enabled);
}

#[test]
fn emission_instant_cancels_running_blend() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    let target = Vec4::new(0.0, 1.0, 0.0, 1.0);
    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);
    engine.update(0.5, &mut scene);
    engine.set_emission_color_smooth(&mut scene, target, true);
    engine.update(0.5, &mut scene);

    assert_eq!(emission(&scene, material), Some(target));
}

#[test]
fn emission_blend_after_instant_starts_from_instant_value() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);
    engine.set_emission_color_smooth(&mut scene, red, true);
    assert_eq!(emission(&scene, material), Some(red));

    engine.set_emission_color_smooth(&mut scene, blue, false);
    engine.update(0.5, &mut scene);

    let color = emission(&scene, material);
    assert!(color.is_some_and(|c| approx_vec4(c, Vec4::new(0.5, 0.0, 0.5, 1.0))));
}

#[test]
fn emission_last_caller_wins() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    let first = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let second = Vec4::new(0.0, 0.0, 1.0, 1.0);
    engine.set_emission_color_smooth(&mut scene, first, false);
    engine.set_emission_color_smooth(&mut scene, second, false);

    while engine.is_emission_transitioning() {
        engine.update(0.1, &mut scene);
        let red = emission(&scene, material).map_or(0.0, |c| c.x);
        assert_eq!(red, 0.0);
    }
    assert_eq!(emission(&scene, material), Some(second));
}

// ============================================================================
// Missing Material
// ============================================================================

#[test]
fn emission_without_material_is_noop() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);

    assert!(!engine.is_emission_transitioning());
    assert_eq!(engine.emission_target(), None);
}

#[test]
fn emission_without_material_does_not_block_ambient() {
    let mut scene = Scene::new();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0));

    engine.set_ambient_intensity_smooth(&scene, 0.5, 0.5);
    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);

    assert!(engine.is_ambient_transitioning());
}

#[test]
fn emission_request_without_material_cancels_previous() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);
    engine.set_character_material(None);
    engine.set_emission_color_smooth(&mut scene, Vec4::ZERO, false);

    assert!(!engine.is_emission_transitioning());
}

#[test]
fn emission_material_removed_mid_blend_finishes() {
    let (mut scene, material) = scene_with_material();
    let mut engine = TransitionEngine::new(settings(1.0, 1.0)).with_material(material);

    engine.set_emission_color_smooth(&mut scene, Vec4::ONE, false);
    engine.update(0.1, &mut scene);
    assert!(scene.remove_material(material).is_some());

    engine.update(0.1, &mut scene);
    assert!(!engine.is_emission_transitioning());
}
