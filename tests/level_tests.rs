//! Level Loading Integration Tests
//!
//! Tests for:
//! - JSON level parsing with defaults
//! - Scene subtree and material construction
//! - Id reference resolution and loader errors
//! - Settings carried into the built engine

use glam::Vec4;
use roomlight::rooms::{LightState, VisibilityLevel};
use roomlight::{Level, PropagationMode, RoomError};

const EPSILON: f32 = 1e-5;

fn approx_vec4(a: Vec4, b: Vec4) -> bool {
    (a - b).abs().max_element() < EPSILON
}

const TWO_ROOMS: &str = r#"{
    "starting_room": 1,
    "rooms": [
        {
            "name": "Hall",
            "id": 1,
            "is_central_hub": true,
            "emission": [255, 0, 0],
            "visible_from_here": [
                { "room": 1, "visibility": "FULL_VISIBLE" },
                { "room": 2, "visibility": "PARTIAL_VISIBLE" }
            ]
        },
        {
            "name": "Cellar",
            "id": 2,
            "light_on": false,
            "override_ambient_light": true,
            "ambient_light_color": [0.0, 0.0, 1.0, 1.0],
            "ambient_intensity": 0.3
        }
    ]
}"#;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn level_builds_rooms_and_nodes() {
    let level = Level::from_json(TWO_ROOMS).expect("level should load");

    assert_eq!(level.rooms.len(), 2);
    let hall = level.room(1).expect("hall");
    let room = &level.rooms[hall];
    assert_eq!(room.name, "Hall");
    assert!(room.is_central_hub);
    assert!(approx_vec4(room.character_emission_color(), Vec4::new(1.0, 0.0, 0.0, 1.0)));

    let structure = level.scene.find_by_name("Hall/Structure");
    let interior = level.scene.find_by_name("Hall/Interior");
    assert_eq!(room.partial_visible, structure);
    assert_eq!(room.fully_visible, interior);

    let root = level.scene.find_by_name("Hall").expect("room root");
    let parent = structure.and_then(|h| level.scene.get_node(h)).and_then(|n| n.parent());
    assert_eq!(parent, Some(root));
}

#[test]
fn level_light_state_from_description() {
    let level = Level::from_json(TWO_ROOMS).expect("level should load");
    let hall = level.room(1).expect("hall");
    let cellar = level.room(2).expect("cellar");

    assert_eq!(level.rooms[hall].light_state(&level.scene), LightState::Active);
    assert_eq!(level.rooms[cellar].light_state(&level.scene), LightState::Inactive);
}

#[test]
fn level_room_without_light() {
    let json = r#"{ "rooms": [ { "name": "Void", "id": 5, "has_light": false } ] }"#;
    let level = Level::from_json(json).expect("level should load");
    let void = level.room(5).expect("void");

    assert_eq!(level.rooms[void].light_state(&level.scene), LightState::Missing);
    assert!(level.scene.find_by_name("Void/Light").is_none());
}

#[test]
fn level_resolves_visibility_entries_by_id() {
    let level = Level::from_json(TWO_ROOMS).expect("level should load");
    let hall = level.room(1).expect("hall");
    let cellar = level.room(2).expect("cellar");

    let entries = &level.rooms[hall].visible_from_here;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].room, Some(cellar));
    assert_eq!(entries[1].visibility, VisibilityLevel::PartialVisible);
}

#[test]
fn level_creates_character_material() {
    let level = Level::from_json(TWO_ROOMS).expect("level should load");

    let handle = level.character_material.expect("material");
    assert_eq!(level.transitions.character_material(), Some(handle));
    assert_eq!(level.scene.material(handle).map(|m| m.name.as_str()), Some("Character"));
}

#[test]
fn level_without_character_material() {
    let json = r#"{ "character_material": null, "rooms": [] }"#;
    let level = Level::from_json(json).expect("level should load");

    assert!(level.character_material.is_none());
    assert!(level.transitions.character_material().is_none());
}

#[test]
fn level_settings_applied() {
    let json = r#"{
        "settings": {
            "propagation": "literal",
            "transitions": { "ambient_transition_duration": 0.5 }
        },
        "rooms": []
    }"#;
    let level = Level::from_json(json).expect("level should load");

    assert_eq!(level.manager.propagation(), PropagationMode::Literal);
    let transitions = level.transitions.settings();
    assert_eq!(transitions.ambient_transition_duration, 0.5);
    assert_eq!(transitions.emission_transition_duration, 1.0);
    assert_eq!(transitions.emission_property, "_EmissionColor");
}

#[test]
fn level_into_engine_starts_in_starting_room() {
    let mut engine = Level::from_json(TWO_ROOMS)
        .expect("level should load")
        .into_engine();
    engine.start();

    assert_eq!(engine.character_location(), Some("Hall"));
    assert_eq!(engine.character_location_id(), Some(1));
}

#[test]
fn level_trigger_links_room() {
    let level = Level::from_json(TWO_ROOMS).expect("level should load");

    let trigger = level.trigger_for(2).expect("trigger");
    assert_eq!(trigger.linked_room, level.room(2));
    assert!(level.trigger_for(42).is_none());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn level_rejects_invalid_json() {
    let result = Level::from_json("{ rooms: ");
    assert!(matches!(result, Err(RoomError::Json(_))));
}

#[test]
fn level_rejects_duplicate_id() {
    let json = r#"{ "rooms": [
        { "name": "A", "id": 1 },
        { "name": "B", "id": 1 }
    ] }"#;

    match Level::from_json(json) {
        Err(RoomError::DuplicateRoomId { id, first, second }) => {
            assert_eq!(id, 1);
            assert_eq!(first, "A");
            assert_eq!(second, "B");
        }
        other => panic!("expected DuplicateRoomId, got {:?}", other.err()),
    }
}

#[test]
fn level_rejects_unknown_reference() {
    let json = r#"{ "rooms": [
        { "name": "A", "id": 1,
          "visible_from_here": [ { "room": 9, "visibility": "INVISIBLE" } ] }
    ] }"#;

    assert!(matches!(
        Level::from_json(json),
        Err(RoomError::UnknownRoomReference { target: 9, .. })
    ));
}

#[test]
fn level_rejects_unknown_starting_room() {
    let json = r#"{ "starting_room": 3, "rooms": [ { "name": "A", "id": 1 } ] }"#;

    assert!(matches!(
        Level::from_json(json),
        Err(RoomError::UnknownStartingRoom(3))
    ));
}
