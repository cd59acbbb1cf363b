//! Walkthrough demo
//!
//! Loads a three-room level (hall, library, cellar), then walks the player
//! through it on a fixed 60 Hz clock. Room entries come from triggers, the
//! way a physics engine would report them.
//!
//! Run with `RUST_LOG=info cargo run -p walkthrough` (or `debug` to see
//! every tier change).

use roomlight::rooms::RoomTrigger;
use roomlight::{Engine, Level};

const LEVEL: &str = r#"{
    "settings": {
        "transitions": { "ambient_transition_duration": 1.5, "emission_transition_duration": 0.75 }
    },
    "starting_room": 1,
    "rooms": [
        {
            "name": "Hall", "id": 1, "is_central_hub": true,
            "emission": [255, 214, 170],
            "override_ambient_light": true,
            "ambient_light_color": [1.0, 0.95, 0.9, 1.0],
            "ambient_intensity": 1.0,
            "visible_from_here": [
                { "room": 1, "visibility": "FULL_VISIBLE" },
                { "room": 2, "visibility": "PARTIAL_VISIBLE" },
                { "room": 3, "visibility": "PARTIAL_VISIBLE" }
            ]
        },
        {
            "name": "Library", "id": 2,
            "emission": [120, 160, 255],
            "visible_from_here": [
                { "room": 1, "visibility": "PARTIAL_VISIBLE" },
                { "room": 2, "visibility": "FULL_VISIBLE" },
                { "room": 3, "visibility": "INVISIBLE" }
            ]
        },
        {
            "name": "Cellar", "id": 3, "light_on": false,
            "emission": [255, 60, 20],
            "override_ambient_light": true,
            "ambient_light_color": [0.2, 0.25, 0.4, 1.0],
            "ambient_intensity": 0.25,
            "visible_from_here": [
                { "room": 1, "visibility": "PARTIAL_VISIBLE" },
                { "room": 2, "visibility": "INVISIBLE" },
                { "room": 3, "visibility": "FULL_VISIBLE" }
            ]
        }
    ]
}"#;

const DT: f32 = 1.0 / 60.0;
const PLAYER: &str = "Player";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let level = Level::from_json(LEVEL)?;
    let triggers: Vec<RoomTrigger> = [1, 2, 3, 1]
        .iter()
        .filter_map(|&id| level.trigger_for(id))
        .collect();

    let mut engine = level.into_engine();
    engine.start();
    report(&engine);

    // Seconds spent in each room before walking on.
    let stays = [1.0, 0.4, 2.5, 2.0];

    for (trigger, stay) in triggers.iter().zip(stays) {
        trigger.on_trigger_enter(PLAYER, &mut engine);
        // Doorway jitter: the same boundary reported twice.
        trigger.on_trigger_enter(PLAYER, &mut engine);

        let frames = (stay / DT).round() as u32;
        for frame in 0..frames {
            engine.update(DT);
            if frame % 30 == 0 {
                report(&engine);
            }
        }
        report(&engine);
    }

    log::info!("Walkthrough finished after {} frames", engine.frame_count());
    Ok(())
}

fn report(engine: &Engine) {
    let env = engine.scene.environment();
    let emission = engine
        .transitions
        .character_material()
        .and_then(|h| engine.scene.material(h))
        .and_then(|m| m.color(&engine.transitions.settings().emission_property));

    let tiers: Vec<String> = engine
        .rooms
        .iter()
        .map(|(_, room)| match room.visibility(&engine.scene) {
            Some(level) => format!("{}={level:?}", room.name),
            None => format!("{}=?", room.name),
        })
        .collect();

    log::info!(
        "[{}] in {:<8} ambient={:.3} reflection={:.3} emission={} | {}",
        engine.frame_count(),
        engine.character_location().unwrap_or("-"),
        env.ambient_intensity,
        env.reflection_intensity,
        emission.map_or_else(|| "-".to_string(), |c| format!("{c:.3}")),
        tiers.join(" ")
    );
}
