//! Pocket Pets headless runner
//!
//! Drives a pet panel at a fixed size for a few simulated seconds and logs
//! what happens. Useful for eyeballing tuning changes:
//!
//! `RUST_LOG=debug pocket-pets [tuning.json] [settings.json]`

use std::process::ExitCode;

use pocket_pets::consts::TICKS_PER_SECOND;
use pocket_pets::{ConfigError, PanelSize, PetWorld, Settings, Tuning, WorldEvent};

const PANEL: PanelSize = PanelSize::new(480.0, 320.0);
const RUN_SECONDS: u32 = 20;
const THROW_EVERY_SECONDS: u32 = 5;

fn load_config() -> Result<(Tuning, Settings), ConfigError> {
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => Tuning::default(),
    };
    let settings = match args.next() {
        Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };
    Ok((tuning, settings))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pocket Pets (headless) starting...");

    let (tuning, settings) = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Bad configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = std::env::var("POCKET_PETS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut world = PetWorld::open(seed, &settings, tuning);
    world.tick(PANEL);
    world.spawn_pet(
        settings.pet_kind,
        settings.pet_color,
        settings.pet_size,
        "second",
    );

    let mut catches = 0;
    for frame in 0..RUN_SECONDS * TICKS_PER_SECOND {
        if frame % (THROW_EVERY_SECONDS * TICKS_PER_SECOND) == 0 {
            world.throw_ball(settings.pet_size);
        }
        for event in world.tick(PANEL) {
            match event {
                WorldEvent::BallCaught { pet, ball } => {
                    catches += 1;
                    log::info!("Frame {}: pet {} caught ball {}", frame, pet, ball);
                }
            }
        }
    }

    for pet in world.pets() {
        log::info!(
            "Pet {} '{}' at x={:.1} state={:?} sprite={}",
            pet.id,
            pet.name,
            pet.pos.x,
            pet.state,
            pocket_pets::assets::pet_sprite_key(pet)
        );
    }
    log::info!("{} catches in {} ticks", catches, world.time_ticks());

    world.teardown();
    ExitCode::SUCCESS
}
