//! Animodel inspector entry point.
//!
//! A headless tool for animated model descriptor files:
//! - validates a descriptor JSON and reports its states
//! - optionally simulates playback in an ECS world at a fixed step, logging
//!   every frame transition, so animation data can be checked without a
//!   renderer
//!
//! # Running
//!
//! ```sh
//! cargo run -- assets/hero.json --steps 240
//! cargo run -- assets/hero.json --validate
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bevy_ecs::prelude::*;
use clap::Parser;

use animodel::components::animatedmodel::AnimatedModel;
use animodel::components::mapposition::MapPosition;
use animodel::components::sprite::Sprite;
use animodel::resources::descriptorstore::DescriptorStore;
use animodel::resources::worldtime::WorldTime;
use animodel::systems::animation::animate_models;

/// Animated model descriptor inspector
#[derive(Parser)]
#[command(version, about = "Validate animated model descriptors and preview their playback headlessly")]
struct Cli {
    /// Path to a descriptor JSON file.
    descriptor: PathBuf,

    /// State to play (defaults to the descriptor's default state).
    #[arg(long, value_name = "NAME")]
    state: Option<String>,

    /// Number of simulation steps.
    #[arg(long, default_value_t = 120)]
    steps: u32,

    /// Seconds of animation time per step.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,

    /// Validate the descriptor and exit without simulating.
    #[arg(long)]
    validate: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut store = DescriptorStore::new();
    let descriptor = match store.load_json_file("inspect", &cli.descriptor) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut state_names: Vec<&str> = descriptor.state_names().collect();
    state_names.sort_unstable();
    log::info!("States: {}", state_names.join(", "));
    log::info!("Default state: {}", descriptor.default_state_name());

    if cli.validate {
        println!("{} is valid", cli.descriptor.display());
        return;
    }

    let mut model = match AnimatedModel::new(descriptor) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(state) = &cli.state {
        if let Err(e) = model.switch_to_state(state) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    // --------------- ECS world + schedule ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(store);
    let entity = world
        .spawn((model, MapPosition::new(0.0, 0.0), Sprite::default()))
        .id();

    let mut update = Schedule::default();
    update.add_systems(animate_models);

    // --------------- Simulation loop ---------------
    let mut last_tex: Option<Arc<str>> = None;
    for step in 0..cli.steps {
        world.resource_mut::<WorldTime>().tick(cli.delta);
        update.run(&mut world);

        let sprite = world.get::<Sprite>(entity).expect("sprite missing");
        if last_tex.as_deref() != Some(&*sprite.tex_key) {
            let model = world.get::<AnimatedModel>(entity).expect("model missing");
            log::info!(
                "step {:4} t={:7.3}s state={} frame={} left={:.3}s",
                step,
                (step + 1) as f32 * cli.delta,
                model.cur_state_name(),
                sprite.tex_key,
                model.time_left(),
            );
            last_tex = Some(sprite.tex_key.clone());
        }
    }
}
