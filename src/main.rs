//! Box wires main entry point.
//!
//! An interactive toy built with:
//! - **raylib** for windowing, input polling and drawing
//! - **bevy_ecs** for entities, resources, scheduling and observers
//!
//! Drag the boxes and the round handles around. Dropping a wire handle on a
//! box snaps it to the box center and changes the background color. Click a
//! box, then "Add Wire", to grow a new wire out of it; "New Box" adds a box.
//! F11 toggles the debug overlay.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, load textures
//! 2. Insert resources, register observers, run [`game::setup`]
//! 3. Each frame: poll input, handle buttons, drag, detect collisions,
//!    release, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use boxwires::game;
use boxwires::resources::debugmode::DebugMode;
use boxwires::resources::gameconfig::GameConfig;
use boxwires::resources::screensize::ScreenSize;
use boxwires::systems::button::{button_cursor_system, button_system};
use boxwires::systems::drag::drag_release_system;
use boxwires::systems::input::update_input_state;
use boxwires::systems::render::render_system;
use clap::Parser;
use std::path::PathBuf;

/// Draggable boxes joined by Bézier wires.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for background color changes; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // --------------- Raylib window & assets ---------------
    let screen = ScreenSize::from(&config);
    let (mut rl, thread) = raylib::init()
        .size(screen.w, screen.h)
        .title("Box Wires")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let textures = match game::load_textures(&mut rl, &thread) {
        Ok(textures) => textures,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::insert_resources(&mut world, config);
    world.insert_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::register_observers(&mut world);

    let setup_system_id = world.register_system(game::setup);
    if let Err(e) = world.run_system(setup_system_id) {
        log::error!("Scene setup failed: {}", e);
        std::process::exit(1);
    }
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(button_system));
    game::add_interaction_systems(&mut update);
    update.add_systems(button_cursor_system.after(button_system));
    update.add_systems(render_system.after(drag_release_system));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame
    }
    log::info!("Bye!");
}
