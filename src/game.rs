//! Scene setup and wiring.
//!
//! - [`load_textures`] loads the box and handle sprites (raylib side)
//! - [`insert_resources`], [`register_observers`] and
//!   [`add_interaction_systems`] prepare a [`World`] and [`Schedule`]
//! - [`setup`] builds the initial scene: one wire, two boxes, two buttons
//! - [`spawn_box`] and [`spawn_curve_handles`] are shared with the button
//!   actions

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::button::{Button, ButtonAction};
use crate::components::collision::CollisionRule;
use crate::components::curvehandle::{CurveHandle, CurvePoint};
use crate::components::draggable::Draggable;
use crate::components::group::{BOXES, Group, HANDLES};
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::{BOX_LAYER, HANDLE_LAYER, ZIndex};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::background::{BackgroundColor, ColorRng};
use crate::resources::curvestore::{CurveStore, QuadraticBezier};
use crate::resources::dragstate::{DragState, LastClick};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::snapstate::SnapState;
use crate::resources::texturestore::TextureStore;
use crate::systems::button::{button_pressed_observer, button_system};
use crate::systems::collision::{collision_detector, collision_observer, snap_handle_to_box};
use crate::systems::drag::{drag_release_system, drag_start_system, drag_system};

/// Side of a box sprite and collider, in pixels.
pub const BOX_SIZE: f32 = 32.0;
/// Diameter of a handle sprite and side of its collider, in pixels.
pub const HANDLE_SIZE: f32 = 16.0;

const SQUARE_TEXTURE_PATH: &str = "./assets/textures/square.png";
const CIRCLE_TEXTURE_PATH: &str = "./assets/textures/circle.png";

/// Spawn a draggable box centered on `pos`.
pub fn spawn_box(commands: &mut Commands, pos: Vector2) -> Entity {
    commands
        .spawn((
            Group::new(BOXES),
            MapPosition::from_vec(pos),
            Sprite::centered("square", BOX_SIZE, BOX_SIZE),
            BoxCollider::centered(BOX_SIZE, BOX_SIZE),
            ZIndex(BOX_LAYER),
            Draggable,
        ))
        .id()
}

/// Spawn the three handles of the curve stored at `index`, one per vertex.
pub fn spawn_curve_handles(
    commands: &mut Commands,
    index: usize,
    curve: &QuadraticBezier,
) -> [Entity; 3] {
    CurvePoint::ALL.map(|slot| {
        commands
            .spawn((
                Group::new(HANDLES),
                MapPosition::from_vec(curve.point(slot)),
                Sprite::centered("circle", HANDLE_SIZE, HANDLE_SIZE),
                BoxCollider::centered(HANDLE_SIZE, HANDLE_SIZE),
                ZIndex(HANDLE_LAYER),
                Draggable,
                CurveHandle::new(index, slot),
            ))
            .id()
    })
}

/// Build the initial scene.
///
/// Inserts the scene resources and spawns one wire across the screen, two
/// boxes in the opposite corners, the "New Box" button and the (disabled)
/// "Add Wire" button.
pub fn setup(mut commands: Commands, config: Res<GameConfig>) {
    let background = BackgroundColor::from_hex(&config.background).unwrap_or_else(|e| {
        warn!("{}, using default background", e);
        BackgroundColor::default()
    });
    commands.insert_resource(background);
    commands.insert_resource(ColorRng::new(config.seed));
    commands.insert_resource(DragState::default());
    commands.insert_resource(LastClick::default());
    commands.insert_resource(SnapState::default());

    let mut curves = CurveStore::new();
    let first = QuadraticBezier::new(
        Vector2::new(50.0, 50.0),
        Vector2::new(400.0, 300.0),
        Vector2::new(750.0, 550.0),
    );
    let index = curves.push(first);
    spawn_curve_handles(&mut commands, index, &first);
    commands.insert_resource(curves);

    spawn_box(&mut commands, Vector2::new(750.0, 50.0));
    spawn_box(&mut commands, Vector2::new(50.0, 550.0));

    commands.spawn((
        Button::new("New Box", ButtonAction::NewBox, Vector2::new(80.0, 16.0)),
        ScreenPosition::new(720.0, 2.0),
    ));
    commands.spawn((
        Button::new("Add Wire", ButtonAction::AddWire, Vector2::new(80.0, 16.0)).disabled(),
        ScreenPosition::new(620.0, 2.0),
    ));

    commands.spawn(CollisionRule::new(HANDLES, BOXES, snap_handle_to_box));

    info!("Scene ready: 1 wire, 2 boxes");
}

/// Insert the resources every system expects before [`setup`] runs.
pub fn insert_resources(world: &mut World, config: GameConfig) {
    world.insert_resource(ScreenSize::from(&config));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
}

/// Register the demo's observers.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(button_pressed_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();
}

/// Add the interaction systems in frame order.
///
/// Input polling must run before [`button_system`] and rendering after
/// [`drag_release_system`]; both need a window and are added by `main`.
pub fn add_interaction_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            button_system,
            drag_start_system,
            drag_system,
            collision_detector,
            drag_release_system,
        )
            .chain(),
    );
}

/// Load the box and handle textures.
///
/// A missing image file is replaced by a generated placeholder so the demo
/// still runs from a bare checkout.
pub fn load_textures(rl: &mut RaylibHandle, th: &RaylibThread) -> Result<TextureStore, String> {
    let mut store = TextureStore::new();

    let square = match rl.load_texture(th, SQUARE_TEXTURE_PATH) {
        Ok(tex) => tex,
        Err(e) => {
            warn!("{}: {}, generating placeholder", SQUARE_TEXTURE_PATH, e);
            let image = Image::gen_image_color(BOX_SIZE as i32, BOX_SIZE as i32, Color::LIGHTGRAY);
            rl.load_texture_from_image(th, &image)
                .map_err(|e| format!("Failed to create square texture: {}", e))?
        }
    };
    store.insert("square", square);

    let circle = match rl.load_texture(th, CIRCLE_TEXTURE_PATH) {
        Ok(tex) => tex,
        Err(e) => {
            warn!("{}: {}, generating placeholder", CIRCLE_TEXTURE_PATH, e);
            let size = HANDLE_SIZE as i32;
            let mut image = Image::gen_image_color(size, size, Color::BLANK);
            image.draw_circle(size / 2, size / 2, size / 2 - 1, Color::ORANGE);
            rl.load_texture_from_image(th, &image)
                .map_err(|e| format!("Failed to create circle texture: {}", e))?
        }
    };
    store.insert("circle", circle);

    Ok(store)
}
