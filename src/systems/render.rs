//! Render system.
//!
//! Draws one frame: background, wires, sprites sorted by [`ZIndex`], enabled
//! buttons and, when [`DebugMode`] is present, the debug overlay.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::button::Button;
use crate::components::group::{BOXES, Group, HANDLES};
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::background::BackgroundColor;
use crate::resources::curvestore::{CURVE_DIVISIONS, CurveStore};
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// Stroke width of a wire in pixels.
const WIRE_THICKNESS: f32 = 2.0;
const WIRE_COLOR: Color = Color::WHITE;

/// Exclusive system drawing the whole scene.
///
/// The raylib handle and thread are taken out of the world for the duration
/// of the frame so the draw handle can coexist with world queries.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(th) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&th);
        let background = world.resource::<BackgroundColor>().color;
        d.clear_background(background);

        draw_wires(world, &mut d);
        draw_sprites(world, &mut d);
        draw_buttons(world, &mut d);
        if world.contains_resource::<DebugMode>() {
            draw_debug(world, &mut d);
        }
    }

    world.insert_non_send_resource(th);
    world.insert_non_send_resource(rl);
}

fn draw_wires(world: &World, d: &mut RaylibDrawHandle) {
    let curves = world.resource::<CurveStore>();
    for curve in curves.iter() {
        let points = curve.points(CURVE_DIVISIONS);
        for segment in points.windows(2) {
            d.draw_line_ex(segment[0], segment[1], WIRE_THICKNESS, WIRE_COLOR);
        }
    }
}

fn draw_sprites(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world).map(|(s, p, z)| (s.clone(), *p, *z)).collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, pos, _z) in to_draw.iter() {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        };
        // Destination rect places sprite so that MapPosition is the pivot (origin)
        let dest = Rectangle {
            x: pos.pos.x,
            y: pos.pos.y,
            width: sprite.width,
            height: sprite.height,
        };
        d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
    }
}

fn draw_buttons(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut q = world.query::<(&Button, &ScreenPosition)>();
    for (button, pos) in q.iter(world) {
        if !button.enabled {
            continue;
        }
        d.draw_text(
            &button.label,
            pos.pos.x as i32,
            pos.pos.y as i32,
            button.font_size,
            button.color(),
        );
    }
}

fn draw_debug(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
    for (collider, position) in colliders.iter(world) {
        let (x, y, w, h) = collider.get_aabb(position.pos);
        d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
    }

    let curves = world.resource::<CurveStore>();
    for curve in curves.iter() {
        d.draw_line_v(curve.start, curve.control, Color::GREEN);
        d.draw_line_v(curve.control, curve.end, Color::GREEN);
    }
    let curve_count = curves.len();

    let mut groups = world.query::<&Group>();
    let (boxes, handles) = groups.iter(world).fold((0, 0), |(b, h), g| {
        (b + g.is(BOXES) as usize, h + g.is(HANDLES) as usize)
    });

    let screen = *world.resource::<ScreenSize>();
    let fps = d.get_fps();
    let text = format!(
        "DEBUG (F11) | FPS: {} | curves: {} boxes: {} handles: {}",
        fps, curve_count, boxes, handles
    );
    d.draw_text(&text, 10, screen.h - 20, 10, Color::YELLOW);

    let mouse = d.get_mouse_position();
    let background = &world.resource::<BackgroundColor>().hex;
    let text = format!(
        "Mouse: ({:.1}, {:.1}) | background: {}",
        mouse.x, mouse.y, background
    );
    d.draw_text(&text, 10, screen.h - 35, 10, Color::YELLOW);
}
