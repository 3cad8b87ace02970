//! Pointer drag systems.
//!
//! A drag runs through three systems, in this order each frame:
//!
//! 1. [`drag_start_system`] – on press, picks the topmost draggable entity
//!    under the pointer
//! 2. [`drag_system`] – while the button is held, moves the dragged entity to
//!    the pointer, kept inside the screen, and writes through its
//!    [`CurveHandle`], if any
//! 3. [`drag_release_system`] – on release, recolors the background if the
//!    dragged entity was snapped this frame, records released boxes as the
//!    last click and places the "Add Wire" button next to them
//!
//! The collision detector runs between 2 and 3 so a release sees the snaps
//! of its own frame.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::button::{Button, ButtonAction};
use crate::components::curvehandle::CurveHandle;
use crate::components::draggable::Draggable;
use crate::components::group::{BOXES, Group};
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::zindex::ZIndex;
use crate::resources::background::{BackgroundColor, ColorRng};
use crate::resources::curvestore::CurveStore;
use crate::resources::dragstate::{DragState, LastClick};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::snapstate::SnapState;

/// Start dragging the topmost draggable entity under the pointer.
pub fn drag_start_system(
    input: Res<InputState>,
    mut drag: ResMut<DragState>,
    candidates: Query<(Entity, &MapPosition, &BoxCollider, Option<&ZIndex>), With<Draggable>>,
) {
    if !input.select.just_pressed || input.pointer_captured {
        return;
    }
    let picked = candidates
        .iter()
        .filter(|(_, pos, collider, _)| collider.contains_point(pos.pos, input.pointer))
        .max_by_key(|(_, _, _, z)| z.copied().unwrap_or(ZIndex(0)))
        .map(|(entity, _, _, _)| entity);

    if let Some(entity) = picked {
        debug!("Drag start {:?}", entity);
        drag.dragging = Some(entity);
    }
}

/// Move the dragged entity to the pointer while the button is held.
///
/// The pointer keeps reporting positions outside the window during a drag;
/// those are clamped to the screen edge.
pub fn drag_system(
    input: Res<InputState>,
    drag: Res<DragState>,
    screen: Res<ScreenSize>,
    mut dragged: Query<(&mut MapPosition, Option<&CurveHandle>)>,
    mut curves: ResMut<CurveStore>,
) {
    let Some(entity) = drag.dragging else {
        return;
    };
    if !input.select.active {
        return;
    }
    let Ok((mut pos, handle)) = dragged.get_mut(entity) else {
        return;
    };
    let target = screen.clamp(input.pointer);
    pos.pos = target;
    if let Some(handle) = handle {
        curves.set_point(handle.curve, handle.slot, target);
    }
}

/// End the drag on release.
///
/// Recolors the background when the released entity is part of a snap made
/// this frame. A released box becomes the last click, and the "Add Wire"
/// button is enabled and moved beside it.
#[allow(clippy::too_many_arguments)]
pub fn drag_release_system(
    input: Res<InputState>,
    mut drag: ResMut<DragState>,
    snap: Res<SnapState>,
    mut background: ResMut<BackgroundColor>,
    mut rng: ResMut<ColorRng>,
    mut last_click: ResMut<LastClick>,
    screen: Res<ScreenSize>,
    released: Query<(&Group, &MapPosition, &BoxCollider)>,
    mut buttons: Query<(&mut Button, &mut ScreenPosition)>,
) {
    if !input.select.just_released {
        return;
    }
    let Some(entity) = drag.dragging.take() else {
        return;
    };
    debug!("Drag end {:?}", entity);

    if snap.involves(entity) {
        let hex = background.randomize(&mut rng.0);
        info!("Background changed to {}", hex);
    }

    let Ok((group, pos, collider)) = released.get(entity) else {
        return;
    };
    if !group.is(BOXES) {
        return;
    }
    last_click.0 = Some(pos.pos);
    let aabb = collider.aabb(pos.pos);
    for (mut button, mut screen_pos) in buttons.iter_mut() {
        if button.action != ButtonAction::AddWire {
            continue;
        }
        button.enabled = true;
        screen_pos.pos = button.beside(aabb, &screen);
        debug!(
            "Add Wire at ({:.0}, {:.0})",
            screen_pos.pos.x, screen_pos.pos.y
        );
    }
}
