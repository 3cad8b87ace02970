//! Demo systems.
//!
//! Submodules overview
//! - [`button`] – button hover/click handling and button actions
//! - [`collision`] – overlap checks, rule dispatch and handle snapping
//! - [`drag`] – pick up, move and release draggable entities
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw background, wires, sprites, buttons and debug overlay

pub mod button;
pub mod collision;
pub mod drag;
pub mod input;
pub mod render;
