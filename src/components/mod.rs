//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap and picking
//! - [`button`] – clickable screen-space text buttons
//! - [`collision`] – collision rules pairing groups with typed callbacks
//! - [`curvehandle`] – back-reference from a handle to a curve vertex
//! - [`draggable`] – marker for entities the pointer can drag
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering and picking order

pub mod boxcollider;
pub mod button;
pub mod collision;
pub mod curvehandle;
pub mod draggable;
pub mod group;
pub mod mapposition;
pub mod screenposition;
pub mod sprite;
pub mod zindex;
