//! Event types and observers used by the demo.
//!
//! Submodules:
//! - [`button`] – a UI button was clicked
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod button;
pub mod collision;
pub mod switchdebug;
