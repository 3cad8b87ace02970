//! ECS resources made available to systems.
//!
//! Overview
//! - `background` – clear color and the random source used to change it
//! - `curvestore` – append-only list of the scene's quadratic Bézier wires
//! - `debugmode` – presence toggles the debug overlay
//! - `dragstate` – entity under drag and the last released box position
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame pointer and key state
//! - `screensize` – current framebuffer dimensions in pixels
//! - `snapstate` – handle/box pairs snapped during the current frame
//! - `texturestore` – loaded textures keyed by string IDs
pub mod background;
pub mod curvestore;
pub mod debugmode;
pub mod dragstate;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod snapstate;
pub mod texturestore;
