//! Paloma game library crate.
//!
//! Real-time simulation core for a 3D collect-and-survive arcade game:
//! the player steers a pigeon over an open world, eats donuts to stave off
//! hunger, grabs speed rings, and competes with donut-stealing flamingos.
//! Rendering, audio and HUD are external collaborators behind trait seams.

pub mod app;
pub mod asset;
pub mod audio;
pub mod bounds;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod helpers;
pub mod hud;
pub mod input;
pub mod render;
pub mod systems;
