//! # ember_math
//!
//! Math types for the ember simulation core. Re-exports [`glam`] for linear
//! algebra and defines the spatial components every moving entity carries.

pub mod motion;
pub mod tile;

// Re-export glam types for convenience.
pub use glam::{Vec2, vec2};

pub use motion::{Angle, Position, Size, Velocity};
pub use tile::TileIndex;
