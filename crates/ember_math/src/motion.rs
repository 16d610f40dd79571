//! Spatial components.
//!
//! [`Position`], [`Velocity`], [`Angle`] and [`Size`] are attached to nearly
//! every simulated entity. They are the values the physics, pathing and
//! network layers read; this crate only defines them.

use ember_component::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space position in subtile units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub position: Vec2,
}

impl Position {
    /// Create a position at `(x, y)`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    /// Translate the position by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.position += offset;
        self
    }
}

impl From<Vec2> for Position {
    fn from(position: Vec2) -> Self {
        Self { position }
    }
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// Movement speeds and the current velocity vector.
///
/// `walk_speed` and `run_speed` are the magnitudes the movement system picks
/// from; `velocity` is what it applies this frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub velocity: Vec2,
}

impl Velocity {
    /// A stationary velocity with the given walk and run speeds.
    #[must_use]
    pub fn with_speeds(walk_speed: f32, run_speed: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            velocity: Vec2::ZERO,
        }
    }

    /// A velocity along `direction` with magnitude `speed`.
    ///
    /// A zero direction yields a zero velocity.
    #[must_use]
    pub fn directed(direction: Vec2, speed: f32) -> Self {
        Self {
            walk_speed: speed,
            run_speed: speed,
            velocity: direction.normalize_or_zero() * speed,
        }
    }
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}

/// Facing direction as a unit vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Angle {
    pub facing: Vec2,
}

impl Angle {
    /// Face along `direction`, keeping the default facing for a zero vector.
    #[must_use]
    pub fn toward(direction: Vec2) -> Self {
        Self {
            facing: direction.try_normalize().unwrap_or(Vec2::X),
        }
    }

    /// Facing in radians, counter-clockwise from +X.
    #[must_use]
    pub fn radians(&self) -> f32 {
        self.facing.y.atan2(self.facing.x)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self { facing: Vec2::X }
    }
}

impl Component for Angle {
    fn type_name() -> &'static str {
        "Angle"
    }
}

/// Collision radius. Zero means the entity uses rect bounds instead.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub size: f32,
}

impl Size {
    pub const SMALL: f32 = 1.0;
    pub const MEDIUM: f32 = 2.0;
    pub const LARGE: f32 = 3.0;

    #[must_use]
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl Component for Size {
    fn type_name() -> &'static str {
        "Size"
    }
}
