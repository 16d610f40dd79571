//! Composite animation components.
//!
//! A composite ("COF") animation is drawn from a token, a mode and a weapon
//! class, layering one sprite per component slot.

use ember_tables::records::COMPONENT_SLOTS;

use super::impl_component;

/// Token, mode and weapon class of an entity's composite animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CofReference {
    pub token: String,
    pub mode: i32,
    pub wclass: i32,
}

impl CofReference {
    /// Hand-to-hand.
    pub const DEFAULT_WCLASS: i32 = 0;

    #[must_use]
    pub fn new(token: impl Into<String>, mode: i32) -> Self {
        Self {
            token: token.into(),
            mode,
            wclass: Self::DEFAULT_WCLASS,
        }
    }

    #[must_use]
    pub fn with_wclass(mut self, wclass: i32) -> Self {
        self.wclass = wclass;
        self
    }
}

/// Component code per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CofComponents {
    pub component: [i32; COMPONENT_SLOTS],
}

impl CofComponents {
    /// Slot uses the animation's default layer.
    pub const NIL: i32 = 0;
    /// Slot is not drawn.
    pub const NULL: i32 = -1;

    #[must_use]
    pub fn filled(code: i32) -> Self {
        Self {
            component: [code; COMPONENT_SLOTS],
        }
    }
}

impl Default for CofComponents {
    fn default() -> Self {
        Self::filled(Self::NIL)
    }
}

/// Per-slot opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CofAlphas {
    pub alpha: [f32; COMPONENT_SLOTS],
}

impl Default for CofAlphas {
    fn default() -> Self {
        Self {
            alpha: [1.0; COMPONENT_SLOTS],
        }
    }
}

/// Per-slot palette transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CofTransforms {
    pub transform: [u8; COMPONENT_SLOTS],
}

impl CofTransforms {
    /// No transform.
    pub const NONE: u8 = 0xFF;
}

impl Default for CofTransforms {
    fn default() -> Self {
        Self {
            transform: [Self::NONE; COMPONENT_SLOTS],
        }
    }
}

/// Modes to switch to when standing, walking and running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementModes {
    pub idle: i32,
    pub walk: i32,
    pub run: i32,
}

impl MovementModes {
    #[must_use]
    pub const fn new(idle: i32, walk: i32, run: i32) -> Self {
        Self { idle, walk, run }
    }
}

impl_component!(CofReference, CofComponents, CofAlphas, CofTransforms, MovementModes);
