//! Animation mode indices and movement constants per entity kind.

/// Players.
pub mod player {
    pub const MODE_RN: i32 = 3;
    pub const MODE_TN: i32 = 5;
    pub const MODE_TW: i32 = 6;

    pub const DEFAULT_MODE: i32 = MODE_TN;

    pub const SPEED_WALK: f32 = 6.0;
    pub const SPEED_RUN: f32 = 9.0;
}

/// Monsters.
pub mod monster {
    pub const MODE_NU: i32 = 1;
    pub const MODE_WL: i32 = 2;
    pub const MODE_RN: i32 = 15;

    pub const DEFAULT_MODE: i32 = MODE_NU;
}

/// Objects.
pub mod object {
    pub const DEFAULT_MODE: i32 = 0;
}
