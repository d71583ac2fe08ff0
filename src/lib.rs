//! Trail Runner - An endless runner along a curving trail
//!
//! Core modules:
//! - `sim`: Deterministic simulation (track streaming, pickups, vitals, run state)
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser boundary for the presentation layer (wasm32 only)

pub mod platform;
pub mod sim;
pub mod tuning;

pub use sim::{GameState, GameStatus, Intent, World};
pub use tuning::{Tuning, TuningError};

use glam::{Quat, Vec3};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Track curve amplitude (world units of lateral sway)
    pub const CURVE_AMPLITUDE: f32 = 10.0;
    /// Track curve frequency (radians per world unit)
    pub const CURVE_FREQUENCY: f32 = 0.02;

    /// Track streaming
    pub const SEGMENT_LENGTH: f32 = 20.0;
    pub const DRAW_DISTANCE: i64 = 12; // segments ahead
    pub const BACK_BUFFER: i64 = 3; // segments behind
    pub const ITEMS_PER_SEGMENT: usize = 3;

    /// Lateral distance between lane centers
    pub const LANE_WIDTH: f32 = 3.33;
    /// Item heights: ground level and jump-only pickups
    pub const ITEM_GROUND_Y: f32 = 1.0;
    pub const ITEM_ELEVATED_Y: f32 = 2.5;
    /// Chance that an item spawns at the elevated height
    pub const ITEM_ELEVATED_CHANCE: f32 = 0.3;

    /// Squared pickup radius
    pub const COLLISION_RADIUS_SQ: f32 = 2.0;
    /// Items further than this along the track are skipped before the full test
    pub const COLLISION_Z_THRESHOLD: f32 = 5.0;

    /// Vitals decay per second
    pub const HYDRATION_DECAY: f32 = 2.0;
    pub const ENERGY_DECAY: f32 = 1.5;
    /// Calories burned per second
    pub const CALORIE_BURN: f32 = 5.0;
    /// Distance per second at speed multiplier 1.0
    pub const BASE_SPEED: f32 = 10.0;
    /// Score bonus per collected item
    pub const ITEM_BONUS: u64 = 100;

    /// Jump kinematics
    pub const JUMP_FORCE: f32 = 8.0;
    pub const GRAVITY: f32 = 20.0;
    /// Player center height when standing (half the capsule height)
    pub const PLAYER_GROUND_Y: f32 = 1.0;

    /// Upper bound for energy and hydration
    pub const VITAL_MAX: f32 = 100.0;
}

/// Rotate a vector about the vertical axis
#[inline]
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * v
}

/// Lateral offset of a lane center from the track centerline
#[inline]
pub fn lane_to_x(lane: i32, lane_width: f32) -> f32 {
    lane as f32 * lane_width
}
