//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a run can be re-balanced
//! from a JSON file without touching code. Missing fields take the defaults
//! from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Largest accepted window and layout sizes
pub const MAX_DRAW_DISTANCE: i64 = 256;
pub const MAX_BACK_BUFFER: i64 = 64;
pub const MAX_ITEMS_PER_SEGMENT: usize = 64;

/// Balance and layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Track shape ===
    pub curve_amplitude: f32,
    pub curve_frequency: f32,

    // === Streaming ===
    pub segment_length: f32,
    /// Segments kept ahead of the player
    pub draw_distance: i64,
    /// Segments kept behind the player
    pub back_buffer: i64,
    pub items_per_segment: usize,

    // === Item placement ===
    pub lane_width: f32,
    pub item_ground_y: f32,
    pub item_elevated_y: f32,
    /// Probability (0-1) of an elevated item
    pub item_elevated_chance: f32,

    // === Pickup ===
    pub collision_radius_sq: f32,
    pub collision_z_threshold: f32,

    // === Vitals & scoring ===
    pub hydration_decay: f32,
    pub energy_decay: f32,
    pub calorie_burn: f32,
    pub base_speed: f32,
    pub item_bonus: u64,

    // === Jump ===
    pub jump_force: f32,
    pub gravity: f32,
    pub player_ground_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            curve_amplitude: CURVE_AMPLITUDE,
            curve_frequency: CURVE_FREQUENCY,

            segment_length: SEGMENT_LENGTH,
            draw_distance: DRAW_DISTANCE,
            back_buffer: BACK_BUFFER,
            items_per_segment: ITEMS_PER_SEGMENT,

            lane_width: LANE_WIDTH,
            item_ground_y: ITEM_GROUND_Y,
            item_elevated_y: ITEM_ELEVATED_Y,
            item_elevated_chance: ITEM_ELEVATED_CHANCE,

            collision_radius_sq: COLLISION_RADIUS_SQ,
            collision_z_threshold: COLLISION_Z_THRESHOLD,

            hydration_decay: HYDRATION_DECAY,
            energy_decay: ENERGY_DECAY,
            calorie_burn: CALORIE_BURN,
            base_speed: BASE_SPEED,
            item_bonus: ITEM_BONUS,

            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            player_ground_y: PLAYER_GROUND_Y,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning ({} items/segment, segment length {})",
            tuning.items_per_segment, tuning.segment_length);
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }
        fn positive(v: f32) -> bool {
            v.is_finite() && v > 0.0
        }
        fn non_negative(v: f32) -> bool {
            v.is_finite() && v >= 0.0
        }

        if !self.curve_amplitude.is_finite() || !self.curve_frequency.is_finite() {
            return invalid("curve", "amplitude and frequency must be finite");
        }
        if !positive(self.segment_length) {
            return invalid("segment_length", "must be positive");
        }
        if !(1..=MAX_DRAW_DISTANCE).contains(&self.draw_distance) {
            return invalid("draw_distance", "must be within 1..=256");
        }
        if !(0..=MAX_BACK_BUFFER).contains(&self.back_buffer) {
            return invalid("back_buffer", "must be within 0..=64");
        }
        if !(1..=MAX_ITEMS_PER_SEGMENT).contains(&self.items_per_segment) {
            return invalid("items_per_segment", "must be within 1..=64");
        }
        if !positive(self.lane_width) {
            return invalid("lane_width", "must be positive");
        }
        if !non_negative(self.item_ground_y) {
            return invalid("item_ground_y", "must not be negative");
        }
        if !non_negative(self.item_elevated_y) || self.item_elevated_y < self.item_ground_y {
            return invalid("item_elevated_y", "must be at or above item_ground_y");
        }
        if !(0.0..=1.0).contains(&self.item_elevated_chance) {
            return invalid("item_elevated_chance", "must be within 0..=1");
        }
        if !positive(self.collision_radius_sq) {
            return invalid("collision_radius_sq", "must be positive");
        }
        if !positive(self.collision_z_threshold) {
            return invalid("collision_z_threshold", "must be positive");
        }
        // The coarse reject must never discard a pickup the full test accepts
        if self.collision_z_threshold * self.collision_z_threshold < self.collision_radius_sq {
            return invalid("collision_z_threshold", "must be at least the pickup radius");
        }
        if !non_negative(self.hydration_decay)
            || !non_negative(self.energy_decay)
            || !non_negative(self.calorie_burn)
        {
            return invalid("decay", "rates must not be negative");
        }
        if !non_negative(self.base_speed) {
            return invalid("base_speed", "must not be negative");
        }
        if !positive(self.jump_force) {
            return invalid("jump_force", "must be positive");
        }
        if !positive(self.gravity) {
            return invalid("gravity", "must be positive");
        }
        if !non_negative(self.player_ground_y) {
            return invalid("player_ground_y", "must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_speed": 12.0, "items_per_segment": 5 }"#).unwrap();
        assert_eq!(tuning.base_speed, 12.0);
        assert_eq!(tuning.items_per_segment, 5);
        assert_eq!(tuning.segment_length, SEGMENT_LENGTH);
        assert_eq!(tuning.item_bonus, ITEM_BONUS);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "segment_length": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "segment_length", .. }));

        let err = Tuning::from_json(r#"{ "item_elevated_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "item_elevated_chance", .. }));

        let cases = [
            (r#"{ "draw_distance": 9223372036854775807, "back_buffer": 0 }"#, "draw_distance"),
            (r#"{ "draw_distance": 0 }"#, "draw_distance"),
            (r#"{ "back_buffer": 9223372036854775807 }"#, "back_buffer"),
            (r#"{ "back_buffer": -1 }"#, "back_buffer"),
            (r#"{ "items_per_segment": 1000000 }"#, "items_per_segment"),
            (r#"{ "items_per_segment": 0 }"#, "items_per_segment"),
            (r#"{ "lane_width": 0.0 }"#, "lane_width"),
            (r#"{ "lane_width": -3.0 }"#, "lane_width"),
            (r#"{ "item_ground_y": -1.0 }"#, "item_ground_y"),
            (r#"{ "item_elevated_y": 0.5 }"#, "item_elevated_y"),
            (r#"{ "jump_force": 0.0 }"#, "jump_force"),
            (r#"{ "gravity": -20.0 }"#, "gravity"),
            (r#"{ "player_ground_y": -0.5 }"#, "player_ground_y"),
            (r#"{ "energy_decay": -1.0 }"#, "decay"),
        ];
        for (json, expected) in cases {
            match Tuning::from_json(json) {
                Err(TuningError::Invalid { field, .. }) => assert_eq!(field, expected, "{json}"),
                other => panic!("{json} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_z_threshold_below_pickup_radius() {
        let err = Tuning::from_json(r#"{ "collision_z_threshold": 0.1 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "collision_z_threshold", .. }));

        // Exactly the radius is enough
        let tuning =
            Tuning::from_json(r#"{ "collision_radius_sq": 4.0, "collision_z_threshold": 2.0 }"#)
                .unwrap();
        assert_eq!(tuning.collision_z_threshold, 2.0);
    }

    #[test]
    fn test_max_window_accepted() {
        let tuning = Tuning::from_json(r#"{ "draw_distance": 256, "back_buffer": 64 }"#).unwrap();
        assert_eq!(tuning.draw_distance, MAX_DRAW_DISTANCE);
        assert_eq!(tuning.back_buffer, MAX_BACK_BUFFER);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let mut tuning = Tuning::default();
        tuning.draw_distance = 20;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
