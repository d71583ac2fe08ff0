//! Player-vs-item pickup detection
//!
//! Two phases: a cheap longitudinal reject using the unrotated item z, then a
//! squared-distance test against the fully transformed item position. Items
//! already collected are never tested again.

use glam::Vec3;

use super::curve::TrackCurve;
use super::segment::{PlacedItem, Segment};
use super::state::GameState;
use crate::tuning::Tuning;

/// Pickup test parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupProbe {
    /// Longitudinal distance beyond which the full test is skipped
    pub z_threshold: f32,
    /// Squared pickup radius
    pub radius_sq: f32,
}

impl PickupProbe {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            z_threshold: tuning.collision_z_threshold,
            radius_sq: tuning.collision_radius_sq,
        }
    }
}

/// Test one item against the player
///
/// `player_pos` is the player's world position, including jump height.
pub fn check_collision(
    curve: &TrackCurve,
    probe: &PickupProbe,
    player_pos: Vec3,
    item: &PlacedItem,
    segment: &Segment,
) -> bool {
    if item.collected {
        return false;
    }

    // Coarse reject along the track
    let approx_z = segment.world_z() + item.local_pos.z;
    if (approx_z - player_pos.z).abs() > probe.z_threshold {
        return false;
    }

    let item_pos = segment.item_world_pos(curve, item);
    item_pos.distance_squared(player_pos) < probe.radius_sq
}

/// Collect every item on a segment the player is touching
///
/// Each hit is flagged and reported to the run state exactly once. Returns
/// the number of new pickups.
pub fn collect_hits(
    state: &mut GameState,
    curve: &TrackCurve,
    probe: &PickupProbe,
    player_pos: Vec3,
    segment: &mut Segment,
) -> usize {
    let mut hits = 0;
    for i in 0..segment.items.len() {
        if check_collision(curve, probe, player_pos, &segment.items[i], segment) {
            let item = &mut segment.items[i];
            item.collected = true;
            state.collect_item(&item.def);
            log::trace!("Pickup {} on segment {}", item.def.id, segment.index);
            hits += 1;
        }
    }
    hits
}
