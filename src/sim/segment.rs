//! Track segments and their item layouts
//!
//! A segment is one fixed-length slice of trail. Its items are rolled once
//! when the segment becomes live and cached until it leaves the window, so
//! pickups never jump around while the player is near them.

use std::collections::HashMap;

use glam::Vec3;
use rand::Rng;
use serde::Serialize;

use super::catalog::{ItemDef, random_item};
use super::curve::TrackCurve;
use crate::lane_to_x;
use crate::tuning::Tuning;

/// An item placed on a segment
#[derive(Debug, Clone, Serialize)]
pub struct PlacedItem {
    pub def: ItemDef,
    /// Position relative to the segment anchor
    pub local_pos: Vec3,
    /// Set once on pickup, never cleared
    pub collected: bool,
}

impl PlacedItem {
    pub fn new(def: ItemDef, local_pos: Vec3) -> Self {
        Self {
            def,
            local_pos,
            collected: false,
        }
    }
}

/// A live slice of track
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub index: i64,
    /// Distance along the track where this segment is anchored
    pub origin: f32,
    pub items: Vec<PlacedItem>,
}

impl Segment {
    /// World z of the segment anchor (the run heads toward -z)
    #[inline]
    pub fn world_z(&self) -> f32 {
        -self.origin
    }

    /// World position of an item on this segment
    pub fn item_world_pos(&self, curve: &TrackCurve, item: &PlacedItem) -> Vec3 {
        curve.to_world(self.world_z(), item.local_pos)
    }

    /// Uncollected items
    pub fn remaining(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter().filter(|i| !i.collected)
    }
}

/// Roll a fresh item layout for a segment
pub fn generate_segment<R: Rng + ?Sized>(index: i64, tuning: &Tuning, rng: &mut R) -> Segment {
    let length = tuning.segment_length;
    let items = (0..tuning.items_per_segment)
        .map(|_| {
            let lane = rng.random_range(-1..=1);
            let x = lane_to_x(lane, tuning.lane_width);
            let z = rng.random::<f32>() * length - length / 2.0;
            let y = if rng.random::<f32>() < tuning.item_elevated_chance {
                tuning.item_elevated_y
            } else {
                tuning.item_ground_y
            };
            PlacedItem::new(random_item(rng), Vec3::new(x, y, z))
        })
        .collect();

    Segment {
        index,
        origin: index as f32 * length,
        items,
    }
}

/// Slot storage for live segments, keyed by segment index
///
/// Evicted slots go on a free list and are reused for the next new index.
#[derive(Debug, Default)]
pub struct SegmentCache {
    slots: Vec<Option<Segment>>,
    free_list: Vec<usize>,
    by_index: HashMap<i64, usize>,
}

impl SegmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live segments
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// Total slots allocated (live + free)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, index: i64) -> bool {
        self.by_index.contains_key(&index)
    }

    pub fn get(&self, index: i64) -> Option<&Segment> {
        self.by_index
            .get(&index)
            .and_then(|&slot| self.slots[slot].as_ref())
    }

    pub fn get_mut(&mut self, index: i64) -> Option<&mut Segment> {
        let slot = *self.by_index.get(&index)?;
        self.slots[slot].as_mut()
    }

    /// Return the cached segment, generating it on first access
    pub fn get_or_generate<R: Rng + ?Sized>(
        &mut self,
        index: i64,
        tuning: &Tuning,
        rng: &mut R,
    ) -> &mut Segment {
        let slot = match self.by_index.get(&index) {
            Some(&slot) => slot,
            None => {
                let slot = self.free_list.pop().unwrap_or_else(|| {
                    self.slots.push(None);
                    self.slots.len() - 1
                });
                self.by_index.insert(index, slot);
                slot
            }
        };
        // Vacant slots were cleared on eviction, so this only rolls on a miss
        self.slots[slot].get_or_insert_with(|| {
            let segment = generate_segment(index, tuning, rng);
            log::debug!("Generated segment {} ({} items)", index, segment.items.len());
            segment
        })
    }

    /// Drop every segment outside `[start, end]`
    pub fn retain_window(&mut self, start: i64, end: i64) {
        let slots = &mut self.slots;
        let free_list = &mut self.free_list;
        self.by_index.retain(|&index, &mut slot| {
            let keep = (start..=end).contains(&index);
            if !keep {
                slots[slot] = None;
                free_list.push(slot);
                log::debug!("Evicted segment {}", index);
            }
            keep
        });
    }

    /// Live segments in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        let mut indices: Vec<_> = self.by_index.iter().collect();
        indices.sort_by_key(|(index, _)| **index);
        indices
            .into_iter()
            .filter_map(|(_, &slot)| self.slots[slot].as_ref())
    }

    /// Live segment indices in ascending order
    pub fn indices(&self) -> Vec<i64> {
        let mut indices: Vec<_> = self.by_index.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.by_index.clear();
    }
}
