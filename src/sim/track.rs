//! Streaming window of live segment indices

use serde::Serialize;

use crate::tuning::Tuning;

/// Inclusive range of segment indices that must exist
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackWindow {
    pub start: i64,
    pub end: i64,
    /// Segments kept ahead of the player
    pub draw_distance: i64,
    /// Segments kept behind the player
    pub back_buffer: i64,
    segment_length: f32,
}

impl TrackWindow {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            start: -tuning.back_buffer,
            end: tuning.draw_distance,
            draw_distance: tuning.draw_distance,
            back_buffer: tuning.back_buffer,
            segment_length: tuning.segment_length,
        }
    }

    /// Segment index containing a distance along the track
    #[inline]
    pub fn segment_index(&self, distance: f32) -> i64 {
        (distance / self.segment_length).floor() as i64
    }

    /// Recenter on the player's segment if an edge would come into view
    ///
    /// Returns true when the window moved.
    pub fn update(&mut self, distance: f32) -> bool {
        let current = self.segment_index(distance);
        if current + self.draw_distance > self.end || current - self.back_buffer < self.start {
            self.start = current - self.back_buffer;
            self.end = current + self.draw_distance;
            log::debug!("Track window -> [{}, {}]", self.start, self.end);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Live indices, ascending
    pub fn indices(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}
