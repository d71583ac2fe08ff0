//! Discrete player intents queued by the presentation layer
//!
//! The presentation translates raw device events into intents and enqueues
//! them; the world drains the queue at the start of each frame, in order,
//! before anything else is simulated.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One input request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Begin a run from Idle
    Start,
    /// Move one lane: -1 left, +1 right
    LaneChange(i32),
    Jump,
    PauseToggle,
    /// Give up the current run
    Quit,
    /// Back to Idle with a fresh run
    Reset,
}

/// FIFO of pending intents
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending intent, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        self.pending.drain(..)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
