//! Run state and status transitions
//!
//! A single `GameState` lives for the whole session. It is created idle,
//! mutated only through the methods below and the per-frame [`tick`], and
//! brought back to its initial values by [`GameState::reset`].
//!
//! [`tick`]: super::tick::tick

use serde::Serialize;

use super::catalog::ItemDef;
use crate::consts::{ITEM_BONUS, VITAL_MAX};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GameStatus {
    /// Waiting for the player to start
    #[default]
    Idle,
    /// Active run
    Playing,
    /// Run suspended
    Paused,
    /// Vitals depleted or run quit; only reset leaves this state
    Ended,
}

/// The three metrics governing survival
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vitals {
    /// 0-100
    pub energy: f32,
    /// 0-100
    pub hydration: f32,
    /// Cumulative, never negative
    pub calories: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            energy: VITAL_MAX,
            hydration: VITAL_MAX,
            calories: 0.0,
        }
    }
}

impl Vitals {
    /// Add an item's deltas, clamping energy/hydration to 0-100
    pub fn apply_item(&mut self, item: &ItemDef) {
        self.calories = (self.calories + item.calories as f32).max(0.0);
        self.hydration = (self.hydration + item.hydration as f32).clamp(0.0, VITAL_MAX);
        self.energy = (self.energy + item.energy as f32).clamp(0.0, VITAL_MAX);
    }

    /// Apply `dt` seconds of decay and burn
    pub fn decay(&mut self, hydration_rate: f32, energy_rate: f32, burn_rate: f32, dt: f32) {
        self.hydration = (self.hydration - hydration_rate * dt).clamp(0.0, VITAL_MAX);
        self.energy = (self.energy - energy_rate * dt).clamp(0.0, VITAL_MAX);
        self.calories = (self.calories + burn_rate * dt).max(0.0);
    }

    /// Speed factor from energy: 0.5 when empty, 1.5 when full
    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        0.5 + self.energy / VITAL_MAX
    }

    /// True once hydration or energy hits zero
    #[inline]
    pub fn depleted(&self) -> bool {
        self.hydration <= 0.0 || self.energy <= 0.0
    }
}

/// Complete run state (read by the presentation each frame)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub status: GameStatus,
    pub vitals: Vitals,
    pub score: u64,
    /// Distance along the track (authoritative)
    pub distance: f32,
    /// -1, 0 or 1
    pub lane: i32,
    /// Pickups in collection order
    pub collected: Vec<ItemDef>,
    /// Score awarded per pickup
    item_bonus: u64,
    /// Sum of pickup bonuses (score = floor(distance) + this)
    bonus_score: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ITEM_BONUS)
    }
}

impl GameState {
    /// Create an idle run awarding `item_bonus` per pickup
    pub fn new(item_bonus: u64) -> Self {
        Self {
            status: GameStatus::Idle,
            vitals: Vitals::default(),
            score: 0,
            distance: 0.0,
            lane: 0,
            collected: Vec::new(),
            item_bonus,
            bonus_score: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Idle -> Playing
    pub fn start(&mut self) {
        if self.status == GameStatus::Idle {
            self.status = GameStatus::Playing;
            log::info!("Run started");
        } else {
            log::debug!("Ignoring start while {:?}", self.status);
        }
    }

    /// Playing -> Paused
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
            log::info!("Run paused at {:.1}", self.distance);
        }
    }

    /// Paused -> Playing
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
            log::info!("Run resumed");
        }
    }

    /// Flip between Playing and Paused; other statuses are unaffected
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Playing => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => {}
        }
    }

    /// Finish the run early (Playing or Paused -> Ended)
    pub fn end(&mut self) {
        if matches!(self.status, GameStatus::Playing | GameStatus::Paused) {
            self.status = GameStatus::Ended;
            log::info!("Run ended: score {}, distance {:.1}", self.score, self.distance);
        }
    }

    /// Any status -> Idle with every field at its initial value
    pub fn reset(&mut self) {
        *self = Self::new(self.item_bonus);
        log::info!("Run reset");
    }

    /// Move to a lane, clamped to -1..=1
    pub fn set_lane(&mut self, target: i32) {
        self.lane = target.clamp(-1, 1);
    }

    /// Shift one lane left (-1) or right (+1)
    pub fn change_lane(&mut self, direction: i32) {
        self.set_lane(self.lane + direction.signum());
    }

    /// Record a pickup: log it, award the bonus and apply its deltas
    pub fn collect_item(&mut self, item: &ItemDef) {
        self.collected.push(*item);
        self.bonus_score += self.item_bonus;
        self.score += self.item_bonus;
        self.vitals.apply_item(item);
        log::trace!(
            "Collected {} -> energy {:.1}, hydration {:.1}, calories {:.0}",
            item.name,
            self.vitals.energy,
            self.vitals.hydration,
            self.vitals.calories
        );
    }

    /// Recompute score from distance plus accumulated pickup bonuses
    pub(crate) fn refresh_score(&mut self) {
        self.score = self.distance.floor() as u64 + self.bonus_score;
    }
}
