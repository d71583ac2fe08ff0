//! Frame driver tying the run state to the streamed track
//!
//! One `World` per session. Each frame: apply queued intents, move the jump,
//! refresh the track window, test pickups on every live segment, then tick
//! the vitals. Everything runs on the caller's thread.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{PickupProbe, collect_hits};
use super::curve::TrackCurve;
use super::intent::{Intent, IntentQueue};
use super::player::{Player, PlayerPose, player_pose};
use super::segment::{Segment, SegmentCache};
use super::state::{GameState, GameStatus};
use super::summary::RunSummary;
use super::tick::tick;
use super::track::TrackWindow;
use crate::tuning::Tuning;

/// Uncollected item as the presentation sees it
#[derive(Debug, Clone, Serialize)]
pub struct ItemPose {
    pub segment: i64,
    pub id: &'static str,
    pub color: &'static str,
    pub position: Vec3,
}

/// Everything the presentation needs to draw a frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub state: &'a GameState,
    pub player: PlayerPose,
    pub airborne: bool,
    pub window: (i64, i64),
    pub items: Vec<ItemPose>,
}

/// Session-long simulation
pub struct World {
    pub tuning: Tuning,
    pub curve: TrackCurve,
    pub state: GameState,
    pub player: Player,
    pub window: TrackWindow,
    segments: SegmentCache,
    intents: IntentQueue,
    probe: PickupProbe,
    seed: u64,
    rng: Pcg32,
}

impl World {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut world = Self {
            curve: TrackCurve::new(tuning.curve_amplitude, tuning.curve_frequency),
            state: GameState::new(tuning.item_bonus),
            player: Player::new(tuning.player_ground_y),
            window: TrackWindow::new(&tuning),
            segments: SegmentCache::new(),
            intents: IntentQueue::new(),
            probe: PickupProbe::from_tuning(&tuning),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        world.fill_window();
        log::info!("World created (seed {})", seed);
        world
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Queue an intent for the next frame
    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Advance one rendered frame of `dt` seconds
    ///
    /// Negative or non-finite frame times count as zero.
    pub fn frame(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let pending: Vec<Intent> = self.intents.drain().collect();
        for intent in pending {
            self.apply_intent(intent);
        }

        if self.state.is_playing() {
            self.player.step(self.tuning.gravity, dt);
        }

        if self.window.update(self.state.distance) {
            self.fill_window();
        }

        if self.state.is_playing() {
            self.resolve_pickups();
        }

        tick(&mut self.state, &self.tuning, dt);
    }

    fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Start => self.state.start(),
            Intent::LaneChange(direction) => self.state.change_lane(direction),
            Intent::Jump => {
                if self.state.is_playing() && self.player.jump(self.tuning.jump_force) {
                    log::trace!("Jump at {:.1}", self.state.distance);
                }
            }
            Intent::PauseToggle => self.state.toggle_pause(),
            Intent::Quit => self.state.end(),
            Intent::Reset => self.reset(),
        }
    }

    /// Back to Idle with a fresh track
    ///
    /// The RNG keeps running, so the new track differs from the last one.
    pub fn reset(&mut self) {
        self.state.reset();
        self.player = Player::new(self.tuning.player_ground_y);
        self.window = TrackWindow::new(&self.tuning);
        self.segments.clear();
        self.fill_window();
    }

    /// Evict segments outside the window and generate the missing ones
    fn fill_window(&mut self) {
        self.segments.retain_window(self.window.start, self.window.end);
        for index in self.window.indices() {
            self.segments.get_or_generate(index, &self.tuning, &mut self.rng);
        }
    }

    fn resolve_pickups(&mut self) {
        let pose = self.player_pose();
        for index in self.window.indices() {
            if let Some(segment) = self.segments.get_mut(index) {
                collect_hits(&mut self.state, &self.curve, &self.probe, pose.position, segment);
            }
        }
    }

    pub fn player_pose(&self) -> PlayerPose {
        player_pose(
            &self.curve,
            &self.tuning,
            self.state.distance,
            self.state.lane,
            self.player.y,
        )
    }

    /// Live segments in track order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn segment(&self, index: i64) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        let items = self
            .segments
            .iter()
            .flat_map(|segment| {
                segment.remaining().map(move |item| ItemPose {
                    segment: segment.index,
                    id: item.def.id,
                    color: item.def.color,
                    position: segment.item_world_pos(&self.curve, item),
                })
            })
            .collect();

        FrameSnapshot {
            state: &self.state,
            player: self.player_pose(),
            airborne: self.player.airborne,
            window: (self.window.start, self.window.end),
            items,
        }
    }

    /// Report for a finished run
    pub fn summary(&self) -> Option<RunSummary> {
        (self.state.status == GameStatus::Ended).then(|| RunSummary::from_state(&self.state))
    }
}
