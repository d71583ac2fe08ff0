//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Intents applied in queue order before each tick
//! - Stable iteration order (by segment index)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod collision;
pub mod curve;
pub mod intent;
pub mod player;
pub mod segment;
pub mod state;
pub mod summary;
pub mod tick;
pub mod track;
pub mod world;

pub use catalog::{
    CatalogEntry, ItemCategory, ItemDef, ItemNote, all_items, encyclopedia, find_item, random_item,
};
pub use collision::{PickupProbe, check_collision, collect_hits};
pub use curve::{CurveSample, TrackCurve};
pub use intent::{Intent, IntentQueue};
pub use player::{Player, PlayerPose, player_pose};
pub use segment::{PlacedItem, Segment, SegmentCache, generate_segment};
pub use state::{GameState, GameStatus, Vitals};
pub use summary::{EndCause, Insight, RunSummary};
pub use tick::tick;
pub use track::TrackWindow;
pub use world::{FrameSnapshot, ItemPose, World};
