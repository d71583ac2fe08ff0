//! Runner body: jump kinematics and world pose
//!
//! Jumping is a plain impulse plus constant gravity; there is no general
//! physics here.

use glam::Vec3;
use serde::Serialize;

use super::curve::TrackCurve;
use crate::lane_to_x;
use crate::tuning::Tuning;

/// Vertical motion of the runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Player {
    /// Center height
    pub y: f32,
    /// Vertical velocity
    pub vy: f32,
    pub airborne: bool,
    ground_y: f32,
}

impl Player {
    pub fn new(ground_y: f32) -> Self {
        Self {
            y: ground_y,
            vy: 0.0,
            airborne: false,
            ground_y,
        }
    }

    /// Start a jump; ignored while already in the air
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vy = impulse;
        self.airborne = true;
        true
    }

    /// Integrate `dt` seconds of flight
    pub fn step(&mut self, gravity: f32, dt: f32) {
        if !self.airborne {
            return;
        }
        self.y += self.vy * dt;
        self.vy -= gravity * dt;
        if self.y <= self.ground_y {
            self.y = self.ground_y;
            self.vy = 0.0;
            self.airborne = false;
        }
    }
}

/// Player placement in the world for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerPose {
    pub position: Vec3,
    pub heading: f32,
}

/// Where the runner stands at a given distance, lane and height
pub fn player_pose(curve: &TrackCurve, tuning: &Tuning, distance: f32, lane: i32, y: f32) -> PlayerPose {
    let z = -distance;
    let sample = curve.offset(z);
    PlayerPose {
        position: Vec3::new(sample.lateral_x + lane_to_x(lane, tuning.lane_width), y, z),
        heading: sample.heading,
    }
}
