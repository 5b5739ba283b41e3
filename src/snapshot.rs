//! Shot snapshots - serializable record of a completed shot
//!
//! Written to the debug log as JSON when the ball lands.

use serde::Serialize;

use crate::shooting::LastShotInfo;

/// A finished shot, with positions as `[x, y]` in screen coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotSnapshot {
    pub shot: u32,
    pub start: [f32; 2],
    pub target: [f32; 2],
    pub power: f32,
    pub angle_degrees: f32,
    pub flight_time: f32,
    pub landing: [f32; 2],
}

impl ShotSnapshot {
    /// Build a snapshot from the last shot, if it has landed
    pub fn from_shot(info: &LastShotInfo) -> Option<Self> {
        let landing = info.landing?;
        let flight_time = info.flight_time?;
        Some(Self {
            shot: info.shots_fired,
            start: info.start.to_array(),
            target: info.target.to_array(),
            power: info.power,
            angle_degrees: info.angle_degrees,
            flight_time,
            landing: landing.to_array(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
