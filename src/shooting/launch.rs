//! Launch parameters and the launch system

use bevy::prelude::*;

use crate::ball::next_position;
use crate::input::PointerInput;
use crate::shooting::{launch_angle, launch_power};
use crate::simulation::Simulation;

/// Parameters of a shot in flight, captured when the pointer is pressed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    /// Ball position at launch (drag start)
    pub start: Vec2,
    /// Pointer position at launch (drag end)
    pub target: Vec2,
    pub power: f32,
    /// Radians in [0, 2π), 0 = right, π/2 = up
    pub angle: f32,
    /// Simulation time since launch
    pub elapsed: f32,
}

impl Launch {
    /// Derive a launch from a drag between the ball and the pointer
    pub fn from_drag(start: Vec2, target: Vec2) -> Self {
        Self {
            start,
            target,
            power: launch_power(start, target),
            angle: launch_angle(start, target),
            elapsed: 0.0,
        }
    }

    /// Ball position at the current elapsed time
    pub fn position(&self) -> Vec2 {
        next_position(self.start, self.power, self.angle, self.elapsed)
    }
}

/// Information about the most recent shot (for logging and tests)
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct LastShotInfo {
    pub shots_fired: u32,
    pub start: Vec2,
    pub target: Vec2,
    pub power: f32,
    pub angle_degrees: f32,
    /// Filled in when the ball lands
    pub flight_time: Option<f32>,
    pub landing: Option<Vec2>,
}

impl LastShotInfo {
    pub fn record_launch(&mut self, launch: &Launch) {
        *self = LastShotInfo {
            shots_fired: self.shots_fired.saturating_add(1),
            start: launch.start,
            target: launch.target,
            power: launch.power,
            angle_degrees: launch.angle.to_degrees(),
            flight_time: None,
            landing: None,
        };
    }

    pub fn record_landing(&mut self, landing: Vec2, flight_time: f32) {
        self.landing = Some(landing);
        self.flight_time = Some(flight_time);
    }
}

/// Fire the ball when a press is pending. Presses while airborne are dropped.
pub fn launch_ball(
    mut input: ResMut<PointerInput>,
    mut sim: ResMut<Simulation>,
    mut shot_info: ResMut<LastShotInfo>,
) {
    if !input.press_pending {
        return;
    }

    // Consume the press
    input.press_pending = false;

    let Some(target) = input.cursor else {
        debug!("Press ignored: pointer has not entered the window");
        return;
    };

    let Some(launch) = sim.launch(target) else {
        debug!("Press ignored: ball is airborne");
        return;
    };

    info!(
        "Launch from ({:.1}, {:.1}) power {:.2} angle {:.1}°",
        launch.start.x,
        launch.start.y,
        launch.power,
        launch.angle.to_degrees()
    );
    shot_info.record_launch(&launch);
}
