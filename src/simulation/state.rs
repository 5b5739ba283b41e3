//! Simulation state and the fixed-step tick
//!
//! Everything here is plain data, so the launch/flight/landing cycle can be
//! driven and inspected without a window.

use bevy::prelude::*;

use crate::constants::*;
use crate::shooting::Launch;

/// Whether the ball waits on the launch pad or is in the air
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FlightPhase {
    #[default]
    Idle,
    Airborne(Launch),
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing to advance
    Idle,
    /// Ball moved to this position
    InFlight(Vec2),
    /// Ball reached the ground at `landing` and was returned to the pad
    Landed { landing: Vec2, flight_time: f32 },
}

/// The whole simulation: ball position plus flight phase
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Ball center in screen coordinates
    pub ball: Vec2,
    pub phase: FlightPhase,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            ball: LAUNCH_PAD,
            phase: FlightPhase::Idle,
        }
    }
}

impl Simulation {
    /// True while the ball is in flight
    pub fn is_shooting(&self) -> bool {
        matches!(self.phase, FlightPhase::Airborne(_))
    }

    /// Current launch parameters, if airborne
    pub fn launch_params(&self) -> Option<&Launch> {
        match &self.phase {
            FlightPhase::Airborne(launch) => Some(launch),
            FlightPhase::Idle => None,
        }
    }

    /// Launch the ball toward `pointer`. Returns `None` (and changes
    /// nothing) if the ball is already airborne.
    pub fn launch(&mut self, pointer: Vec2) -> Option<Launch> {
        if self.is_shooting() {
            return None;
        }
        let launch = Launch::from_drag(self.ball, pointer);
        self.phase = FlightPhase::Airborne(launch);
        Some(launch)
    }

    /// Advance one fixed step of [`SIM_TIME_STEP`].
    ///
    /// A step that would put the ball at or below the ground line snaps it
    /// back to [`LAUNCH_PAD`] and ends the flight.
    pub fn tick(&mut self) -> TickOutcome {
        let FlightPhase::Airborne(launch) = &mut self.phase else {
            return TickOutcome::Idle;
        };

        launch.elapsed += SIM_TIME_STEP;
        let position = launch.position();

        if position.y >= GROUND_Y {
            let flight_time = launch.elapsed;
            self.ball = LAUNCH_PAD;
            self.phase = FlightPhase::Idle;
            return TickOutcome::Landed {
                landing: position,
                flight_time,
            };
        }

        self.ball = position;
        TickOutcome::InFlight(position)
    }
}
