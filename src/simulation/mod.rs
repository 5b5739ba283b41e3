//! Simulation module - state, fixed-step systems, and headless app builder

mod app_builder;
mod state;
mod systems;

pub use app_builder::*;
pub use state::*;
pub use systems::*;

use bevy::prelude::*;

use crate::constants::TICK_RATE_HZ;
use crate::input::PointerInput;
use crate::shooting::{LastShotInfo, launch_ball};

/// Simulation resources plus the fixed-rate tick.
///
/// Each tick advances a ball in flight first and then consumes any pending
/// press, so a fresh launch is seen at the pad for one frame before moving.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .init_resource::<Simulation>()
            .init_resource::<PointerInput>()
            .init_resource::<LastShotInfo>()
            .add_systems(FixedUpdate, (advance_flight, launch_ball).chain());
    }
}
