//! Fixed-step simulation systems

use bevy::prelude::*;

use crate::shooting::LastShotInfo;
use crate::simulation::{Simulation, TickOutcome};
use crate::snapshot::ShotSnapshot;

/// Advance the ball one tick and record the shot when it lands
pub fn advance_flight(mut sim: ResMut<Simulation>, mut shot_info: ResMut<LastShotInfo>) {
    let TickOutcome::Landed {
        landing,
        flight_time,
    } = sim.tick()
    else {
        return;
    };

    shot_info.record_landing(landing, flight_time);
    info!(
        "Landed at x={:.1} after {:.2} time units, back on the pad",
        landing.x, flight_time
    );

    if let Some(snapshot) = ShotSnapshot::from_shot(&shot_info) {
        match snapshot.to_json() {
            Ok(json) => debug!("Shot snapshot: {}", json),
            Err(e) => warn!("Failed to serialize shot snapshot: {}", e),
        }
    }
}
