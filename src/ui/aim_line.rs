//! Aim line from the resting ball to the pointer

use bevy::prelude::*;

use crate::constants::AIM_LINE_COLOR;
use crate::helpers::screen_to_world;
use crate::input::PointerInput;
use crate::simulation::Simulation;

/// Endpoints of the aim line in screen coordinates, or `None` while the
/// ball is airborne or the pointer position is unknown
pub fn aim_segment(sim: &Simulation, input: &PointerInput) -> Option<(Vec2, Vec2)> {
    if sim.is_shooting() {
        return None;
    }
    input.cursor.map(|cursor| (sim.ball, cursor))
}

/// Draw the aim line while idle
pub fn draw_aim_line(mut gizmos: Gizmos, sim: Res<Simulation>, input: Res<PointerInput>) {
    let Some((ball, cursor)) = aim_segment(&sim, &input) else {
        return;
    };
    gizmos.line_2d(screen_to_world(ball), screen_to_world(cursor), AIM_LINE_COLOR);
}
