//! Drag gesture to launch parameter conversion
//!
//! A drag runs from the ball (start) to the pointer (end), both in screen
//! coordinates where y grows downward.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::constants::POWER_SCALE;

/// Launch speed for a drag: its length scaled down by [`POWER_SCALE`]
pub fn launch_power(start: Vec2, end: Vec2) -> f32 {
    start.distance(end) / POWER_SCALE
}

/// Launch angle for a drag in [0, 2π): 0 = right, π/2 = up, π = left.
///
/// The single-branch arctangent is corrected per screen quadrant, flipping
/// screen y so "above the ball" is a positive angle.
pub fn launch_angle(start: Vec2, end: Vec2) -> f32 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0.0 {
        // Vertical drag. A zero-length drag fires straight up.
        return if dy > 0.0 { 3.0 * FRAC_PI_2 } else { FRAC_PI_2 };
    }

    let raw = (dy / dx).atan();

    let angle = match (dx > 0.0, dy > 0.0) {
        (true, false) => raw.abs(), // Right, above (or level)
        (false, false) => PI - raw, // Left, above (or level)
        (false, true) => PI + raw.abs(), // Left, below
        (true, true) => TAU - raw, // Right, below
    };

    // TAU - tiny raw can round up to TAU itself
    if angle >= TAU { 0.0 } else { angle }
}
