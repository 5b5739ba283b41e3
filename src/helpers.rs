//! Coordinate helpers
//!
//! The simulation works in screen coordinates (origin top-left, y down).
//! The 2D camera sees world coordinates (origin at the window center, y up),
//! one unit per logical pixel.

use bevy::prelude::*;

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Convert a screen position to the world position drawn at that pixel
pub fn screen_to_world(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x - WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - screen.y)
}
