//! Tunable constants for the projectile demo
//!
//! All window, physics and gesture values are defined here. Positions are in
//! screen coordinates: origin at the top-left corner, y grows downward.

use bevy::prelude::*;

// =============================================================================
// WINDOW
// =============================================================================

pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 500.0;
pub const WINDOW_TITLE: &str = "Projectile";

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(64.0 / 255.0, 64.0 / 255.0, 64.0 / 255.0); // Gray
pub const AIM_LINE_COLOR: Color = Color::WHITE;

/// Ball colors as RGBA bytes (rasterized into the ball texture)
pub const BALL_OUTLINE_RGBA: [u8; 4] = [0, 0, 0, 255]; // Black
pub const BALL_FILL_RGBA: [u8; 4] = [255, 255, 255, 255]; // White

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 10.0;
pub const BALL_OUTLINE_WIDTH: f32 = 1.0; // Fill disc is inset by this much
pub const BALL_Z: f32 = 1.0;

// =============================================================================
// LAUNCH PAD
// =============================================================================

/// Resting position of the ball while idle (one unit above the ground line)
pub const LAUNCH_PAD: Vec2 = Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT - BALL_RADIUS - 1.0);

/// Ball lands once its y reaches this line
pub const GROUND_Y: f32 = WINDOW_HEIGHT - BALL_RADIUS;

// =============================================================================
// PHYSICS
// =============================================================================

/// Gravity term in simulation units (tuned for SIM_TIME_STEP, not m/s²)
pub const GRAVITY: f32 = 4.9;

/// Simulation time added per fixed tick (not wall-clock seconds)
pub const SIM_TIME_STEP: f32 = 0.05;

/// Fixed tick rate of the simulation
pub const TICK_RATE_HZ: f64 = 200.0;

// =============================================================================
// GESTURE
// =============================================================================

/// Drag length is divided by this to get launch power
pub const POWER_SCALE: f32 = 8.0;
