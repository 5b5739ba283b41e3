//! Projectile - a ball launched by mouse drag, built with Bevy
//!
//! The simulation (kinematics, gesture math, fixed-step state machine) runs
//! without a window; the UI module only mirrors it on screen.

// Core modules
pub mod constants;
pub mod helpers;
pub mod simulation;
pub mod snapshot;

// Game logic modules
pub mod ball;
pub mod input;
pub mod shooting;
pub mod ui;

// Re-export commonly used types for convenience
pub use ball::{Ball, apex_time, ball_image, next_position, rasterize_ball};
pub use constants::*;
pub use helpers::*;
pub use input::PointerInput;
pub use shooting::{LastShotInfo, Launch, launch_angle, launch_power};
pub use simulation::{
    FlightPhase, HeadlessAppBuilder, Simulation, SimulationPlugin, TickOutcome, run_ticks,
};
pub use snapshot::ShotSnapshot;
