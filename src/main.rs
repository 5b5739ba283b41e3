//! Projectile - a ball launched by mouse drag, built with Bevy
//!
//! Main entry point: window setup and system registration.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use projectile::{SimulationPlugin, constants::*, input, ui};

fn main() -> AppExit {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        // Force scale factor 1.0 so one world unit is one window unit
                        resolution: WindowResolution::new(
                            WINDOW_WIDTH as u32,
                            WINDOW_HEIGHT as u32,
                        )
                        .with_scale_factor_override(1.0),
                        title: WINDOW_TITLE.into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                // Small pixel-art ball texture: keep edges crisp
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Fixed 200 Hz tick: advance flight, then consume presses
        .add_plugins(SimulationPlugin)
        .add_systems(Startup, ui::setup_scene)
        // Frame: capture input, then mirror the simulation on screen
        .add_systems(
            Update,
            (
                input::capture_input,
                input::log_quit_requests,
                ui::sync_ball_sprite,
                ui::draw_aim_line,
            )
                .chain(),
        )
        .run()
}
