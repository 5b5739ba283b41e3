//! Camera and ball sprite

use bevy::prelude::*;

use crate::ball::{Ball, ball_image};
use crate::constants::*;
use crate::helpers::screen_to_world;
use crate::simulation::Simulation;

/// Spawn the camera and the ball sprite
pub fn setup_scene(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    info!(
        "Opening {}x{} window, simulation at {} Hz",
        WINDOW_WIDTH, WINDOW_HEIGHT, TICK_RATE_HZ
    );

    commands.spawn(Camera2d);

    let ball = Ball::default();
    let texture = images.add(ball_image(&ball));

    commands.spawn((
        Sprite::from_image(texture),
        Transform::from_translation(screen_to_world(LAUNCH_PAD).extend(BALL_Z)),
        ball,
    ));
}

/// Move the ball sprite to the simulated position
pub fn sync_ball_sprite(sim: Res<Simulation>, mut query: Query<&mut Transform, With<Ball>>) {
    for mut transform in &mut query {
        transform.translation = screen_to_world(sim.ball).extend(BALL_Z);
    }
}
