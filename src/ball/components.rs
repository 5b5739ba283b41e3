//! Ball-related components

use bevy::prelude::*;

use crate::constants::*;

/// The launched ball. Its position lives in [`crate::Simulation`]; this
/// component only carries what the renderer needs.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub radius: f32,
    pub outline: [u8; 4],
    pub fill: [u8; 4],
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            outline: BALL_OUTLINE_RGBA,
            fill: BALL_FILL_RGBA,
        }
    }
}
