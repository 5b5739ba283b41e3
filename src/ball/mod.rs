//! Ball module - components, kinematics, and texture generation

mod components;
mod physics;
mod texture;

pub use components::*;
pub use physics::*;
pub use texture::*;
