//! UI module - scene setup, ball sprite, and aim line

mod aim_line;
mod scene;

pub use aim_line::*;
pub use scene::*;
