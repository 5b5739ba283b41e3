//! Shooting module - drag gesture, launch parameters, and shot records

mod aim;
mod launch;

pub use aim::*;
pub use launch::*;
