//! Input module - PointerInput resource and capture systems

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};

/// Buffered pointer state, captured in Update and consumed by the fixed tick
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PointerInput {
    /// Last known pointer position in window coordinates (top-left origin).
    /// Kept while the cursor is outside the window.
    pub cursor: Option<Vec2>,
    /// A button was pressed and no tick has consumed it yet
    pub press_pending: bool,
}

/// Poll the pointer position and latch button presses until consumed
pub fn capture_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<PointerInput>,
) {
    if let Ok(window) = windows.single()
        && let Some(position) = window.cursor_position()
    {
        input.cursor = Some(position);
    }

    // Any button starts a shot
    if mouse.get_just_pressed().next().is_some() {
        input.press_pending = true;
    }
}

/// Log quit requests. The window plugin closes the window and exits.
pub fn log_quit_requests(mut close_requests: MessageReader<WindowCloseRequested>) {
    for request in close_requests.read() {
        info!("Quit requested for window {:?}, shutting down", request.window);
    }
}
