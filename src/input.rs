//! Keyboard input handling.
//!
//! Cursor moves and object edits fire once per key press; zoom adjusts
//! continuously every frame while Shift+Up/Down are held.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::constants::*;

/// Input state tracking
pub struct InputState {
    pub keys_pressed: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing input for one frame
#[derive(Default)]
pub struct InputResult {
    /// Cursor movement to execute (dx, dy), cells
    pub movement: Option<(i32, i32)>,
    /// Place an object at the cursor
    pub add_object: bool,
    /// Remove the object at the cursor
    pub remove_object: bool,
    /// Zoom level adjustment while held, per frame
    pub zoom_delta: f32,
}

/// Process keyboard input and return actions to take
pub fn process_keyboard(input: &mut InputState) -> InputResult {
    let mut result = InputResult::default();

    let shift_held = input.keys_pressed.contains(&KeyCode::ShiftLeft)
        || input.keys_pressed.contains(&KeyCode::ShiftRight);

    if shift_held {
        // Held-continuous zoom; discrete keys are left alone while zooming.
        if input.keys_pressed.contains(&KeyCode::ArrowUp) {
            result.zoom_delta += ZOOM_HELD_STEP;
        }
        if input.keys_pressed.contains(&KeyCode::ArrowDown) {
            result.zoom_delta -= ZOOM_HELD_STEP;
        }
        return result;
    }

    // Movement (only process once per key press; remove consumes the press)
    if input.keys_pressed.remove(&KeyCode::ArrowUp) {
        result.movement = Some((0, -1));
    } else if input.keys_pressed.remove(&KeyCode::ArrowDown) {
        result.movement = Some((0, 1));
    } else if input.keys_pressed.remove(&KeyCode::ArrowLeft) {
        result.movement = Some((-1, 0));
    } else if input.keys_pressed.remove(&KeyCode::ArrowRight) {
        result.movement = Some((1, 0));
    }

    if input.keys_pressed.remove(&KeyCode::Enter) {
        result.add_object = true;
    }
    if input.keys_pressed.remove(&KeyCode::Backspace) {
        result.remove_object = true;
    }

    result
}
