//! Digit interaction and placement controller.
//!
//! The session moves through three states, encoded by the registry's
//! selection slot and the drag session:
//!
//! ```text
//! Idle --pointer-down on unplaced digit--> Selected + Dragging
//! Dragging --pointer-move--> Dragging        (follow camera-facing plane)
//! Dragging --pointer-up inside board--> Idle (snap to nearest free cell)
//! Dragging --pointer-up outside board--> Idle (return home)
//! Selected/Dragging --wheel / Q,E / two-finger twist--> rotate
//! Selected/Dragging --right-click / Shift+wheel / F--> flip
//! Selected --double-tap on the digit--> flip
//! any --R / reset button--> Idle, all pieces home
//! ```
//!
//! Mouse and single-finger touch feed the same press/move/release path; a
//! short motionless touch is a tap and keeps the selection instead of
//! dropping it. Placed digits are inert: picking one is a defined no-op,
//! and nothing un-places a digit short of a full reset. Misses and
//! out-of-bounds drops are outcomes, not errors.

/// Pointer lifecycle: press picks and starts the drag, move follows the
/// drag plane, release commits or rejects placement. The mouse systems
/// live here; touch feeds the same core functions.
pub mod drag;

/// Consumes `PieceStateChanged` and repaints digit materials.
pub mod feedback;

/// Nearest-hit resolution of a cursor ray against digit segments.
pub mod pick;

/// Pure placement policy: bounds test plus nearest-free-cell snap.
pub mod placement;

/// Ray intersection primitives shared by picking and dragging.
pub mod ray;

/// Session resource, scroll capture, and the controller's event types.
pub mod state;

/// Touch adapter: single-finger presses reuse the pointer path, two
/// fingers twist to rotate, double-tap flips.
pub mod touch;

/// Rotate, flip, and reset command systems.
pub mod transform_commands;

use bevy::prelude::*;

use crate::engine::app_state::AppState;
use drag::{handle_pointer_down, handle_pointer_drag, handle_pointer_release};
use feedback::apply_piece_state_colors;
use state::{DragSession, GameCompleted, GameReset, PieceStateChanged, ProgressChanged, ScrollCapture};
use touch::{TouchGesture, handle_touch_pointer, handle_touch_twist};
use transform_commands::{apply_game_reset, flip_selected_digit, reset_on_key, rotate_selected_digit};

pub struct DigitControlPlugin;

impl Plugin for DigitControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragSession>()
            .init_resource::<ScrollCapture>()
            .init_resource::<TouchGesture>()
            .add_event::<PieceStateChanged>()
            .add_event::<ProgressChanged>()
            .add_event::<GameCompleted>()
            .add_event::<GameReset>()
            .add_systems(
                Update,
                (
                    rotate_selected_digit,
                    flip_selected_digit,
                    handle_touch_twist,
                    handle_pointer_down,
                    handle_pointer_drag,
                    handle_pointer_release,
                    handle_touch_pointer,
                    reset_on_key,
                    apply_game_reset,
                    apply_piece_state_colors,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
