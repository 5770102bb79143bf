/// Digit interaction controller: pick, drag, rotate/flip, place, reset.
pub mod digit_control;

/// HUD: progress bar, reset button, completion message, instructions.
pub mod game_ui;

/// Completion tracking derived from the piece registry.
pub mod progress;
