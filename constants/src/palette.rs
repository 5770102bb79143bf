use bevy::color::{Color, Srgba};

const fn srgb(red: f32, green: f32, blue: f32) -> Color {
    Color::Srgba(Srgba {
        red,
        green,
        blue,
        alpha: 1.0,
    })
}

pub const BOARD: Color = srgb(0.941, 0.941, 0.941);
pub const BOARD_BORDER: Color = srgb(0.667, 0.667, 0.667);
pub const CELL_HOLE: Color = srgb(0.067, 0.067, 0.067);
pub const FLOOR: Color = srgb(0.878, 0.910, 0.965);
pub const BACKGROUND: Color = srgb(0.902, 0.941, 1.0);

/// Digit body colors by interaction state.
pub const DIGIT: Color = srgb(0.259, 0.522, 0.957);
pub const DIGIT_SELECTED: Color = srgb(0.051, 0.278, 0.631);
pub const DIGIT_PLACED: Color = srgb(0.204, 0.659, 0.325);

/// UI chrome.
pub const PANEL: Color = srgb(0.10, 0.11, 0.13);
pub const BUTTON: Color = srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVER: Color = srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = srgb(0.18, 0.20, 0.24);
pub const PROGRESS_TRACK: Color = srgb(0.14, 0.16, 0.20);
pub const PROGRESS_FILL: Color = srgb(0.204, 0.659, 0.325);
