use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Planar rotation quantum: a quarter turn per rotate command.
pub const ROTATION_STEP: f32 = FRAC_PI_2;

/// Base tilt about X that lays a digit flat against the board.
pub const BASE_TILT: f32 = -FRAC_PI_2;

/// Flip is a half turn about the digit's local Z, composed with the tilt.
pub const FLIP_ANGLE: f32 = PI;

/// World units of hover height per unit of vertical cursor travel (NDC).
pub const DRAG_HEIGHT_SENSITIVITY: f32 = 5.0;

/// Minimum clearance above the board top while dragging.
pub const DRAG_MIN_CLEARANCE: f32 = 0.1;

/// Cosmetic hover bob applied to the selected digit's rendered transform.
pub const SELECTED_BOB_AMPLITUDE: f32 = 0.08;
pub const SELECTED_BOB_FREQUENCY: f32 = 2.0;

/// A touch released within this window, having barely moved, is a tap.
pub const TOUCH_TAP_MAX_SECONDS: f32 = 0.2;

/// Two taps closer together than this flip the selected digit.
pub const TOUCH_DOUBLE_TAP_SECONDS: f32 = 0.3;

/// Maximum finger travel (logical pixels) for a touch to still count as a
/// tap, and for two taps to count as the same spot.
pub const TOUCH_TAP_MOVE_TOLERANCE: f32 = 10.0;

/// Two-finger twist angle that pays out one quarter-turn rotation step.
pub const TOUCH_TWIST_PER_STEP: f32 = FRAC_PI_4;

/// Orbit camera tuning.
pub const CAMERA_MIN_DISTANCE: f32 = 6.0;
pub const CAMERA_MAX_DISTANCE: f32 = 40.0;
pub const CAMERA_MIN_PITCH: f32 = -1.45;
pub const CAMERA_MAX_PITCH: f32 = -0.15;
pub const CAMERA_SMOOTHING: f32 = 12.0;
