use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::tools::digit_control::state::{DragSession, ScrollCapture};
use constants::interaction::{
    CAMERA_MAX_DISTANCE, CAMERA_MAX_PITCH, CAMERA_MIN_DISTANCE, CAMERA_MIN_PITCH, CAMERA_SMOOTHING,
};

/// Orbit rig around the board centre. The camera entity's transform eases
/// toward the pose this resource describes.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 14.0,
            yaw: 0.0,
            pitch: -0.78,
        }
    }
}

impl OrbitCamera {
    pub fn target_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn target_translation(&self) -> Vec3 {
        self.focus + self.target_rotation() * Vec3::Z * self.distance
    }
}

/// Casts a window-space position through the camera into world space.
/// Mouse cursors and touch points share this path. `None` covers
/// degenerate projections.
pub fn pointer_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    position: Vec2,
) -> Option<Ray3d> {
    camera.viewport_to_world(camera_transform, position).ok()
}

/// Casts the cursor through the camera; `None` also covers "cursor
/// outside the window".
pub fn cursor_ray(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Ray3d> {
    pointer_ray(camera, camera_transform, window.cursor_position()?)
}

/// Pointer height in normalized device coordinates, +1 at the top edge.
/// Vertical drag motion accumulates in this space so sensitivity is
/// resolution independent.
pub fn pointer_ndc_y(window: &Window, position: Vec2) -> f32 {
    1.0 - 2.0 * position.y / window.height()
}

pub fn cursor_ndc_y(window: &Window) -> f32 {
    match window.cursor_position() {
        Some(cursor) => pointer_ndc_y(window, cursor),
        None => 0.0,
    }
}

/// Left-drag orbits, wheel dollies. Input is ignored while a digit owns
/// the pointer, and the wheel is ignored on frames where it rotated a
/// digit instead.
pub fn orbit_camera_controller(
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    session: Res<DragSession>,
    capture: Res<ScrollCapture>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if buttons.pressed(MouseButton::Left) && !session.pointer_captured && mouse_delta != Vec2::ZERO
    {
        orbit.yaw -= mouse_delta.x * 0.0035;
        orbit.pitch = (orbit.pitch - mouse_delta.y * 0.0030)
            .clamp(CAMERA_MIN_PITCH, CAMERA_MAX_PITCH);
    }

    let mut scroll = 0.0;
    for ev in wheel.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll.abs() > f32::EPSILON && !capture.lock_zoom_this_frame {
        orbit.distance =
            (orbit.distance * (1.0 - scroll * 0.1)).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    let ease = (CAMERA_SMOOTHING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(orbit.target_translation(), ease);
    camera_transform.rotation = camera_transform.rotation.slerp(orbit.target_rotation(), ease);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_pose_looks_at_the_focus_point() {
        let orbit = OrbitCamera::default();
        let to_focus = (orbit.focus - orbit.target_translation()).normalize();
        let forward = orbit.target_rotation() * Vec3::NEG_Z;
        assert!(to_focus.dot(forward) > 0.999);
    }

    #[test]
    fn target_translation_keeps_the_orbit_distance() {
        let orbit = OrbitCamera {
            yaw: 1.2,
            pitch: -0.6,
            ..default()
        };
        let d = orbit.target_translation().distance(orbit.focus);
        assert!((d - orbit.distance).abs() < 1e-4);
    }
}
