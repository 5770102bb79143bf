use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::f32::consts::{PI, TAU};

use super::drag::{drag_to, finish_release, press_at};
use super::pick::resolve_digit_pick;
use super::state::{DragSession, PieceStateChanged, ProgressChanged};
use crate::engine::board::BoardLayout;
use crate::engine::camera::{pointer_ndc_y, pointer_ray};
use crate::engine::digits::{DigitRegistry, DigitSegment, PieceState, SegmentSize};
use constants::interaction::{
    TOUCH_DOUBLE_TAP_SECONDS, TOUCH_TAP_MAX_SECONDS, TOUCH_TAP_MOVE_TOLERANCE,
    TOUCH_TWIST_PER_STEP,
};

/// Accumulates the angle of the segment between two touch points and pays
/// it out in whole quarter-turn steps, carrying the remainder.
#[derive(Default)]
pub struct TwistTracker {
    last_angle: Option<f32>,
    accumulated: f32,
}

impl TwistTracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feeds the current two-finger angle and returns the whole steps
    /// crossed since the last payout. Deltas are taken along the shortest
    /// arc, so crossing the ±π seam never reads as a full turn.
    pub fn advance(&mut self, angle: f32) -> i32 {
        let Some(previous) = self.last_angle else {
            self.last_angle = Some(angle);
            return 0;
        };
        let mut delta = angle - previous;
        if delta > PI {
            delta -= TAU;
        }
        if delta < -PI {
            delta += TAU;
        }
        self.last_angle = Some(angle);
        self.accumulated += delta;

        let steps = (self.accumulated / TOUCH_TWIST_PER_STEP).trunc() as i32;
        if steps != 0 {
            self.accumulated -= steps as f32 * TOUCH_TWIST_PER_STEP;
        }
        steps
    }
}

/// Cross-frame touch bookkeeping: tap timing for double-tap flips plus the
/// two-finger twist accumulator.
#[derive(Resource, Default)]
pub struct TouchGesture {
    pub twist: TwistTracker,
    press_time: f32,
    press_position: Option<Vec2>,
    last_tap_time: Option<f32>,
    last_tap_position: Vec2,
}

/// Single-finger touch drives the same press/move/release commands as the
/// mouse. A short motionless touch is a tap: it leaves the digit selected
/// in place instead of dropping it, and a second quick tap on the same
/// digit flips it.
pub fn handle_touch_pointer(
    touches: Res<Touches>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    segments: Query<(&DigitSegment, &GlobalTransform, &SegmentSize)>,
    mut board: ResMut<BoardLayout>,
    mut registry: ResMut<DigitRegistry>,
    mut session: ResMut<DragSession>,
    mut gesture: ResMut<TouchGesture>,
    mut state_events: EventWriter<PieceStateChanged>,
    mut progress_events: EventWriter<ProgressChanged>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let now = time.elapsed_secs();

    if touches.iter().count() == 1 {
        let Some(touch) = touches.iter().next() else {
            return;
        };
        let position = touch.position();
        if touches.just_pressed(touch.id()) {
            gesture.press_time = now;
            gesture.press_position = Some(position);
            if let Some(ray) = pointer_ray(camera, camera_transform, position) {
                press_at(
                    ray,
                    camera_transform.forward().as_vec3(),
                    pointer_ndc_y(window, position),
                    &segments,
                    &mut registry,
                    &mut session,
                    &mut state_events,
                );
            }
        } else if session.dragging {
            if let Some(ray) = pointer_ray(camera, camera_transform, position) {
                drag_to(
                    ray,
                    camera_transform.forward().as_vec3(),
                    pointer_ndc_y(window, position),
                    &board,
                    &mut registry,
                    &mut session,
                );
            }
        }
    }

    for touch in touches.iter_just_released() {
        let position = touch.position();
        let was_tap = now - gesture.press_time < TOUCH_TAP_MAX_SECONDS
            && gesture
                .press_position
                .is_some_and(|start| position.distance(start) < TOUCH_TAP_MOVE_TOLERANCE);
        gesture.press_position = None;

        if was_tap {
            let double = gesture
                .last_tap_time
                .is_some_and(|earlier| now - earlier < TOUCH_DOUBLE_TAP_SECONDS)
                && position.distance(gesture.last_tap_position) < TOUCH_TAP_MOVE_TOLERANCE;
            gesture.last_tap_time = Some(now);
            gesture.last_tap_position = position;

            let tapped = pointer_ray(camera, camera_transform, position)
                .and_then(|ray| resolve_digit_pick(&ray, &segments));
            if double && tapped.is_some() && tapped == registry.selected_value() {
                registry.flip_selected();
            }
            // A tap keeps the selection; only a sustained drag drops.
            session.clear();
        } else if session.dragging {
            finish_release(
                &mut board,
                &mut registry,
                &mut session,
                &mut state_events,
                &mut progress_events,
            );
        }
    }

    // A cancelled touch (system gesture, palm rejection) abandons the drag
    // without a placement decision.
    if session.dragging
        && touches.iter_just_canceled().next().is_some()
        && touches.iter().count() == 0
    {
        if let Some(value) = registry.return_selected_home() {
            state_events.write(PieceStateChanged {
                value,
                state: PieceState::Normal,
            });
        }
        session.clear();
    }
}

/// Two fingers twist the selected digit a quarter turn at a time.
pub fn handle_touch_twist(
    touches: Res<Touches>,
    mut registry: ResMut<DigitRegistry>,
    mut gesture: ResMut<TouchGesture>,
) {
    let mut pair: Vec<_> = touches.iter().collect();
    if pair.len() != 2 || registry.selected_value().is_none() {
        gesture.twist.reset();
        return;
    }
    // Stable finger order; map iteration order is not.
    pair.sort_by_key(|touch| touch.id());

    let span = pair[1].position() - pair[0].position();
    let steps = gesture.twist.advance(span.y.atan2(span.x));
    if steps != 0 {
        registry.rotate_selected(steps);
    }
}
