use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::state::{DragSession, GameReset, PieceStateChanged, ProgressChanged, ScrollCapture};
use crate::engine::board::BoardLayout;
use crate::engine::digits::{DIGIT_COUNT, DigitRegistry, PieceState};

/// Wheel rotates the selected digit a quarter turn per notch; Shift+wheel
/// flips instead. Either claims the scroll so the camera skips its dolly
/// that frame. Q and E rotate from the keyboard.
pub fn rotate_selected_digit(
    mut wheel: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    mut registry: ResMut<DigitRegistry>,
    mut capture: ResMut<ScrollCapture>,
) {
    capture.lock_zoom_this_frame = false;

    if registry.selected_value().is_none() {
        // Drop pending scroll so a stale notch cannot rotate the next
        // selection a frame later.
        wheel.clear();
        return;
    }

    let mut scroll = 0.0;
    for ev in wheel.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    if scroll.abs() > f32::EPSILON {
        capture.lock_zoom_this_frame = true;
        if shift {
            registry.flip_selected();
        } else {
            registry.rotate_selected(if scroll > 0.0 { 1 } else { -1 });
        }
    }

    if keys.just_pressed(KeyCode::KeyE) {
        registry.rotate_selected(1);
    }
    if keys.just_pressed(KeyCode::KeyQ) {
        registry.rotate_selected(-1);
    }
}

/// Right-click or F flips the selected digit.
pub fn flip_selected_digit(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut registry: ResMut<DigitRegistry>,
) {
    if buttons.just_pressed(MouseButton::Right) || keys.just_pressed(KeyCode::KeyF) {
        registry.flip_selected();
    }
}

pub fn reset_on_key(keys: Res<ButtonInput<KeyCode>>, mut resets: EventWriter<GameReset>) {
    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(GameReset);
    }
}

/// Applies a game reset: every piece home, cells freed, session cleared.
/// The registry method gives the reset its all-or-nothing shape.
pub fn apply_game_reset(
    mut resets: EventReader<GameReset>,
    mut registry: ResMut<DigitRegistry>,
    mut board: ResMut<BoardLayout>,
    mut session: ResMut<DragSession>,
    mut state_events: EventWriter<PieceStateChanged>,
    mut progress_events: EventWriter<ProgressChanged>,
) {
    if resets.is_empty() {
        return;
    }
    resets.clear();

    registry.reset_all();
    board.release_all();
    session.clear();
    info!("game reset");
    for value in 0..DIGIT_COUNT as u8 {
        state_events.write(PieceStateChanged {
            value,
            state: PieceState::Normal,
        });
    }
    progress_events.write(ProgressChanged {
        placed: 0,
        total: DIGIT_COUNT,
    });
}
