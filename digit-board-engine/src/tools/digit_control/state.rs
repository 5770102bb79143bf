use bevy::prelude::*;

use crate::engine::digits::PieceState;

/// Transient pointer-drag state. One session exists per game instance;
/// single selection in the registry is what keeps drags exclusive.
#[derive(Resource, Default)]
pub struct DragSession {
    pub dragging: bool,
    /// Grab point preserved relative to the piece origin for the whole drag.
    pub anchor_offset: Vec3,
    /// Camera-facing drag plane, refreshed at the piece on every move.
    pub plane_origin: Vec3,
    pub plane_normal: Vec3,
    pub initial_height: f32,
    pub height_modifier: f32,
    pub last_cursor_ndc_y: f32,
    /// Set from a successful digit pick until pointer release; the orbit
    /// camera ignores input while this holds.
    pub pointer_captured: bool,
}

impl DragSession {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raised on frames where the wheel rotated a digit, so the camera skips
/// its dolly for that same wheel input.
#[derive(Resource, Default)]
pub struct ScrollCapture {
    pub lock_zoom_this_frame: bool,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PieceStateChanged {
    pub value: u8,
    pub state: PieceState,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ProgressChanged {
    pub placed: usize,
    pub total: usize,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct GameCompleted;

#[derive(Event, Debug, Clone, Copy)]
pub struct GameReset;
