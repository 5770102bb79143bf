/// Application lifecycle states.
pub mod app_state;

/// Board model: placement cells, bounds, occupancy, and board meshes.
pub mod board;

/// Orbit camera resource, controller, and cursor ray helpers.
pub mod camera;

/// Board geometry configuration, loadable as a JSON asset.
pub mod config;

/// Digit pieces: authoritative registry, segment meshes, visual sync.
pub mod digits;

/// Lighting, floor, and clear color.
pub mod scene;
