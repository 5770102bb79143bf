use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::app_state::AppState;
use constants::board::{
    BOARD_DEPTH, BOARD_HEIGHT, BOARD_WIDTH, CELL_GAP, CELL_SIZE, GRID_COLS, GRID_ROWS,
};

/// Board geometry, loadable from `assets/default.board.json`. Falls back to
/// the compiled-in defaults when the asset is missing or malformed.
#[derive(Asset, Resource, TypePath, Serialize, Deserialize, Clone, Debug)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub cell_gap: f32,
    pub board_width: f32,
    pub board_height: f32,
    pub board_depth: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            cell_size: CELL_SIZE,
            cell_gap: CELL_GAP,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            board_depth: BOARD_DEPTH,
        }
    }
}

impl BoardConfig {
    pub fn top_y(&self) -> f32 {
        self.board_depth / 2.0
    }
}

#[derive(Resource, Default)]
pub struct BoardConfigLoader {
    pub handle: Option<Handle<BoardConfig>>,
    pub resolved: bool,
}

pub fn start_config_load(mut loader: ResMut<BoardConfigLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load("default.board.json"));
}

/// Resolves the board config once the asset settles, then advances the app
/// into `Running`. A failed load is the one user-impacting initialization
/// path; it degrades to the compiled-in defaults rather than aborting.
pub fn resolve_board_config(
    mut loader: ResMut<BoardConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<BoardConfig>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loader.resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    match asset_server.load_state(handle.id()) {
        LoadState::Loaded => {
            let Some(config) = configs.get(&handle) else {
                return;
            };
            info!(
                "board config loaded: {}x{} grid on a {}x{} board",
                config.rows, config.cols, config.board_width, config.board_height
            );
            commands.insert_resource(config.clone());
            loader.resolved = true;
            next_state.set(AppState::Running);
        }
        LoadState::Failed(_) => {
            error!("board config failed to load, using built-in defaults");
            commands.insert_resource(BoardConfig::default());
            loader.resolved = true;
            next_state.set(AppState::Running);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, GRID_ROWS);
        assert_eq!(config.cols, GRID_COLS);
        assert_eq!(config.board_width, BOARD_WIDTH);
        assert_eq!(config.top_y(), BOARD_DEPTH / 2.0);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = BoardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows, config.rows);
        assert_eq!(back.cell_size, config.cell_size);
    }
}
