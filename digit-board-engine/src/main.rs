use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod tools;

use engine::{
    app_state::AppState,
    board::create_board,
    camera::{OrbitCamera, orbit_camera_controller},
    config::{BoardConfig, BoardConfigLoader, resolve_board_config, start_config_load},
    digits::{spawn_digits, sync_digit_transforms},
    scene::setup_scene,
};
use tools::digit_control::DigitControlPlugin;
use tools::digit_control::transform_commands::rotate_selected_digit;
use tools::game_ui::GameUiPlugin;
use tools::progress::{GameProgress, track_progress};

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<BoardConfig>::new(&["board.json"]))
        .add_plugins(DigitControlPlugin)
        .add_plugins(GameUiPlugin)
        .init_state::<AppState>()
        .init_resource::<BoardConfigLoader>()
        .init_resource::<OrbitCamera>()
        .init_resource::<GameProgress>()
        .add_systems(Startup, (setup_scene, start_config_load))
        .add_systems(
            Update,
            resolve_board_config.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), (create_board, spawn_digits))
        .add_systems(
            Update,
            (
                orbit_camera_controller.after(rotate_selected_digit),
                sync_digit_transforms,
                track_progress,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: "Digit Board".into(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Digit Board".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
