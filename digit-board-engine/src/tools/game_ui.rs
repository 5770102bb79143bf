use bevy::prelude::*;

use crate::engine::app_state::AppState;
use crate::engine::digits::DIGIT_COUNT;
use crate::tools::digit_control::state::{GameCompleted, GameReset};
use crate::tools::progress::GameProgress;
use constants::palette;

#[derive(Component)]
pub struct HudRoot;
#[derive(Component)]
pub struct ProgressFill;
#[derive(Component)]
pub struct ProgressLabel;
#[derive(Component)]
pub struct ResetButton;
#[derive(Component)]
pub struct MessageBox;
#[derive(Component)]
pub struct CloseMessageButton;

pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_hud).add_systems(
            Update,
            (
                update_progress_bar,
                reset_button_interaction,
                close_message_interaction,
                show_completion_message,
                hide_message_on_reset,
            )
                .run_if(in_state(AppState::Running)),
        );
    }
}

/// Top bar with the progress track and reset button, plus the hidden
/// completion message box.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Name::new("Hud"),
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                padding: UiRect::all(Val::Px(12.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|hud| {
            hud.spawn((
                Name::new("ProgressTrack"),
                BackgroundColor(palette::PROGRESS_TRACK),
                Node {
                    width: Val::Px(260.0),
                    height: Val::Px(18.0),
                    display: Display::Flex,
                    overflow: Overflow::clip(),
                    ..default()
                },
            ))
            .with_children(|track| {
                track.spawn((
                    ProgressFill,
                    Name::new("ProgressFill"),
                    BackgroundColor(palette::PROGRESS_FILL),
                    Node {
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                ));
            });

            hud.spawn((
                ProgressLabel,
                Name::new("ProgressLabel"),
                Text::new(format!("0 / {}", DIGIT_COUNT)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.15, 0.15, 0.2)),
            ));

            hud.spawn((
                ResetButton,
                Button,
                Name::new("ResetButton"),
                BackgroundColor(palette::BUTTON),
                BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                Node {
                    width: Val::Px(90.0),
                    height: Val::Px(30.0),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new("Reset"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            hud.spawn((
                Name::new("InstructionsHint"),
                Text::new(
                    "drag digits onto the board - wheel or Q/E rotates, \
                     right-click, F, or Shift+wheel flips, R resets",
                ),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgba(0.15, 0.15, 0.2, 0.7)),
            ));

            hud.spawn((
                Name::new("TouchHint"),
                Text::new("touch: drag to move, twist two fingers to rotate, double-tap to flip"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgba(0.15, 0.15, 0.2, 0.7)),
            ));
        });

    commands
        .spawn((
            MessageBox,
            Name::new("MessageBox"),
            BackgroundColor(palette::PANEL),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(40.0),
                margin: UiRect {
                    left: Val::Px(-160.0),
                    ..default()
                },
                width: Val::Px(320.0),
                padding: UiRect::all(Val::Px(20.0)),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|message| {
            message.spawn((
                Text::new("Board complete - every digit placed!"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            message
                .spawn((
                    CloseMessageButton,
                    Button,
                    Name::new("CloseMessage"),
                    BackgroundColor(palette::BUTTON),
                    Node {
                        width: Val::Px(80.0),
                        height: Val::Px(28.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Close"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

fn update_progress_bar(
    progress: Res<GameProgress>,
    mut fills: Query<&mut Node, With<ProgressFill>>,
    mut labels: Query<&mut Text, With<ProgressLabel>>,
) {
    if !progress.is_changed() {
        return;
    }
    if let Ok(mut node) = fills.single_mut() {
        node.width = Val::Percent(progress.fraction() * 100.0);
    }
    if let Ok(mut text) = labels.single_mut() {
        *text = Text::new(format!("{} / {}", progress.placed, progress.total));
    }
}

fn reset_button_interaction(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<ResetButton>),
    >,
    mut resets: EventWriter<GameReset>,
) {
    for (interaction, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                resets.write(GameReset);
                *background = BackgroundColor(palette::BUTTON_PRESSED);
            }
            Interaction::Hovered => *background = BackgroundColor(palette::BUTTON_HOVER),
            Interaction::None => *background = BackgroundColor(palette::BUTTON),
        }
    }
}

fn close_message_interaction(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CloseMessageButton>),
    >,
    mut boxes: Query<&mut Node, With<MessageBox>>,
) {
    for (interaction, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                if let Ok(mut node) = boxes.single_mut() {
                    node.display = Display::None;
                }
                *background = BackgroundColor(palette::BUTTON_PRESSED);
            }
            Interaction::Hovered => *background = BackgroundColor(palette::BUTTON_HOVER),
            Interaction::None => *background = BackgroundColor(palette::BUTTON),
        }
    }
}

fn show_completion_message(
    mut completed: EventReader<GameCompleted>,
    mut boxes: Query<&mut Node, With<MessageBox>>,
) {
    if completed.is_empty() {
        return;
    }
    completed.clear();
    if let Ok(mut node) = boxes.single_mut() {
        node.display = Display::Flex;
    }
}

fn hide_message_on_reset(
    mut resets: EventReader<GameReset>,
    mut boxes: Query<&mut Node, With<MessageBox>>,
) {
    if resets.is_empty() {
        return;
    }
    resets.clear();
    if let Ok(mut node) = boxes.single_mut() {
        node.display = Display::None;
    }
}
