use bevy::prelude::*;

use super::state::PieceStateChanged;
use crate::engine::digits::{DigitBody, DigitMaterial, PieceState};
use constants::palette;

/// Repaints a digit's material when the controller announces a state
/// change. Presentation listens here instead of inspecting the registry,
/// so anything else that cares about piece state can subscribe the same
/// way.
pub fn apply_piece_state_colors(
    mut changes: EventReader<PieceStateChanged>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bodies: Query<(&DigitBody, &DigitMaterial)>,
) {
    for change in changes.read() {
        let color = match change.state {
            PieceState::Normal => palette::DIGIT,
            PieceState::Selected => palette::DIGIT_SELECTED,
            PieceState::Placed => palette::DIGIT_PLACED,
        };
        for (body, DigitMaterial(handle)) in &bodies {
            if body.value != change.value {
                continue;
            }
            if let Some(material) = materials.get_mut(handle) {
                material.base_color = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_app(value: u8) -> (App, Handle<StandardMaterial>) {
        let mut app = App::new();
        app.add_event::<PieceStateChanged>();
        app.insert_resource(Assets::<StandardMaterial>::default());
        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color: palette::DIGIT,
                ..default()
            });
        app.world_mut()
            .spawn((DigitBody { value }, DigitMaterial(handle.clone())));
        app.add_systems(Update, apply_piece_state_colors);
        (app, handle)
    }

    fn base_color(app: &App, handle: &Handle<StandardMaterial>) -> Color {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .unwrap()
            .base_color
    }

    #[test]
    fn placed_announcement_repaints_the_digit() {
        let (mut app, handle) = color_app(7);
        app.world_mut().send_event(PieceStateChanged {
            value: 7,
            state: PieceState::Placed,
        });
        app.update();
        assert_eq!(base_color(&app, &handle), palette::DIGIT_PLACED);
    }

    #[test]
    fn announcements_for_other_digits_leave_the_material_alone() {
        let (mut app, handle) = color_app(2);
        app.world_mut().send_event(PieceStateChanged {
            value: 7,
            state: PieceState::Selected,
        });
        app.update();
        assert_eq!(base_color(&app, &handle), palette::DIGIT);
    }
}
