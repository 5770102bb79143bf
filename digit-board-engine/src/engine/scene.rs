use bevy::prelude::*;

use crate::engine::camera::OrbitCamera;
use constants::palette;

/// Camera, lights, floor. Light rig values follow the original scene: one
/// warm key light with shadows plus a soft ambient fill.
pub fn setup_scene(
    mut commands: Commands,
    orbit: Res<OrbitCamera>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(palette::BACKGROUND));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(orbit.target_translation())
            .with_rotation(orbit.target_rotation()),
        Name::new("MainCamera"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 14.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("KeyLight"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(60.0, 60.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: palette::FLOOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.5, 0.0),
        Name::new("Floor"),
    ));
}
