//! Scene setup system.
//!
//! Initializes the camera, lights, and floor, and builds the shared mesh and
//! atlas material every die entity renders with.

use bevy::prelude::*;

use crate::dice3d::atlas::atlas_image;
use crate::dice3d::meshes::create_d6;
use crate::dice3d::types::DiceStyle;

/// Shared handles every die entity renders with.
#[derive(Resource)]
pub struct DiceAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    style: Res<DiceStyle>,
) {
    // Camera looks down at the table from a shallow angle.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.5, 4.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    // Felt-colored table surface.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(10.0, 10.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.12, 0.25, 0.16),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.01, 0.0),
    ));

    // One mesh and one atlas material, shared by all dice.
    info!("building pip atlas with {} px cells", style.cell_px);
    let atlas = images.add(atlas_image(style.cell_px, style.face_color, style.pip_color));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(atlas),
        perceptual_roughness: style.perceptual_roughness,
        metallic: style.metallic,
        ..default()
    });

    let (mesh, _faces) = create_d6();
    commands.insert_resource(DiceAssets {
        mesh: meshes.add(mesh),
        material,
    });
}

/// Grid placement for `total` dice centered on the origin.
pub fn calculate_dice_position(index: usize, total: usize) -> Vec3 {
    let cols = ((total as f32).sqrt().ceil() as usize).max(1);
    let rows = total.div_ceil(cols);
    let row = index / cols;
    let col = index % cols;

    let spacing = 1.6;
    let start_x = -((cols - 1) as f32 * spacing) / 2.0;
    let start_z = -((rows - 1) as f32 * spacing) / 2.0;

    Vec3::new(
        start_x + col as f32 * spacing,
        0.5,
        start_z + row as f32 * spacing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_die_sits_at_center() {
        let pos = calculate_dice_position(0, 1);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.z, 0.0);
        assert!(pos.y > 0.0, "dice rest above the floor");
    }

    #[test]
    fn test_grid_is_centered() {
        let total = 4;
        let sum: Vec3 = (0..total)
            .map(|i| calculate_dice_position(i, total))
            .sum();
        assert!(sum.x.abs() < 1e-4);
        assert!(sum.z.abs() < 1e-4);
    }

    #[test]
    fn test_positions_are_distinct() {
        let total = 9;
        let positions: Vec<Vec3> = (0..total)
            .map(|i| calculate_dice_position(i, total))
            .collect();
        for (i, a) in positions.iter().enumerate() {
            for b in positions.iter().skip(i + 1) {
                assert!(a.distance(*b) > 0.5, "dice should not overlap");
            }
        }
    }
}
