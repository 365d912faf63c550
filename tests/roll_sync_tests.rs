//! Headless exercise of the per-frame sync pass.

use bevy::prelude::*;

use dicevis::dice3d::{
    sync_dice_to_rolls, update_face_up, DiceAssets, Die, FaceUpValues, RollFrame, RolledD6,
};

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<RollFrame>();
    app.init_resource::<FaceUpValues>();
    app.insert_resource(DiceAssets {
        mesh: Handle::default(),
        material: Handle::default(),
    });
    app.add_systems(Update, (sync_dice_to_rolls, update_face_up).chain());
    app
}

fn roll_at(x: f32) -> RolledD6 {
    RolledD6 {
        position: Vec3::new(x, 0.5, 0.0),
        ..Default::default()
    }
}

fn set_rolls(app: &mut App, dice: Vec<RolledD6>) {
    app.world_mut().resource_mut::<RollFrame>().dice = dice;
}

fn die_count(app: &mut App) -> usize {
    app.world_mut().query::<&Die>().iter(app.world()).count()
}

fn die_indices(app: &mut App) -> Vec<usize> {
    let mut indices: Vec<usize> = app
        .world_mut()
        .query::<&Die>()
        .iter(app.world())
        .map(|die| die.index)
        .collect();
    indices.sort();
    indices
}

#[test]
fn test_spawns_one_entity_per_roll() {
    let mut app = test_app();
    set_rolls(&mut app, vec![roll_at(0.0), roll_at(2.0), roll_at(4.0)]);
    app.update();
    assert_eq!(die_count(&mut app), 3);
    assert_eq!(die_indices(&mut app), vec![0, 1, 2]);
}

#[test]
fn test_empty_frame_renders_nothing() {
    let mut app = test_app();
    app.update();
    assert_eq!(die_count(&mut app), 0);
}

#[test]
fn test_entities_track_list_growth_and_shrink() {
    let mut app = test_app();

    set_rolls(&mut app, vec![roll_at(0.0), roll_at(2.0)]);
    app.update();
    assert_eq!(die_count(&mut app), 2);

    set_rolls(&mut app, (0..5).map(|i| roll_at(i as f32)).collect());
    app.update();
    assert_eq!(die_count(&mut app), 5);
    assert_eq!(die_indices(&mut app), vec![0, 1, 2, 3, 4]);

    set_rolls(&mut app, vec![roll_at(0.0)]);
    app.update();
    assert_eq!(die_count(&mut app), 1);
    assert_eq!(die_indices(&mut app), vec![0]);

    set_rolls(&mut app, Vec::new());
    app.update();
    assert_eq!(die_count(&mut app), 0);
}

#[test]
fn test_transforms_follow_the_rolls() {
    let mut app = test_app();
    let roll = RolledD6 {
        size: 2.0,
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation_axis: Vec3::Y,
        rotation_angle: 90.0,
    };
    set_rolls(&mut app, vec![roll]);
    app.update();

    let mut query = app.world_mut().query::<(&Die, &Transform)>();
    let (_, transform) = query.single(app.world()).unwrap();
    assert_eq!(*transform, roll.transform());
}

#[test]
fn test_transforms_update_in_place() {
    let mut app = test_app();
    set_rolls(&mut app, vec![roll_at(0.0)]);
    app.update();

    let moved = RolledD6 {
        position: Vec3::new(4.0, 0.5, -1.0),
        rotation_angle: 33.0,
        ..Default::default()
    };
    set_rolls(&mut app, vec![moved]);
    app.update();

    assert_eq!(die_count(&mut app), 1);
    let mut query = app.world_mut().query::<&Transform>();
    let transform = query.single(app.world()).unwrap();
    assert_eq!(transform.translation, moved.position);
}

#[test]
fn test_face_up_values_follow_the_frame() {
    let mut app = test_app();

    let resting = RolledD6::default();
    let flipped = RolledD6 {
        rotation_axis: Vec3::X,
        rotation_angle: 180.0,
        ..Default::default()
    };
    set_rolls(&mut app, vec![resting, flipped]);
    app.update();

    let face_up = app.world().resource::<FaceUpValues>();
    assert_eq!(face_up.0, vec![5, 6]);

    set_rolls(&mut app, Vec::new());
    app.update();
    assert!(app.world().resource::<FaceUpValues>().0.is_empty());
}
