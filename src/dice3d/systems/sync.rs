//! Per-frame reconciliation of die entities against the roll list.

use bevy::prelude::*;

use super::setup::DiceAssets;
use crate::dice3d::types::{Die, FaceUpValues, RollFrame};

/// Keep one die entity per roll result and write its transform.
///
/// Existing dice get their transform refreshed from the matching roll
/// (translate, then rotate, then scale). Entities past the end of the list
/// are despawned; missing indices are spawned from the shared assets.
pub fn sync_dice_to_rolls(
    mut commands: Commands,
    rolls: Res<RollFrame>,
    assets: Res<DiceAssets>,
    mut dice: Query<(Entity, &Die, &mut Transform)>,
) {
    let mut have = vec![false; rolls.dice.len()];

    for (entity, die, mut transform) in dice.iter_mut() {
        match rolls.dice.get(die.index) {
            Some(roll) => {
                *transform = roll.transform();
                have[die.index] = true;
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for (index, roll) in rolls.dice.iter().enumerate() {
        if !have[index] {
            commands.spawn((
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                roll.transform(),
                Die { index },
            ));
        }
    }
}

/// Refresh the per-die face-up values from the current roll list.
pub fn update_face_up(rolls: Res<RollFrame>, mut face_up: ResMut<FaceUpValues>) {
    face_up.0.clear();
    face_up.0.extend(rolls.dice.iter().map(|roll| roll.face_up()));
}
