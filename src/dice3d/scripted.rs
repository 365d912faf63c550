//! Scripted stand-in for the external rolling engine.
//!
//! Feeds [`RollFrame`] with a deterministic tumble so the renderer can run
//! without a real engine behind it. Each die spins around a fixed axis at a
//! fixed rate and hovers over a grid spot; there is no physics here.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dice3d::systems::{calculate_dice_position, sync_dice_to_rolls};
use crate::dice3d::types::{RollFrame, RolledD6};

/// One scripted die: a grid spot plus a constant spin axis and rate.
#[derive(Debug, Clone)]
struct ScriptedDie {
    rest: Vec3,
    axis: Vec3,
    spin_dps: f32,
    phase_deg: f32,
    bob: f32,
}

/// Deterministic roll source. Equal seeds produce equal frames.
#[derive(Resource, Debug)]
pub struct ScriptedRolls {
    dice: Vec<ScriptedDie>,
    size: f32,
    elapsed: f32,
}

impl ScriptedRolls {
    pub fn new(count: usize, size: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let dice = (0..count)
            .map(|i| {
                let axis = Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                );
                ScriptedDie {
                    rest: calculate_dice_position(i, count),
                    axis: axis.try_normalize().unwrap_or(Vec3::Y),
                    spin_dps: rng.gen_range(90.0..360.0),
                    phase_deg: rng.gen_range(0.0..360.0),
                    bob: rng.gen_range(0.05..0.25),
                }
            })
            .collect();

        Self {
            dice,
            size,
            elapsed: 0.0,
        }
    }

    /// Advance the script by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Roll results for the current instant.
    pub fn frame(&self) -> Vec<RolledD6> {
        self.dice
            .iter()
            .map(|die| {
                let wobble = (self.elapsed * 2.0 + die.phase_deg.to_radians()).sin();
                let lift = die.bob * (1.0 + wobble) / 2.0;
                RolledD6 {
                    size: self.size,
                    position: Vec3::new(
                        die.rest.x,
                        die.rest.y * self.size + lift,
                        die.rest.z,
                    ),
                    rotation_axis: die.axis,
                    rotation_angle: (die.phase_deg + die.spin_dps * self.elapsed) % 360.0,
                }
            })
            .collect()
    }
}

/// Copies the scripted state into `RollFrame` once per frame.
pub fn drive_scripted_rolls(
    time: Res<Time>,
    mut source: ResMut<ScriptedRolls>,
    mut rolls: ResMut<RollFrame>,
) {
    source.advance(time.delta_secs());
    rolls.dice = source.frame();
}

/// Drives the renderer from a [`ScriptedRolls`] resource, which the app must
/// insert itself.
pub struct ScriptedRollsPlugin;

impl Plugin for ScriptedRollsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_scripted_rolls.before(sync_dice_to_rolls));
    }
}
