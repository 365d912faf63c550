//! Roll results and the rolling-engine seam.
//!
//! The rolling engine is an external collaborator. Its entire contract with
//! this crate is the `RollFrame` resource: a list of `RolledD6` values, one
//! per die, refreshed every frame. The renderer consumes the list read-only.

use bevy::prelude::*;

use crate::dice3d::meshes::D6_FACES;

/// One die as reported by the rolling engine for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RolledD6 {
    /// Uniform scale applied to the unit cube.
    pub size: f32,
    /// World position of the die center.
    pub position: Vec3,
    /// Axis the die is rotated around. Zero length means no rotation.
    pub rotation_axis: Vec3,
    /// Rotation angle around `rotation_axis`, in degrees.
    pub rotation_angle: f32,
}

impl Default for RolledD6 {
    fn default() -> Self {
        Self {
            size: 1.0,
            position: Vec3::ZERO,
            rotation_axis: Vec3::Y,
            rotation_angle: 0.0,
        }
    }
}

impl RolledD6 {
    /// Quaternion for this roll's axis/angle pair.
    pub fn rotation(&self) -> Quat {
        match self.rotation_axis.try_normalize() {
            Some(axis) => Quat::from_axis_angle(axis, self.rotation_angle.to_radians()),
            None => Quat::IDENTITY,
        }
    }

    /// Transform applied when drawing: translate, then rotate, then scale.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position)
            .with_rotation(self.rotation())
            .with_scale(Vec3::splat(self.size))
    }

    /// Pip value currently facing up.
    pub fn face_up(&self) -> u32 {
        face_up(self.rotation())
    }
}

/// Pip value whose face normal points most nearly up after `rotation`.
pub fn face_up(rotation: Quat) -> u32 {
    let mut best_value = 1;
    let mut best_dot = f32::MIN;

    for (normal, value) in D6_FACES {
        let dot = (rotation * normal).dot(Vec3::Y);
        if dot > best_dot {
            best_dot = dot;
            best_value = value;
        }
    }

    best_value
}

/// Dice reported by the rolling engine for the current frame.
///
/// Written by the engine, read by the renderer. This is the only contract
/// between the two.
#[derive(Resource, Default, Debug, Clone)]
pub struct RollFrame {
    pub dice: Vec<RolledD6>,
}

/// Component attached to each rendered die entity.
#[derive(Component, Debug)]
pub struct Die {
    /// Index of this die's entry in the current `RollFrame`.
    pub index: usize,
}

/// Face-up value per die, refreshed every frame from the roll list.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct FaceUpValues(pub Vec<u32>);
