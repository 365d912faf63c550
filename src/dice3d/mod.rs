//! 3D dice rendering.
//!
//! Organized into submodules:
//! - `atlas` - procedural 3x3 pip texture atlas and its UV layout
//! - `meshes` - the cube mesh with per-face normals and atlas UVs
//! - `types` - roll results, the `RollFrame` engine seam, style settings
//! - `systems` - scene setup and the per-frame transform sync pass
//! - `scripted` - a scripted roll source standing in for a real engine

pub mod atlas;
pub mod meshes;
pub mod scripted;
pub mod systems;
pub mod types;

pub use atlas::*;
pub use meshes::*;
pub use scripted::*;
pub use systems::*;
pub use types::*;

use bevy::prelude::*;

/// Renders one textured D6 per entry in the [`RollFrame`] resource.
///
/// The rolling engine is external to this plugin; anything that writes
/// `RollFrame` during `Update` drives the dice.
pub struct Dice3dPlugin;

impl Plugin for Dice3dPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DiceStyle>()
            .init_resource::<RollFrame>()
            .init_resource::<FaceUpValues>()
            .add_systems(Startup, setup_scene)
            .add_systems(Update, (sync_dice_to_rolls, update_face_up));
    }
}
