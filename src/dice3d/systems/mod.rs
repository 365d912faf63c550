//! Systems for the dice renderer.
//!
//! - `setup`: scene initialization (camera, lights, floor, shared die assets)
//! - `sync`: per-frame reconciliation of die entities against the roll list

mod setup;
mod sync;

pub use setup::{calculate_dice_position, setup_scene, DiceAssets};
pub use sync::{sync_dice_to_rolls, update_face_up};
