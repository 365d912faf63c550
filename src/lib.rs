//! Dicevis - textured D6 dice rendering for Bevy.
//!
//! The crate draws six-sided dice as textured cubes. Where each die sits and
//! how it is oriented is decided elsewhere: a rolling engine (physics, replay,
//! script, anything) writes the [`dice3d::RollFrame`] resource once per frame,
//! and [`dice3d::Dice3dPlugin`] keeps one rendered die per roll result, with
//! translation, rotation, and scale taken straight from the result.

pub mod dice3d;
