//! Die appearance settings and their file loading.
//!
//! A style file is optional; anything missing or unparseable falls back to
//! the defaults with a logged warning.

use bevy::log::warn;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colors and material parameters for the rendered dice.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceStyle {
    /// Face background color of the pip atlas, RGBA bytes.
    #[serde(default = "default_face_color")]
    pub face_color: [u8; 4],

    /// Pip color, RGBA bytes.
    #[serde(default = "default_pip_color")]
    pub pip_color: [u8; 4],

    /// Pixel edge length of one atlas cell.
    #[serde(default = "default_cell_px")]
    pub cell_px: u32,

    #[serde(default = "default_roughness")]
    pub perceptual_roughness: f32,

    #[serde(default = "default_metallic")]
    pub metallic: f32,
}

fn default_face_color() -> [u8; 4] {
    [235, 228, 214, 255]
}

fn default_pip_color() -> [u8; 4] {
    [26, 23, 20, 255]
}

fn default_cell_px() -> u32 {
    128
}

fn default_roughness() -> f32 {
    0.35
}

fn default_metallic() -> f32 {
    0.0
}

impl Default for DiceStyle {
    fn default() -> Self {
        Self {
            face_color: default_face_color(),
            pip_color: default_pip_color(),
            cell_px: default_cell_px(),
            perceptual_roughness: default_roughness(),
            metallic: default_metallic(),
        }
    }
}

impl DiceStyle {
    /// Load a style from a `.ron` or `.json` file, falling back to defaults
    /// on any failure.
    pub fn load_or_default(path: &Path) -> DiceStyle {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("could not read style file {}: {err}", path.display());
                return DiceStyle::default();
            }
        };

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&text).map_err(|err| err.to_string()),
            _ => ron::from_str(&text).map_err(|err| err.to_string()),
        };

        match parsed {
            Ok(style) => style,
            Err(err) => {
                warn!("could not parse style file {}: {err}", path.display());
                DiceStyle::default()
            }
        }
    }
}
