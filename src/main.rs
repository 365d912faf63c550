use bevy::prelude::*;
use clap::Parser;
use std::path::Path;

use dicevis::dice3d::{Dice3dPlugin, DiceStyle, ScriptedRolls, ScriptedRollsPlugin};

/// Textured D6 dice viewer driven by a scripted roll source.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of dice to display
    #[arg(short, long, default_value = "5")]
    count: usize,

    /// Uniform die size
    #[arg(short, long, default_value = "1.0")]
    size: f32,

    /// Seed for the scripted tumble
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Path to a dice style file (.ron or .json)
    #[arg(long)]
    style: Option<String>,
}

fn main() {
    let args = Args::parse();

    let style = match &args.style {
        Some(path) => DiceStyle::load_or_default(Path::new(path)),
        None => DiceStyle::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dicevis".to_string(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(style)
        .insert_resource(ScriptedRolls::new(args.count, args.size, args.seed))
        .add_plugins((Dice3dPlugin, ScriptedRollsPlugin))
        .run();
}
