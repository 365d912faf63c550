use std::fs;
use std::path::PathBuf;

use dicevis::dice3d::atlas::build_pip_atlas;
use dicevis::dice3d::types::DiceStyle;

fn main() {
    let out_dir = PathBuf::from("assets/textures/dice_pips");
    fs::create_dir_all(&out_dir).expect("create output dir");

    let style = DiceStyle::default();
    let atlas = build_pip_atlas(style.cell_px, style.face_color, style.pip_color);

    let path = out_dir.join("pip_atlas.png");
    atlas
        .save(&path)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));

    println!("Wrote pip atlas to {}", path.display());
}
