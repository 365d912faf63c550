//! Procedural pip atlas for the D6 texture.
//!
//! A single 3x3 grid image holds one cell per pip count. The cell layout is
//! fixed and shared with the mesh UVs, so the atlas and the cube geometry
//! only ever agree by construction.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::{Rgba, RgbaImage};

pub const ATLAS_COLS: u32 = 3;
pub const ATLAS_ROWS: u32 = 3;

/// Atlas cell `(col, row)` for a pip count, row 0 at the top of the image.
///
/// Values outside 1-6 land in an unused corner cell, which stays blank.
pub const fn pip_cell(value: u32) -> (u32, u32) {
    match value {
        1 => (1, 1),
        2 => (0, 1),
        3 => (1, 0),
        4 => (1, 2),
        5 => (2, 1),
        6 => (2, 0),
        _ => (0, 0),
    }
}

/// UV rectangle `(min, max)` of the atlas cell assigned to a pip count.
pub fn pip_uv_rect(value: u32) -> (Vec2, Vec2) {
    let (col, row) = pip_cell(value);
    let min = Vec2::new(
        col as f32 / ATLAS_COLS as f32,
        row as f32 / ATLAS_ROWS as f32,
    );
    let max = min + Vec2::new(1.0 / ATLAS_COLS as f32, 1.0 / ATLAS_ROWS as f32);
    (min, max)
}

/// Pip centers for a value, in unit cell coordinates with y pointing down.
pub fn pip_centers(value: u32) -> &'static [(f32, f32)] {
    const C: (f32, f32) = (0.5, 0.5);
    const TL: (f32, f32) = (0.28, 0.28);
    const TR: (f32, f32) = (0.72, 0.28);
    const ML: (f32, f32) = (0.28, 0.5);
    const MR: (f32, f32) = (0.72, 0.5);
    const BL: (f32, f32) = (0.28, 0.72);
    const BR: (f32, f32) = (0.72, 0.72);

    match value {
        1 => &[C],
        2 => &[TR, BL],
        3 => &[TL, C, BR],
        4 => &[TL, TR, BL, BR],
        5 => &[TL, TR, C, BL, BR],
        6 => &[TL, TR, ML, MR, BL, BR],
        _ => &[],
    }
}

/// Render the full 3x3 pip atlas.
///
/// `cell_px` is the edge length of one cell; colors are RGBA bytes. The whole
/// image is filled with the face color so unused cells blend in, then each
/// value's pips are stamped into its cell.
pub fn build_pip_atlas(cell_px: u32, face_color: [u8; 4], pip_color: [u8; 4]) -> RgbaImage {
    let width = ATLAS_COLS * cell_px;
    let height = ATLAS_ROWS * cell_px;

    let mut atlas = RgbaImage::from_pixel(width, height, Rgba(face_color));

    for value in 1..=6 {
        let (col, row) = pip_cell(value);
        draw_pip_cell(
            &mut atlas,
            col * cell_px,
            row * cell_px,
            cell_px,
            value,
            pip_color,
        );
    }

    atlas
}

/// Stamp the pip pattern for one value into the cell at `(x0, y0)`.
fn draw_pip_cell(atlas: &mut RgbaImage, x0: u32, y0: u32, cell_px: u32, value: u32, pip: [u8; 4]) {
    let radius = cell_px as f32 * 0.11;

    for &(cx, cy) in pip_centers(value) {
        let px = x0 as f32 + cx * cell_px as f32;
        let py = y0 as f32 + cy * cell_px as f32;
        fill_circle(atlas, px, py, radius, pip);
    }
}

/// Fill a circle with a one-pixel soft edge so pips don't alias badly.
fn fill_circle(atlas: &mut RgbaImage, cx: f32, cy: f32, radius: f32, rgba: [u8; 4]) {
    let x_min = ((cx - radius - 1.0).floor().max(0.0)) as u32;
    let y_min = ((cy - radius - 1.0).floor().max(0.0)) as u32;
    let x_max = ((cx + radius + 1.0).ceil() as u32).min(atlas.width());
    let y_max = ((cy + radius + 1.0).ceil() as u32).min(atlas.height());

    for y in y_min..y_max {
        for x in x_min..x_max {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }

            let under = *atlas.get_pixel(x, y);
            let blend = |a: u8, b: u8| {
                (a as f32 + (b as f32 - a as f32) * coverage).round() as u8
            };
            atlas.put_pixel(
                x,
                y,
                Rgba([
                    blend(under[0], rgba[0]),
                    blend(under[1], rgba[1]),
                    blend(under[2], rgba[2]),
                    blend(under[3], rgba[3]),
                ]),
            );
        }
    }
}

/// Build the atlas and wrap it as a Bevy texture.
pub fn atlas_image(cell_px: u32, face_color: [u8; 4], pip_color: [u8; 4]) -> Image {
    let atlas = build_pip_atlas(cell_px, face_color, pip_color);
    let (width, height) = atlas.dimensions();
    bevy_image_from_rgba8(width, height, atlas.into_raw())
}

fn bevy_image_from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Image {
    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let mut image = Image {
        texture_descriptor: bevy::render::render_resource::TextureDescriptor {
            label: None,
            size,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            mip_level_count: 1,
            sample_count: 1,
            usage: bevy::render::render_resource::TextureUsages::TEXTURE_BINDING
                | bevy::render::render_resource::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        ..default()
    };

    image.resize(size);
    image.data = Some(rgba);
    image
}
