//! Cube mesh for a six-sided die.
//!
//! 24 vertices, four per face in triangle-strip order, one outward normal per
//! face, and UVs pointing into that face's pip atlas cell. All of it is fixed
//! at construction; the mesh is built once and shared by every die entity.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::dice3d::atlas::pip_uv_rect;

/// Outward normal and pip value per face, in vertex-buffer order.
///
/// The pip layout: -Z shows 1, +X shows 2, +Z shows 3, -X shows 4,
/// +Y shows 5, -Y shows 6.
pub const D6_FACES: [(Vec3, u32); 6] = [
    (Vec3::NEG_Z, 1),
    (Vec3::X, 2),
    (Vec3::Z, 3),
    (Vec3::NEG_X, 4),
    (Vec3::Y, 5),
    (Vec3::NEG_Y, 6),
];

// Four corners per face in strip order, unit cube centered on the origin.
// Same order as `D6_FACES`. Winding is outward so backface culling keeps the
// visible side.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // -Z
    [
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
    ],
    // +X
    [
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
    ],
    // +Z
    [
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, -0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ],
    // -X
    [
        [-0.5, -0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
    ],
    // +Y
    [
        [-0.5, 0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, 0.5],
    ],
    // -Y
    [
        [-0.5, -0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, 0.5],
        [0.5, -0.5, -0.5],
    ],
];

/// Build the die mesh. Returns the mesh and its face normal/value table.
pub fn create_d6() -> (Mesh, Vec<(Vec3, u32)>) {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(24);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(24);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(24);
    let mut indices: Vec<u32> = Vec::with_capacity(36);

    for (face, (normal, value)) in D6_FACES.iter().enumerate() {
        let (uv_min, uv_max) = pip_uv_rect(*value);

        positions.extend_from_slice(&FACE_CORNERS[face]);
        normals.extend_from_slice(&[normal.to_array(); 4]);

        // Strip order alternates lower/upper corners; the upper corner of
        // each pair takes the cell's top edge so pips read upright.
        uvs.push([uv_min.x, uv_max.y]);
        uvs.push([uv_min.x, uv_min.y]);
        uvs.push([uv_max.x, uv_max.y]);
        uvs.push([uv_max.x, uv_min.y]);

        // Unroll the 4-vertex strip into two triangles.
        let base = (face * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    let mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices));

    (mesh, D6_FACES.to_vec())
}
