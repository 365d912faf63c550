//! Procedural die meshes.

pub mod d6;

pub use d6::{create_d6, D6_FACES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d6_has_6_faces() {
        let (_, faces) = create_d6();
        assert_eq!(faces.len(), 6, "D6 should have 6 face normals");
        for (_, value) in &faces {
            assert!(*value >= 1 && *value <= 6, "D6 face values should be 1-6");
        }
    }

    #[test]
    fn test_d6_face_values_unique() {
        let (_, faces) = create_d6();
        let mut values: Vec<u32> = faces.iter().map(|(_, v)| *v).collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_d6_normals_are_axis_aligned_units() {
        let (_, faces) = create_d6();
        for (normal, _) in &faces {
            assert!((normal.length() - 1.0).abs() < 1e-6);
            let abs = normal.abs();
            assert_eq!(abs.x + abs.y + abs.z, 1.0, "cube normals sit on one axis");
        }
    }

    #[test]
    fn test_d6_opposite_normals_paired() {
        let (_, faces) = create_d6();
        for (normal, _) in &faces {
            assert!(
                faces.iter().any(|(n, _)| *n == -*normal),
                "every face should have an opposing face"
            );
        }
    }
}
