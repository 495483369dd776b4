use crate::core::geometry::{
    GeometryError, frame_rotation_and_distance, frenet_bases, screw_motion,
};
use nalgebra::{Point3, Quaternion, Vector3};

const STAGE: &str = "screwframe rotation centers";

/// Local rotation centers of the backbone: for each rigid step between
/// consecutive Frenet frames, the point on the screw axis closest to the
/// step's first atom.
///
/// A backbone of n positions yields n-3 centers: the first and last atoms
/// carry no frame, and the last interior atom only terminates a step.
pub fn screwframe_rotation_centers(
    backbone: &[Point3<f64>],
) -> Result<Vec<Point3<f64>>, GeometryError> {
    if backbone.len() < 4 {
        return Err(GeometryError::InsufficientData {
            stage: STAGE,
            required: 4,
            actual: backbone.len(),
        });
    }

    let bases = frenet_bases(backbone)?;
    let interior = &backbone[1..backbone.len() - 1];
    debug_assert_eq!(bases.len(), interior.len());

    let rotations = frame_rotation_and_distance(&bases)?;
    let quaternions: Vec<Quaternion<f64>> = rotations.iter().map(|r| r.quaternion).collect();
    let translations: Vec<Vector3<f64>> = interior.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let screws = screw_motion(&quaternions, &translations)?;

    Ok(interior
        .iter()
        .zip(screws.iter())
        .map(|(atom, screw)| atom + screw.axis_point)
        .collect())
}
