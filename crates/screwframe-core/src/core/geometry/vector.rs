use super::error::GeometryError;
use nalgebra::Vector3;

/// Norms below this threshold count as degenerate when a unit vector is required.
pub const NORM_EPSILON: f64 = 1e-9;

const STAGE: &str = "vector normalization";

#[inline]
pub fn norm(v: &Vector3<f64>) -> f64 {
    v.norm()
}

pub fn normalize_vector(v: &Vector3<f64>) -> Result<Vector3<f64>, GeometryError> {
    let length = v.norm();
    if length < NORM_EPSILON {
        return Err(GeometryError::NumericalDegeneracy {
            stage: STAGE,
            index: 0,
        });
    }
    Ok(v / length)
}

pub fn normalize_batch(vectors: &[Vector3<f64>]) -> Result<Vec<Vector3<f64>>, GeometryError> {
    vectors
        .iter()
        .enumerate()
        .map(|(index, v)| {
            normalize_vector(v).map_err(|_| GeometryError::NumericalDegeneracy {
                stage: STAGE,
                index,
            })
        })
        .collect()
}
