use super::error::GeometryError;
use super::vector::normalize_vector;
use nalgebra::{Point3, Vector3};

/// Discrete approximation to the Frenet frame at one backbone position.
///
/// `tangent` follows the chord from the preceding to the following atom;
/// `normal` is the tangent-orthogonal component of the chord from the
/// current to the following atom. Both are unit length and mutually
/// orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetBasis {
    pub tangent: Vector3<f64>,
    pub normal: Vector3<f64>,
}

fn basis_at(
    point: &Point3<f64>,
    before: &Point3<f64>,
    after: &Point3<f64>,
    index: usize,
) -> Result<FrenetBasis, GeometryError> {
    let tangent =
        normalize_vector(&(after - before)).map_err(|_| GeometryError::NumericalDegeneracy {
            stage: "frenet tangent",
            index,
        })?;
    let chord = after - point;
    let candidate = chord - tangent * chord.dot(&tangent);
    let normal = normalize_vector(&candidate).map_err(|_| GeometryError::NumericalDegeneracy {
        stage: "frenet normal",
        index,
    })?;
    Ok(FrenetBasis { tangent, normal })
}

pub fn frenet_basis(
    point: &Point3<f64>,
    before: &Point3<f64>,
    after: &Point3<f64>,
) -> Result<FrenetBasis, GeometryError> {
    basis_at(point, before, after, 0)
}

/// Frames for every interior backbone position. The first and last atoms
/// have no neighbors on both sides and get no frame, so the result has two
/// elements fewer than the backbone.
pub fn frenet_bases(backbone: &[Point3<f64>]) -> Result<Vec<FrenetBasis>, GeometryError> {
    if backbone.len() < 3 {
        return Err(GeometryError::InsufficientData {
            stage: "frenet bases",
            required: 3,
            actual: backbone.len(),
        });
    }
    (1..backbone.len() - 1)
        .map(|i| basis_at(&backbone[i], &backbone[i - 1], &backbone[i + 1], i))
        .collect()
}
