use super::error::GeometryError;
use super::vector::NORM_EPSILON;
use nalgebra::{Quaternion, Vector3};

/// Below this deviation of `w` from 1 the rotation is treated as pure
/// translation, where the screw axis is undefined.
const PURE_TRANSLATION_TOLERANCE: f64 = 1e-6;

const STAGE: &str = "screw motion";

/// Screw decomposition of one rigid step along the backbone.
///
/// `axis_point` is the point on the screw axis closest to the reference
/// atom, relative to that atom. `displacement` is canonicalized to be
/// non-negative; the axis and angle are reoriented together to keep the
/// parameters describing the same rigid motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrewParameters {
    pub axis_point: Vector3<f64>,
    pub axis: Vector3<f64>,
    pub angle: f64,
    pub displacement: f64,
}

fn decompose(
    quaternion: &Quaternion<f64>,
    translation: &Vector3<f64>,
    index: usize,
) -> Result<ScrewParameters, GeometryError> {
    let cos_half = quaternion.w;

    if (cos_half - 1.0).abs() < PURE_TRANSLATION_TOLERANCE {
        // No measurable rotation. The axis is undefined, so it is chosen
        // parallel to the translation itself.
        let displacement = translation.norm();
        if displacement < NORM_EPSILON {
            return Err(GeometryError::NumericalDegeneracy {
                stage: STAGE,
                index,
            });
        }
        return Ok(ScrewParameters {
            axis_point: Vector3::zeros(),
            axis: translation / displacement,
            angle: 0.0,
            displacement,
        });
    }

    // acos's principal range and cos_half > 0 keep the angle in [0, pi];
    // the non-negative root for sin is consistent with that range.
    let mut angle = 2.0 * cos_half.acos();
    let mut sin_half = (1.0 - cos_half * cos_half).sqrt();
    let mut axis = Vector3::new(quaternion.i, quaternion.j, quaternion.k) / sin_half;

    let mut displacement = translation.dot(&axis);
    if displacement < 0.0 {
        // Reorient so the displacement along the axis is non-negative.
        displacement = -displacement;
        axis = -axis;
        angle = -angle;
        sin_half = -sin_half;
    }

    let orthogonal = translation - displacement * axis;
    let axis_point = 0.5 * (orthogonal - (cos_half / sin_half) * axis.cross(&orthogonal));

    Ok(ScrewParameters {
        axis_point,
        axis,
        angle,
        displacement,
    })
}

/// Screw parameters for every (quaternion, translation) pair, applied
/// independently per pair.
pub fn screw_motion(
    quaternions: &[Quaternion<f64>],
    translations: &[Vector3<f64>],
) -> Result<Vec<ScrewParameters>, GeometryError> {
    if quaternions.len() != translations.len() {
        return Err(GeometryError::MismatchedLengths {
            quaternions: quaternions.len(),
            translations: translations.len(),
        });
    }
    quaternions
        .iter()
        .zip(translations.iter())
        .enumerate()
        .map(|(index, (q, t))| decompose(q, t, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn rotation_quaternion(axis: &Vector3<f64>, angle: f64) -> Quaternion<f64> {
        let half = angle / 2.0;
        let v = axis * half.sin();
        Quaternion::new(half.cos(), v.x, v.y, v.z)
    }

    #[test]
    fn known_screw_round_trips_axis_angle_and_displacement() {
        let axis = Vector3::new(1.0, 2.0, -1.0).normalize();
        let angle = 1.1;
        let displacement = 0.27;
        let q = rotation_quaternion(&axis, angle);
        let t = axis * displacement;

        let params = screw_motion(&[q], &[t]).unwrap();
        assert_eq!(params.len(), 1);
        let p = &params[0];
        assert!((p.axis - axis).norm() < TOLERANCE);
        assert!((p.angle - angle).abs() < TOLERANCE);
        assert!((p.displacement - displacement).abs() < TOLERANCE);
        // A translation purely along the axis leaves no orthogonal part.
        assert!(p.axis_point.norm() < TOLERANCE);
    }

    #[test]
    fn negative_axial_displacement_is_reoriented() {
        let axis = Vector3::z();
        let angle = 0.9;
        let q = rotation_quaternion(&axis, angle);
        let t = Vector3::new(0.0, 0.0, -0.5);

        let p = &screw_motion(&[q], &[t]).unwrap()[0];
        assert!(p.displacement >= 0.0);
        assert!((p.displacement - 0.5).abs() < TOLERANCE);
        assert!((p.axis - (-axis)).norm() < TOLERANCE);
        assert!((p.angle + angle).abs() < TOLERANCE);
    }

    #[test]
    fn near_identity_rotation_is_a_pure_translation() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let t = Vector3::new(0.3, 0.0, 0.4);

        let p = &screw_motion(&[q], &[t]).unwrap()[0];
        assert_eq!(p.angle, 0.0);
        assert_eq!(p.axis_point, Vector3::zeros());
        assert!((p.displacement - 0.5).abs() < TOLERANCE);
        assert!((p.axis - Vector3::new(0.6, 0.0, 0.8)).norm() < TOLERANCE);
    }

    #[test]
    fn pure_translation_with_zero_step_is_degenerate() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let result = screw_motion(&[q], &[Vector3::zeros()]);
        assert_eq!(
            result,
            Err(GeometryError::NumericalDegeneracy {
                stage: "screw motion",
                index: 0,
            })
        );
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let result = screw_motion(&[q], &[]);
        assert_eq!(
            result,
            Err(GeometryError::MismatchedLengths {
                quaternions: 1,
                translations: 0,
            })
        );
    }

    #[test]
    fn off_axis_translation_yields_a_rotation_center() {
        // Step between two atoms on the unit circle, (1,0,0) -> (0,1,0): a
        // quarter turn about z through the origin. The frame fit hands the
        // decomposer the conjugate quaternion; relative to the first atom
        // the recovered axis point must be the circle's center, (-1,0,0).
        let axis = Vector3::z();
        let angle = std::f64::consts::FRAC_PI_2;
        let q = rotation_quaternion(&axis, -angle);
        let t = Vector3::new(-1.0, 1.0, 0.0);

        let p = &screw_motion(&[q], &[t]).unwrap()[0];
        assert!((p.displacement - 0.0).abs() < TOLERANCE);
        assert!((p.axis_point - Vector3::new(-1.0, 0.0, 0.0)).norm() < TOLERANCE);
    }
}
