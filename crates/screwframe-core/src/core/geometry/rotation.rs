use super::error::GeometryError;
use super::frame::FrenetBasis;
use nalgebra::linalg::SymmetricEigen;
use nalgebra::{Matrix4, Quaternion, Vector3};

const EIGEN_EPSILON: f64 = 1e-12;
const EIGEN_MAX_ITERATIONS: usize = 256;

/// Rotation between two consecutive Frenet frames.
///
/// The quaternion is the least-squares fit consistent with both the
/// tangent and normal direction changes, canonicalized to `w >= 0`.
/// `angular_distance` is the closed-form measure `sqrt(M[0,0] / 8)`,
/// independent of the eigenvector's sign ambiguity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRotation {
    pub quaternion: Quaternion<f64>,
    pub angular_distance: f64,
}

// Standard antisymmetric construction for quaternion least squares: the top
// row/column holds the difference of the paired observations, the lower
// 3x3 block the cross-product coefficients of their sum.
fn observation_matrix(sum: &Vector3<f64>, diff: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new(
        0.0, diff.x, diff.y, diff.z, //
        -diff.x, 0.0, sum.z, -sum.y, //
        -diff.y, -sum.z, 0.0, sum.x, //
        -diff.z, sum.y, -sum.x, 0.0,
    )
}

/// One `FrameRotation` per consecutive pair of frames; the result has one
/// element fewer than the input.
pub fn frame_rotation_and_distance(
    bases: &[FrenetBasis],
) -> Result<Vec<FrameRotation>, GeometryError> {
    let mut results = Vec::with_capacity(bases.len().saturating_sub(1));
    for (index, pair) in bases.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);

        let k_t = observation_matrix(
            &(current.tangent + next.tangent),
            &(current.tangent - next.tangent),
        );
        let k_n = observation_matrix(
            &(current.normal + next.normal),
            &(current.normal - next.normal),
        );
        let m = k_t.transpose() * k_t + k_n.transpose() * k_n;

        let angular_distance = (m[(0, 0)] / 8.0).sqrt();

        let eigen = SymmetricEigen::try_new(m, EIGEN_EPSILON, EIGEN_MAX_ITERATIONS)
            .ok_or(GeometryError::EigenDecompositionFailure { index })?;

        // Eigenvector of the smallest eigenvalue; on a tie the lowest index
        // wins, which only matters for degenerate backbones.
        let mut smallest = 0;
        for i in 1..4 {
            if eigen.eigenvalues[i] < eigen.eigenvalues[smallest] {
                smallest = i;
            }
        }
        let v = eigen.eigenvectors.column(smallest);

        let mut quaternion = Quaternion::new(v[0], v[1], v[2], v[3]);
        if quaternion.w < 0.0 {
            quaternion = -quaternion;
        }

        results.push(FrameRotation {
            quaternion,
            angular_distance,
        });
    }
    Ok(results)
}
