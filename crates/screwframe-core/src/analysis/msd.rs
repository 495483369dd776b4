use crate::core::geometry::GeometryError;
use nalgebra::Point3;
use rustfft::{FftPlanner, num_complex::Complex};

const STAGE: &str = "mean-square displacement";

fn require_nonempty(trajectory: &[Point3<f64>]) -> Result<(), GeometryError> {
    if trajectory.is_empty() {
        return Err(GeometryError::InsufficientData {
            stage: STAGE,
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

/// Mean-square displacement per lag, averaged over all valid window
/// starts. Quadratic in the trajectory length.
pub fn msd(trajectory: &[Point3<f64>]) -> Result<Vec<f64>, GeometryError> {
    require_nonempty(trajectory)?;
    let n = trajectory.len();
    let mut curve = vec![0.0; n];
    for (shift, value) in curve.iter_mut().enumerate() {
        let mut total = 0.0;
        for i in 0..n - shift {
            total += (trajectory[i + shift] - trajectory[i]).norm_squared();
        }
        *value = total / (n - shift) as f64;
    }
    Ok(curve)
}

// Lag-normalized autocorrelation of one coordinate component, via the
// Wiener-Khinchin theorem. The series is zero-padded to twice its length
// so the circular transform realizes a linear correlation, and the inverse
// transform is divided by the padded length because rustfft is
// unnormalized.
fn autocorrelation_fft(series: &[f64], planner: &mut FftPlanner<f64>) -> Vec<f64> {
    let n = series.len();
    let padded_len = 2 * n;

    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(padded_len);
    buffer.extend(series.iter().map(|&x| Complex::new(x, 0.0)));
    buffer.resize(padded_len, Complex::new(0.0, 0.0));

    planner.plan_fft_forward(padded_len).process(&mut buffer);
    for value in buffer.iter_mut() {
        // Power spectral density.
        *value = Complex::new(value.norm_sqr(), 0.0);
    }
    planner.plan_fft_inverse(padded_len).process(&mut buffer);

    (0..n)
        .map(|m| buffer[m].re / padded_len as f64 / (n - m) as f64)
        .collect()
}

/// Mean-square displacement computed in O(n log n) via the
/// Wiener-Khinchin theorem; agrees with [`msd`] to floating tolerance.
///
/// Splits MSD[m] into S1[m] - 2*S2[m]: S2 is the summed per-dimension
/// autocorrelation, S1 comes from a running sum of squared norms that
/// drops one leading and one trailing term per lag step.
pub fn msd_fft(trajectory: &[Point3<f64>]) -> Result<Vec<f64>, GeometryError> {
    require_nonempty(trajectory)?;
    let n = trajectory.len();
    let mut planner = FftPlanner::new();

    let mut s2 = vec![0.0; n];
    for dim in 0..3 {
        let series: Vec<f64> = trajectory.iter().map(|p| p[dim]).collect();
        for (m, value) in autocorrelation_fft(&series, &mut planner).iter().enumerate() {
            s2[m] += value;
        }
    }

    // Squared norms with a trailing zero, so the two terms retired per lag
    // step read from one array (the m = 0 step retires only zeros).
    let mut squared_norms: Vec<f64> = trajectory.iter().map(|p| p.coords.norm_squared()).collect();
    squared_norms.push(0.0);

    let mut running = 2.0 * squared_norms.iter().sum::<f64>();
    let mut curve = vec![0.0; n];
    for (m, value) in curve.iter_mut().enumerate() {
        let leading = if m == 0 { n } else { m - 1 };
        running -= squared_norms[leading] + squared_norms[n - m];
        let s1 = running / (n - m) as f64;
        *value = s1 - 2.0 * s2[m];
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn drift_trajectory() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn uniform_drift_gives_squared_lag_distances() {
        let expected = [0.0, 1.0, 4.0];
        for curve in [
            msd(&drift_trajectory()).unwrap(),
            msd_fft(&drift_trajectory()).unwrap(),
        ] {
            assert_eq!(curve.len(), 3);
            for (value, want) in curve.iter().zip(expected.iter()) {
                assert!((value - want).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn lag_zero_is_exactly_zero() {
        let trajectory = vec![Point3::new(0.3, -1.2, 2.5)];
        assert!(msd(&trajectory).unwrap()[0].abs() < 1e-12);
        assert!(msd_fft(&trajectory).unwrap()[0].abs() < 1e-12);
    }

    #[test]
    fn direct_and_fft_results_agree_on_random_trajectories() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [2usize, 5, 20, 100] {
            let trajectory: Vec<Point3<f64>> = (0..n)
                .map(|_| {
                    Point3::new(
                        rng.gen_range(-5.0..5.0),
                        rng.gen_range(-5.0..5.0),
                        rng.gen_range(-5.0..5.0),
                    )
                })
                .collect();
            let direct = msd(&trajectory).unwrap();
            let fft = msd_fft(&trajectory).unwrap();
            assert_eq!(direct.len(), n);
            assert_eq!(fft.len(), n);
            let max_deviation = direct
                .iter()
                .zip(fft.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0_f64, f64::max);
            assert!(max_deviation < 1e-6, "n = {}: {}", n, max_deviation);
        }
    }

    #[test]
    fn empty_trajectory_is_insufficient() {
        assert_eq!(
            msd(&[]),
            Err(GeometryError::InsufficientData {
                stage: "mean-square displacement",
                required: 1,
                actual: 0,
            })
        );
        assert_eq!(
            msd_fft(&[]),
            Err(GeometryError::InsufficientData {
                stage: "mean-square displacement",
                required: 1,
                actual: 0,
            })
        );
    }
}
