use nalgebra::{Point3, Vector3};

/// Immutable coordinate set of one parsed chain, in nanometers.
///
/// Constructed once by the I/O layer and handed to the analysis stages;
/// no derived state is cached on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    coordinates: Vec<Point3<f64>>,
    residue_count: usize,
}

impl Molecule {
    pub fn new(coordinates: Vec<Point3<f64>>, residue_count: usize) -> Self {
        Self {
            coordinates,
            residue_count,
        }
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn atom_count(&self) -> usize {
        self.coordinates.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residue_count
    }

    /// Unweighted mean of the atomic coordinates. `None` for an empty set.
    pub fn center_of_geometry(&self) -> Option<Point3<f64>> {
        if self.coordinates.is_empty() {
            return None;
        }
        let sum = self
            .coordinates
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum / self.coordinates.len() as f64))
    }

    /// Root of the mean squared distance to the geometric center, in nm.
    pub fn radius_of_gyration(&self) -> Option<f64> {
        let center = self.center_of_geometry()?;
        let mean_sq = self
            .coordinates
            .iter()
            .map(|p| (p - center).norm_squared())
            .sum::<f64>()
            / self.coordinates.len() as f64;
        Some(mean_sq.sqrt())
    }

    /// Radius of gyration divided by the number of residues, for comparing
    /// chains of different lengths. `None` when the molecule is empty or
    /// has no residues.
    pub fn radius_of_gyration_per_residue(&self) -> Option<f64> {
        if self.residue_count == 0 {
            return None;
        }
        Some(self.radius_of_gyration()? / self.residue_count as f64)
    }
}
