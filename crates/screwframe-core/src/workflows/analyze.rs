use crate::analysis::{msd, msd_fft, screwframe_rotation_centers};
use crate::core::geometry::GeometryError;
use crate::core::models::Molecule;
use nalgebra::Point3;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("analysis requires a molecule with at least one atom")]
    EmptyMolecule,
}

/// Which atoms of the chain the analyzed molecule holds. Recorded in the
/// report so downstream consumers can label results; the caller performs
/// the actual selection when building the [`Molecule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AtomSelection {
    #[default]
    AllAtoms,
    AlphaCarbons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsdMethod {
    Direct,
    Fft,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub selection: AtomSelection,
    pub rotation_centers: bool,
    pub msd: Option<MsdMethod>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            selection: AtomSelection::default(),
            rotation_centers: true,
            msd: Some(MsdMethod::Fft),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub selection: AtomSelection,
    pub atom_count: usize,
    pub residue_count: usize,
    pub center_of_geometry: Point3<f64>,
    pub radius_of_gyration: f64,
    pub radius_of_gyration_per_residue: Option<f64>,
    pub rotation_centers: Option<Vec<Point3<f64>>>,
    pub msd: Option<Vec<f64>>,
}

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(molecule: &Molecule, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    info!(
        atoms = molecule.atom_count(),
        residues = molecule.residue_count(),
        "Starting backbone analysis."
    );

    let center_of_geometry = molecule
        .center_of_geometry()
        .ok_or(AnalysisError::EmptyMolecule)?;
    let radius_of_gyration = molecule
        .radius_of_gyration()
        .ok_or(AnalysisError::EmptyMolecule)?;
    let radius_of_gyration_per_residue = molecule.radius_of_gyration_per_residue();

    let rotation_centers = if config.rotation_centers {
        info!("Computing screw-frame rotation centers.");
        Some(screwframe_rotation_centers(molecule.coordinates())?)
    } else {
        None
    };

    let msd_curve = match config.msd {
        Some(MsdMethod::Direct) => {
            info!("Computing mean-square displacement (direct).");
            Some(msd(molecule.coordinates())?)
        }
        Some(MsdMethod::Fft) => {
            info!("Computing mean-square displacement (FFT).");
            Some(msd_fft(molecule.coordinates())?)
        }
        None => None,
    };

    info!("Analysis finished.");
    Ok(AnalysisReport {
        selection: config.selection,
        atom_count: molecule.atom_count(),
        residue_count: molecule.residue_count(),
        center_of_geometry,
        radius_of_gyration,
        radius_of_gyration_per_residue,
        rotation_centers,
        msd: msd_curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helix_molecule(n: usize) -> Molecule {
        let coordinates = (0..n)
            .map(|i| {
                let theta = 1.745 * i as f64;
                Point3::new(0.23 * theta.cos(), 0.23 * theta.sin(), 0.15 * i as f64)
            })
            .collect();
        Molecule::new(coordinates, n)
    }

    #[test]
    fn full_analysis_reports_every_result() {
        let molecule = helix_molecule(10);
        let config = AnalysisConfig {
            selection: AtomSelection::AlphaCarbons,
            rotation_centers: true,
            msd: Some(MsdMethod::Fft),
        };
        let report = run(&molecule, &config).unwrap();
        assert_eq!(report.selection, AtomSelection::AlphaCarbons);
        assert_eq!(report.atom_count, 10);
        assert_eq!(report.rotation_centers.as_ref().unwrap().len(), 7);
        let curve = report.msd.as_ref().unwrap();
        assert_eq!(curve.len(), 10);
        assert!(curve[0].abs() < 1e-9);
    }

    #[test]
    fn descriptors_only_when_everything_is_disabled() {
        let molecule = helix_molecule(6);
        let config = AnalysisConfig {
            selection: AtomSelection::AllAtoms,
            rotation_centers: false,
            msd: None,
        };
        let report = run(&molecule, &config).unwrap();
        assert!(report.rotation_centers.is_none());
        assert!(report.msd.is_none());
        assert!(report.radius_of_gyration > 0.0);
    }

    #[test]
    fn direct_and_fft_methods_agree_through_the_workflow() {
        let molecule = helix_molecule(8);
        let direct = run(
            &molecule,
            &AnalysisConfig {
                msd: Some(MsdMethod::Direct),
                ..AnalysisConfig::default()
            },
        )
        .unwrap();
        let fft = run(
            &molecule,
            &AnalysisConfig {
                msd: Some(MsdMethod::Fft),
                ..AnalysisConfig::default()
            },
        )
        .unwrap();
        let direct_curve = direct.msd.unwrap();
        let fft_curve = fft.msd.unwrap();
        for (a, b) in direct_curve.iter().zip(fft_curve.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_molecule_is_rejected() {
        let molecule = Molecule::new(Vec::new(), 0);
        let result = run(&molecule, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::EmptyMolecule)));
    }

    #[test]
    fn geometry_errors_keep_their_stage_context() {
        // Too short for rotation centers but long enough for the MSD.
        let molecule = Molecule::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.38, 0.0, 0.0),
                Point3::new(0.76, 0.1, 0.0),
            ],
            3,
        );
        let result = run(&molecule, &AnalysisConfig::default());
        assert!(matches!(
            result,
            Err(AnalysisError::Geometry(GeometryError::InsufficientData {
                stage: "screwframe rotation centers",
                required: 4,
                ..
            }))
        ));
    }
}
