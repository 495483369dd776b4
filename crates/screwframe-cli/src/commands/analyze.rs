use crate::cli::AnalyzeArgs;
use crate::config::FileAnalysisConfig;
use crate::error::{CliError, Result};
use nalgebra::Point3;
use screwframe::core::io::pdb;
use screwframe::core::models::Molecule;
use screwframe::workflows::{self, AnalysisReport, AtomSelection};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileAnalysisConfig::from_file(path)?,
        None => FileAnalysisConfig::default(),
    };
    let config = file_config.merge_with_cli(&args);

    if args.centers_out.is_some() && !config.rotation_centers {
        return Err(CliError::Config(
            "--centers-out requires the rotation-center pipeline to be enabled".to_string(),
        ));
    }
    if args.msd_out.is_some() && config.msd.is_none() {
        return Err(CliError::Config(
            "--msd-out requires the MSD computation to be enabled".to_string(),
        ));
    }

    info!("Loading input structure from {:?}", &args.input);
    let file = File::open(&args.input)?;
    let atoms =
        pdb::read_first_chain(&mut BufReader::new(file)).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: anyhow::Error::new(e),
        })?;

    // The classification header sits before the coordinate section, so a
    // second pass over the file is the simplest way to reach it.
    let file = File::open(&args.input)?;
    if pdb::is_nucleic_acid(&mut BufReader::new(file)).unwrap_or(false) {
        warn!("Entry appears to be a DNA/RNA structure; this analysis assumes a protein chain.");
    }

    let residue_count = pdb::residue_sequence(&atoms).len();
    let coordinates = match config.selection {
        AtomSelection::AllAtoms => atoms.iter().map(|atom| atom.position).collect(),
        AtomSelection::AlphaCarbons => pdb::alpha_carbon_positions(&atoms),
    };
    info!(
        "Analyzing {} of {} parsed atoms across {} residues.",
        coordinates.len(),
        atoms.len(),
        residue_count
    );
    let molecule = Molecule::new(coordinates, residue_count);

    let report = workflows::analyze(&molecule, &config)?;
    print_summary(&report);

    if let Some(path) = &args.centers_out {
        // Checked above: enabled in the config, so the report carries them.
        let centers = report.rotation_centers.as_deref().unwrap_or(&[]);
        write_centers_csv(path, centers)?;
        info!("Wrote {} rotation centers to {:?}", centers.len(), path);
    }
    if let Some(path) = &args.msd_out {
        let curve = report.msd.as_deref().unwrap_or(&[]);
        write_msd_csv(path, curve)?;
        info!("Wrote {} MSD samples to {:?}", curve.len(), path);
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let selection = match report.selection {
        AtomSelection::AllAtoms => "all atoms",
        AtomSelection::AlphaCarbons => "alpha carbons",
    };
    println!("Selection:                {}", selection);
    println!("Atoms analyzed:           {}", report.atom_count);
    println!("Residues:                 {}", report.residue_count);
    println!(
        "Center of geometry (nm):  ({:.4}, {:.4}, {:.4})",
        report.center_of_geometry.x, report.center_of_geometry.y, report.center_of_geometry.z
    );
    println!("Radius of gyration (nm):  {:.4}", report.radius_of_gyration);
    if let Some(normalized) = report.radius_of_gyration_per_residue {
        println!("  per residue:            {:.6}", normalized);
    }
    if let Some(centers) = &report.rotation_centers {
        println!("Rotation centers:         {}", centers.len());
    }
    if let Some(curve) = &report.msd {
        println!("MSD samples:              {}", curve.len());
    }
}

fn write_centers_csv(path: &Path, centers: &[Point3<f64>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "y", "z"])?;
    for center in centers {
        writer.write_record(&[
            center.x.to_string(),
            center.y.to_string(),
            center.z.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_msd_csv(path: &Path, curve: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["lag", "msd"])?;
    for (lag, value) in curve.iter().enumerate() {
        writer.write_record(&[lag.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
