use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

const ANGSTROMS_PER_NANOMETER: f64 = 10.0;

// Coordinate fields must be present, so an ATOM record has to reach the
// end of the z column.
const MIN_ATOM_RECORD_LEN: usize = 54;

/// One accepted ATOM record of the first chain. Coordinates are converted
/// to nanometers on read.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbAtom {
    pub name: String,
    pub residue_name: String,
    pub residue_seq: isize,
    pub position: Point3<f64>,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Line is too short for an ATOM record (must reach column 54)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let field = slice_and_trim(line, start, end);
    field.parse::<f64>().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: field.to_string(),
        },
    })
}

fn parse_int(line: &str, line_num: usize, start: usize, end: usize) -> Result<isize, PdbError> {
    let field = slice_and_trim(line, start, end);
    field.parse::<isize>().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: field.to_string(),
        },
    })
}

/// Reads the ATOM records of the first chain (everything before the first
/// `TER` record). Crystallographic alternate locations are resolved by
/// keeping only records whose altloc column is blank or `A`.
pub fn read_first_chain(reader: &mut impl BufRead) -> Result<Vec<PdbAtom>, PdbError> {
    let mut atoms = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if line.starts_with("TER") {
            break;
        }
        if !line.starts_with("ATOM") {
            continue;
        }
        if line.len() < MIN_ATOM_RECORD_LEN {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::LineTooShort,
            });
        }

        let altloc = slice_and_trim(&line, 16, 17);
        if !(altloc.is_empty() || altloc == "A") {
            continue;
        }

        let name = slice_and_trim(&line, 12, 16).to_string();
        let residue_name = slice_and_trim(&line, 17, 20).to_string();
        let residue_seq = parse_int(&line, line_num, 22, 26)?;
        let x = parse_float(&line, line_num, 30, 38)?;
        let y = parse_float(&line, line_num, 38, 46)?;
        let z = parse_float(&line, line_num, 46, 54)?;

        atoms.push(PdbAtom {
            name,
            residue_name,
            residue_seq,
            position: Point3::new(
                x / ANGSTROMS_PER_NANOMETER,
                y / ANGSTROMS_PER_NANOMETER,
                z / ANGSTROMS_PER_NANOMETER,
            ),
        });
    }

    if atoms.is_empty() {
        return Err(PdbError::MissingRecord("ATOM".to_string()));
    }
    Ok(atoms)
}

pub fn alpha_carbon_positions(atoms: &[PdbAtom]) -> Vec<Point3<f64>> {
    atoms
        .iter()
        .filter(|atom| atom.name == "CA")
        .map(|atom| atom.position)
        .collect()
}

/// Residue names in chain order, one entry per residue: an atom opens a new
/// residue when its sequence number exceeds every number seen before it.
pub fn residue_sequence(atoms: &[PdbAtom]) -> Vec<String> {
    let mut names = Vec::new();
    let mut highest_seen = isize::MIN;
    for atom in atoms {
        if atom.residue_seq > highest_seen {
            highest_seen = atom.residue_seq;
            names.push(atom.residue_name.clone());
        }
    }
    names
}

/// True when a `COMPND   2` header record mentions DNA or RNA, meaning the
/// entry is a nucleic-acid structure rather than a protein.
pub fn is_nucleic_acid(reader: &mut impl BufRead) -> Result<bool, PdbError> {
    for line_res in reader.lines() {
        let line = line_res?;
        if line.starts_with("COMPND   2") && (line.contains("DNA") || line.contains("RNA")) {
            return Ok(true);
        }
    }
    Ok(false)
}
