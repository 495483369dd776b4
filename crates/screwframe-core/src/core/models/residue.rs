use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidechainPolarity {
    Hydrophobic,
    Hydrophilic,
}

// Classification of amino-acid side chains; TYR is disputed in the
// literature and recorded here as hydrophilic.
static SIDECHAIN_POLARITY: Map<&'static str, SidechainPolarity> = phf_map! {
    "ALA" => SidechainPolarity::Hydrophobic,
    "ARG" => SidechainPolarity::Hydrophilic,
    "ASN" => SidechainPolarity::Hydrophilic,
    "ASP" => SidechainPolarity::Hydrophilic,
    "ASX" => SidechainPolarity::Hydrophilic,
    "CYS" => SidechainPolarity::Hydrophilic,
    "GLU" => SidechainPolarity::Hydrophilic,
    "GLN" => SidechainPolarity::Hydrophilic,
    "GLX" => SidechainPolarity::Hydrophilic,
    "GLY" => SidechainPolarity::Hydrophilic,
    "HIS" => SidechainPolarity::Hydrophilic,
    "ILE" => SidechainPolarity::Hydrophobic,
    "LEU" => SidechainPolarity::Hydrophobic,
    "LYS" => SidechainPolarity::Hydrophilic,
    "MET" => SidechainPolarity::Hydrophobic,
    "PHE" => SidechainPolarity::Hydrophobic,
    "PRO" => SidechainPolarity::Hydrophobic,
    "SER" => SidechainPolarity::Hydrophilic,
    "THR" => SidechainPolarity::Hydrophilic,
    "TRP" => SidechainPolarity::Hydrophobic,
    "TYR" => SidechainPolarity::Hydrophilic,
    "VAL" => SidechainPolarity::Hydrophobic,
};

pub fn sidechain_polarity(residue_name: &str) -> Option<SidechainPolarity> {
    SIDECHAIN_POLARITY.get(residue_name.trim()).copied()
}

pub fn is_hydrophobic(residue_name: &str) -> bool {
    matches!(
        sidechain_polarity(residue_name),
        Some(SidechainPolarity::Hydrophobic)
    )
}
