//! # Core Models Module
//!
//! Value types describing a parsed structure.
//!
//! ## Key Components
//!
//! - [`molecule`] - Immutable coordinate set with whole-chain descriptors
//! - [`residue`] - Side-chain polarity classification of amino-acid codes

pub mod molecule;
pub mod residue;

pub use molecule::Molecule;
pub use residue::{SidechainPolarity, is_hydrophobic, sidechain_polarity};
