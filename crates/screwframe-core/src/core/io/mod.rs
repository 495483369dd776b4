//! Reading of legacy fixed-column structure files.
//!
//! Only the subset of the PDB text format needed upstream of the analyses
//! is handled: first-chain ATOM records, alternate-location resolution,
//! and the COMPND classification header.

pub mod pdb;
