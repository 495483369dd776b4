//! # Workflows Module
//!
//! High-level entry points tying the core and analysis layers together.
//!
//! ## Key Components
//!
//! - **Backbone Analysis** ([`analyze`]) - One call from a parsed
//!   [`Molecule`](crate::core::models::Molecule) to an
//!   [`AnalysisReport`](analyze::AnalysisReport): whole-chain descriptors,
//!   screw-frame rotation centers, and a mean-square-displacement curve,
//!   each phase individually selectable.

pub mod analyze;

pub use analyze::{
    AnalysisConfig, AnalysisError, AnalysisReport, AtomSelection, MsdMethod, run as analyze,
};
