//! # Geometry Module
//!
//! Primitives for the screw-frame description of a backbone curve.
//!
//! ## Overview
//!
//! This module builds the geometric pipeline stage by stage: unit-vector
//! primitives, discrete Frenet frames at interior backbone positions, the
//! least-squares quaternion rotation between consecutive frames, and the
//! screw decomposition of each rotation/translation step.
//!
//! ## Key Components
//!
//! - [`vector`] - Norm and normalization primitives over single vectors and batches
//! - [`frame`] - Discrete Frenet (tangent, normal) frames along a backbone
//! - [`rotation`] - Quaternion rotation and angular distance between consecutive frames
//! - [`screw`] - Screw parameters (axis, angle, axial displacement, axis point)
//! - [`error`] - Stage- and index-tagged geometry error types
//!
//! All functions are pure: inputs are borrowed immutably and every result
//! is freshly owned.

pub mod error;
pub mod frame;
pub mod rotation;
pub mod screw;
pub mod vector;

pub use error::GeometryError;
pub use frame::{FrenetBasis, frenet_bases, frenet_basis};
pub use rotation::{FrameRotation, frame_rotation_and_distance};
pub use screw::{ScrewParameters, screw_motion};
pub use vector::{norm, normalize_batch, normalize_vector};
