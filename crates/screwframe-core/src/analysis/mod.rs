//! # Analysis Module
//!
//! Whole-backbone algorithm drivers built on the geometric primitives.
//!
//! ## Key Components
//!
//! - **Rotation Centers** ([`centers`]) - The screw-frame pipeline: frames,
//!   frame-to-frame rotations, screw decomposition, and the resulting
//!   sequence of local rotation centers.
//! - **Mean-Square Displacement** ([`msd`]) - Direct quadratic-time MSD and
//!   its Fourier-accelerated equivalent over any coordinate sequence.
//!
//! Both operate on plain coordinate slices and are independent of each
//! other: the MSD engine accepts a full-atom chain, an alpha-carbon chain,
//! or a rotation-center sequence alike.

pub mod centers;
pub mod msd;

pub use centers::screwframe_rotation_centers;
pub use msd::{msd, msd_fft};
