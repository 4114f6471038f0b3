/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # symdegen-rs
//!
//! Monte-Carlo estimation of symmetry degeneracy for partially ordered
//! spinel configurations.
//!
//! A configuration places two interchangeable cations (Co and Mn) on the
//! tetrahedral and octahedral sublattices of a spinel cell with a fixed
//! oxygen sublattice. Its degeneracy fraction is the estimated share of
//! random decorations, drawn from the exact combinatorial space of its
//! composition, that the space group of the de-coloured parent structure
//! maps onto it. The fraction is used as a weighting correction when
//! computing configurational entropies over an enumerated set of structures.

pub mod cli;
pub mod config;
pub mod degeneracy;
pub mod structure;
pub mod symmetry;

pub use config::DegeneracyConfig;
pub use degeneracy::{DegeneracyDriver, FillingConvention};
pub use structure::{Structure, SublatticeLayout};
pub use symmetry::{PeriodicFold, SymmetryOperationSet};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
