/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Crystal structure representation
//!
//! This module provides the periodic [`Structure`] value type together with
//! its sublattice partition, the POSCAR reader and the site-decoration
//! operations (de-colouring and random resampling) used by the degeneracy
//! sampler.

pub mod database;
pub mod decoration;
pub mod errors;
pub mod layout;
pub mod poscar;
#[allow(clippy::module_inception)]
pub mod structure;

pub use decoration::{
    decolor, random_resample, substituent_counts, SubstituentPair, COBALT, MANGANESE,
};
pub use errors::{Result, StructureError};
pub use layout::{Sublattice, SublatticeLayout};
pub use poscar::{parse_poscar, read_poscar};
pub use structure::{cartesian_to_fractional, Structure};
