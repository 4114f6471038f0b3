/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Symmetry operations module
//!
//! Discovery of the parent structure's space-group operations, their
//! application to a structure and the equivalence test that decides whether
//! two decorations of the parent are related by one of them.

mod apply;
mod equivalence;
pub mod errors;
mod finder;
mod operations;

pub use apply::{apply, apply_indexed, wrap_fractional, PeriodicFold};
pub use equivalence::{is_equivalent, periodic_match, site_aligned_match};
pub use errors::{Result, SymmetryError};
pub use finder::{MoyoFinder, SymmetryFinder};
pub use operations::{SymmetryOperation, SymmetryOperationSet};
