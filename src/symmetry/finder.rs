/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Discovery of the space-group operations of a structure

use log::debug;
use moyo::base::{AngleTolerance, Cell, Lattice};
use moyo::data::Setting;
use moyo::MoyoDataset;

use super::errors::{Result, SymmetryError};
use super::operations::{SymmetryOperation, SymmetryOperationSet};
use crate::structure::Structure;

/// Source of symmetry operations for a parent structure
///
/// Implementations must be shareable across threads; the driver holds one
/// finder for the whole batch.
pub trait SymmetryFinder: Send + Sync {
    /// Operations of `structure` detected with the given positional tolerance
    fn find_operations(&self, structure: &Structure, tolerance: f64)
        -> Result<SymmetryOperationSet>;
}

/// Symmetry search backed by moyo
///
/// Returns the operations of the input cell (not of a standardised cell) in
/// the order moyo reports them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoyoFinder;

impl MoyoFinder {
    pub fn new() -> Self {
        Self
    }
}

impl SymmetryFinder for MoyoFinder {
    fn find_operations(
        &self,
        structure: &Structure,
        tolerance: f64,
    ) -> Result<SymmetryOperationSet> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(SymmetryError::InvalidTolerance(tolerance));
        }

        // Lattice::new takes basis vectors as rows, same as Structure
        let lattice = Lattice::new(*structure.lattice());
        let cell = Cell::new(
            lattice,
            structure.positions().to_vec(),
            structure.species().to_vec(),
        );

        let dataset = MoyoDataset::new(
            &cell,
            tolerance,
            AngleTolerance::Default,
            Setting::Spglib,
            true,
        )
        .map_err(|e| SymmetryError::DiscoveryFailed(format!("{:?}", e)))?;

        debug!(
            "moyo found space group {} with {} operations",
            dataset.number,
            dataset.operations.len()
        );

        let operations = dataset
            .operations
            .iter()
            .map(|op| SymmetryOperation::new(op.rotation, op.translation))
            .collect();
        SymmetryOperationSet::new(operations, tolerance)
    }
}
