/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Application of a symmetry operation to a structure

use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::errors::{Result, SymmetryError};
use super::operations::{SymmetryOperation, SymmetryOperationSet};
use crate::structure::Structure;

/// How a transformed structure is brought back into a canonical periodic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodicFold {
    /// Rotate the lattice (`L R`), shift positions by `t` and take the
    /// element-wise absolute value of the lattice vectors.
    ///
    /// Fractional coordinates are never wrapped. This only behaves like a
    /// periodic wrap for the near-orthogonal cells of the Co/Mn spinel
    /// datasets, and is kept for compatibility with results produced that way.
    #[default]
    AbsoluteLattice,
    /// Keep the lattice, map positions to `R x + t` and wrap them into [0, 1).
    WrapFractional,
}

impl FromStr for PeriodicFold {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "absolute-lattice" => Ok(PeriodicFold::AbsoluteLattice),
            "wrap-fractional" => Ok(PeriodicFold::WrapFractional),
            _ => Err(SymmetryError::UnknownFold(s.to_string())),
        }
    }
}

/// Apply one operation to a structure
///
/// Species and site indices are carried over unchanged; only the lattice
/// and the fractional coordinates are transformed.
pub fn apply(structure: &Structure, operation: &SymmetryOperation, fold: PeriodicFold) -> Structure {
    match fold {
        PeriodicFold::AbsoluteLattice => {
            // Right-multiplication matches the lattice-row convention of the
            // operations reported for the input cell.
            let lattice = (structure.lattice() * operation.rotation_f64()).abs();
            let positions = structure
                .positions()
                .iter()
                .map(|frac| frac + operation.translation())
                .collect();
            structure.with_geometry(lattice, positions)
        }
        PeriodicFold::WrapFractional => {
            let rotation = operation.rotation_f64();
            let positions = structure
                .positions()
                .iter()
                .map(|frac| wrap_fractional(&(rotation * frac + operation.translation())))
                .collect();
            structure.with_geometry(*structure.lattice(), positions)
        }
    }
}

/// Apply the operation stored at `index` of an operation set
pub fn apply_indexed(
    structure: &Structure,
    operations: &SymmetryOperationSet,
    index: usize,
    fold: PeriodicFold,
) -> Result<Structure> {
    Ok(apply(structure, operations.get(index)?, fold))
}

/// Wrap each fractional component into [0, 1)
pub fn wrap_fractional(frac: &Vector3<f64>) -> Vector3<f64> {
    frac.map(|x| {
        let wrapped = x - x.floor();
        // x slightly below an integer can round up to exactly 1.0
        if wrapped >= 1.0 {
            0.0
        } else {
            wrapped
        }
    })
}
